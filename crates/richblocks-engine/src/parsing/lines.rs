/// A reference to a single line of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// 1-based line number, for diagnostics.
    pub number: usize,
    /// The line text without its terminator.
    pub text: &'a str,
}

/// Iterator over the lines of a document, see [`split_lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: Option<&'a str>,
    number: usize,
}

/// Returns an iterator over the lines of `document`.
///
/// `\r\n`, `\r` and `\n` all terminate a line. Empty lines are kept, including
/// a trailing one after a final terminator. An empty document has no lines.
pub fn split_lines(document: &str) -> Lines<'_> {
    Lines {
        rest: (!document.is_empty()).then_some(document),
        number: 0,
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = LineRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        self.number += 1;

        let text = match rest.find(['\r', '\n']) {
            Some(i) => {
                let terminator = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = Some(&rest[i + terminator..]);
                &rest[..i]
            }
            None => {
                self.rest = None;
                rest
            }
        };

        Some(LineRef {
            number: self.number,
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(document: &str) -> Vec<&str> {
        split_lines(document).map(|l| l.text).collect()
    }

    #[test]
    fn empty_document_has_no_lines() {
        assert!(texts("").is_empty());
    }

    #[test]
    fn mixed_terminators() {
        assert_eq!(texts("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn keeps_blank_lines() {
        assert_eq!(texts("a\n\n  \nb"), vec!["a", "", "  ", "b"]);
    }

    #[test]
    fn trailing_terminator_yields_empty_line() {
        assert_eq!(texts("a\n"), vec!["a", ""]);
    }

    #[test]
    fn numbers_are_one_based() {
        let numbers: Vec<usize> = split_lines("x\ny\nz").map(|l| l.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
