/// Host capability returning the height of `text` wrapped at `max_width`.
///
/// Must be deterministic for a given `(text, max_width)` within one
/// layout and draw cycle. Any `Fn(&str, f32) -> f32` is a `Measure`.
pub trait Measure {
    fn measure(&self, text: &str, max_width: f32) -> f32;
}

impl<F> Measure for F
where
    F: Fn(&str, f32) -> f32,
{
    fn measure(&self, text: &str, max_width: f32) -> f32 {
        self(text, max_width)
    }
}
