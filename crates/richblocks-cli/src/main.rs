mod app;
mod render;

use anyhow::{Context, Result};
use app::{App, Source};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use richblocks_config::Config;
use std::{
    env,
    io::{Read, Stdout, stdout},
    path::PathBuf,
    process,
    time::Duration,
};

const USAGE: &str = "Usage: richblocks-cli [--dump] [--save-config] [document-path | -]";

#[derive(Debug, PartialEq)]
struct Args {
    dump: bool,
    /// Store the given document path as the config default.
    save_config: bool,
    source: Option<Source>,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args, String> {
    let mut dump = false;
    let mut save_config = false;
    let mut source = None;

    for arg in args {
        match arg.as_str() {
            "--dump" => dump = true,
            "--save-config" => save_config = true,
            "-" if source.is_none() => source = Some(Source::Stdin),
            s if s.starts_with("--") => return Err(format!("Unknown option '{s}'")),
            s if source.is_none() => source = Some(Source::File(PathBuf::from(s))),
            _ => return Err("Only one document path may be given".to_string()),
        }
    }

    Ok(Args {
        dump,
        save_config,
        source,
    })
}

fn read_source(source: &Source) -> Result<String> {
    match source {
        Source::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document '{}'", path.display())),
        Source::Stdin => {
            let mut document = String::new();
            std::io::stdin()
                .read_to_string(&mut document)
                .context("Failed to read document from stdin")?;
            Ok(document)
        }
    }
}

/// Points the config's default document at `source`.
///
/// Returns false for stdin, which has no path to remember.
fn remember_document(config: &mut Config, source: &Source) -> Result<bool> {
    let Source::File(path) = source else {
        return Ok(false);
    };
    let path = std::path::absolute(path)
        .with_context(|| format!("Failed to resolve document path '{}'", path.display()))?;
    config.document_path = Some(path);
    Ok(true)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());
    let mut config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let source = match args.source {
        Some(source) => source,
        None => match config.document_path.clone() {
            Some(path) => {
                log::info!("Using document path from config: {}", path.display());
                Source::File(path)
            }
            None => {
                eprintln!("Error: No document path provided and none set in config");
                eprintln!("{USAGE}");
                eprintln!(
                    "Or set document_path in a config file at {}",
                    config_path.display()
                );
                process::exit(1);
            }
        },
    };

    if args.save_config {
        if remember_document(&mut config, &source)? {
            config.save()?;
            log::info!("Saved document path to {}", config_path.display());
        } else {
            eprintln!("Warning: stdin has no path to save; config left unchanged");
        }
    }

    let document = read_source(&source)?;

    if args.dump {
        let blocks = richblocks_engine::parse(&document);
        println!("{}", serde_json::to_string_pretty(&blocks)?);
        return Ok(());
    }

    let metrics = config.layout.apply_to(render::terminal_metrics());
    let mut app = App::new(source, metrics);
    app.mailbox().post(document);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.poll();
        terminal.draw(|f| render::ui(f, app))?;

        // Wake up regularly so reloads posted by the background thread show up.
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code)
        {
            return Ok(());
        }
    }
}
