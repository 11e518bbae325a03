use std::fs::File;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use combobox::app::App;
use combobox::cli::{Args, format_highlight};
use combobox::config::{load_config, load_config_from_path};
use combobox::items::{default_items, load_items};

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    init_logging();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => load_config(),
    };
    args.apply_to(&mut config);

    if let Some([query, text]) = args.highlight.as_deref() {
        print!("{}", format_highlight(query, text, &config.highlight));
        return Ok(());
    }

    let items = match &args.items {
        Some(path) => load_items(path)?,
        None => default_items(),
    };
    log::debug!("Loaded {} items", items.len());

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, App::new(items, &config));

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    let selected = result?;
    if let Some(value) = selected {
        println!("{value}");
    }
    Ok(())
}

/// Runs until the user quits; returns the last selected value
fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<Option<String>> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;

        if app.should_quit {
            return Ok(app.selected());
        }
    }
}

/// Debug builds log to a file in the temp dir; the terminal belongs to the UI
fn init_logging() {
    if !cfg!(debug_assertions) {
        return;
    }

    let path = std::env::temp_dir().join("combobox-debug.log");
    let Ok(file) = File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}
