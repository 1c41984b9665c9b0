mod app;
mod config;
mod content;
mod likes;
mod names;
mod notify;
mod rotator;
mod theme;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, Popup};
use config::AppConfig;
use names::{NameGenerator, RandomSource, SeededRandom, ThreadRandom};

#[derive(Parser, Debug)]
#[command(name = "whiskers")]
#[command(version, about)]
struct Args {
    /// Print a random cat name and exit
    #[arg(short, long)]
    name: bool,

    /// How many names to print with --name
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Print the breed list as JSON and exit
    #[arg(short, long)]
    breeds: bool,

    /// Print the first cat fact and exit
    #[arg(short, long)]
    fact: bool,

    /// Seed for the name generator (reproducible names)
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds between fact rotations (overrides config)
    #[arg(short, long)]
    interval: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (stderr, silent unless RUST_LOG is set)
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Handle CLI-only commands
    if args.name {
        return print_names(random_source(args.seed), args.count);
    }

    if args.breeds {
        return print_breeds();
    }

    if args.fact {
        println!("{}", content::FACTS[0]);
        return Ok(());
    }

    let mut config = AppConfig::load().unwrap_or_default();
    if let Some(secs) = args.interval {
        apply_interval(&mut config, secs);
    }

    // Run TUI
    run_tui(&config, random_source(args.seed)).await
}

fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    }
}

/// Override the rotation period for this run; out-of-range values fall back to the default
fn apply_interval(config: &mut AppConfig, secs: u64) {
    config.fact_interval_secs = secs;
    config.sanitize();
}

fn generate_names(rng: Box<dyn RandomSource>, count: usize) -> Vec<String> {
    let mut generator = NameGenerator::new(content::NAME_PREFIXES, content::NAME_SUFFIXES, rng);
    (0..count).map(|_| generator.generate()).collect()
}

fn print_names(rng: Box<dyn RandomSource>, count: usize) -> Result<()> {
    for name in generate_names(rng, count) {
        println!("{}", name);
    }
    Ok(())
}

fn print_breeds() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(content::BREEDS)?);
    Ok(())
}

async fn run_tui(config: &AppConfig, rng: Box<dyn RandomSource>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config, rng);
    app.activate();

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

    app.deactivate();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc if app.popup == Popup::None => return Ok(()),
                        KeyCode::Char('c') if key.modifiers.contains(event::KeyModifiers::CONTROL) => {
                            return Ok(())
                        }
                        _ => {
                            // Handle key and catch any errors to prevent crashes
                            if let Err(e) = app.handle_key(key) {
                                app.notifier.show("Error", e.to_string());
                            }
                        }
                    }
                }
            }
        }

        // Timer ticks and toast expiry
        app.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotator::{DEFAULT_INTERVAL_SECS, MAX_INTERVAL_SECS};

    #[test]
    fn test_apply_interval() {
        let mut config = AppConfig::default();
        apply_interval(&mut config, 12);
        assert_eq!(config.fact_interval_secs, 12);

        apply_interval(&mut config, 0);
        assert_eq!(config.fact_interval_secs, DEFAULT_INTERVAL_SECS);

        apply_interval(&mut config, u64::MAX);
        assert_eq!(config.fact_interval_secs, DEFAULT_INTERVAL_SECS);

        apply_interval(&mut config, MAX_INTERVAL_SECS);
        assert_eq!(config.fact_interval_secs, MAX_INTERVAL_SECS);
    }

    #[test]
    fn test_generate_names_count() {
        assert!(generate_names(random_source(None), 0).is_empty());
        let names = generate_names(random_source(Some(9)), 25);
        assert_eq!(names.len(), 25);
        for name in &names {
            let (prefix, suffix) = name.split_once(' ').unwrap();
            assert!(content::NAME_PREFIXES.contains(&prefix));
            assert!(content::NAME_SUFFIXES.contains(&suffix));
        }
    }

    #[test]
    fn test_seed_reproduces_names() {
        let first = generate_names(random_source(Some(2024)), 20);
        let second = generate_names(random_source(Some(2024)), 20);
        assert_eq!(first, second);
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["whiskers", "--name", "--count", "3", "--seed", "7"]);
        assert!(args.name);
        assert_eq!(args.count, 3);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.interval, None);

        let args = Args::parse_from(["whiskers", "--interval", "30"]);
        assert_eq!(args.interval, Some(30));
        let mut config = AppConfig::default();
        apply_interval(&mut config, args.interval.unwrap());
        assert_eq!(config.fact_interval_secs, 30);
    }
}
