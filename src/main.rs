use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use glitch_oracle::app::{App, AppEvent, Stage};
use glitch_oracle::cards;
use glitch_oracle::cards::images::PLACEHOLDER;
use glitch_oracle::config::AppConfig;
use glitch_oracle::engine::config::RevealConfig;
use glitch_oracle::engine::error::load_text_file;
use glitch_oracle::engine::playback::{play, SleepPacer};
use glitch_oracle::engine::reveal::reveal;
use glitch_oracle::engine::vocabulary::VocabularyTable;
use glitch_oracle::engine::{OracleError, Result};
use glitch_oracle::ui::{StreamWriter, TuiManager};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_env();
    if let Some(assets) = cli.assets.clone() {
        config.assets.cards_dir = assets;
    }
    if cli.offline {
        config.narrative.offline = true;
    }

    let _guard = init_tracing(&config, cli.log_stderr)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => run_tui(config, cli.seed),
        Commands::Read {
            query,
            instant,
            save,
            html,
        } => run_read(config, cli.seed, &query, instant, save, html),
        Commands::Reveal { path, instant } => run_reveal(&config, cli.seed, &path, instant),
        Commands::Cards => run_cards(),
    }
}

fn run_tui(config: AppConfig, seed: Option<u64>) -> Result<()> {
    tracing::info!("starting terminal session");
    let mut app = App::new(config, seed);
    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;
    tracing::info!("session closed");
    Ok(())
}

fn run_read(
    mut config: AppConfig,
    seed: Option<u64>,
    query: &str,
    instant: bool,
    save: Option<PathBuf>,
    html: Option<PathBuf>,
) -> Result<()> {
    config.boot.enabled = false;
    if instant {
        config.reveal = RevealConfig::instant();
    }

    let mut app = App::new(config, seed);
    app.handle_event(AppEvent::AdjustSignal(20));
    app.handle_event(AppEvent::Transmit(query.to_string()));
    if app.stage() != Stage::Reading {
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for slot in app.render_state(None).slots {
        let image = match slot.image {
            Some((mime, _)) => mime.as_str(),
            None => PLACEHOLDER,
        };
        writeln!(
            out,
            "{} // {}: {} ({}) {}",
            slot.position, slot.desc, slot.card, slot.archetype, image
        )?;
    }
    writeln!(out, "\n>> ANALYSIS LOG\n")?;

    if let Some(frames) = app.reveal_frames() {
        let mut writer = StreamWriter::new(&mut out);
        play(frames, &mut SleepPacer, |frame| writer.render(frame))?;
    }
    app.mark_streamed();

    if save.is_some() {
        app.handle_event(AppEvent::SaveLog(save));
        report_status(&app);
    }
    if html.is_some() {
        app.handle_event(AppEvent::SaveHtml(html));
        report_status(&app);
    }
    Ok(())
}

fn report_status(app: &App) {
    if let Some(status) = app.session().status.as_deref() {
        eprintln!("{}", status);
    }
}

fn run_reveal(config: &AppConfig, seed: Option<u64>, path: &Path, instant: bool) -> Result<()> {
    let text = load_text_file(path)?;
    tracing::info!(path = %path.display(), bytes = text.len(), "revealing file");

    let vocabulary = VocabularyTable::builtin().with_overrides(config.vocabulary.clone());
    let glitch = config.glitch.clone().sanitized();
    let reveal_config = if instant {
        RevealConfig::instant()
    } else {
        config.reveal.clone()
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let frames = reveal(&text, &vocabulary, &glitch, &reveal_config, &mut rng);
    let stdout = io::stdout();
    let mut writer = StreamWriter::new(stdout.lock());
    let outcome = play(frames, &mut SleepPacer, |frame| writer.render(frame))?;
    tracing::debug!(frames = outcome.frames(), "reveal complete");
    Ok(())
}

fn run_cards() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for card in cards::all() {
        writeln!(
            out,
            "{:<20} {:<24} {}",
            card.name,
            card.archetype,
            card.keywords.join(", ")
        )?;
    }
    Ok(())
}

/// Logs go to `<log_dir>/oracle.log` since the TUI owns stdout.
fn init_tracing(config: &AppConfig, to_stderr: bool) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if to_stderr {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init();
        return Ok(None);
    }

    let dir = config.log_dir();
    fs::create_dir_all(&dir)
        .map_err(|e| OracleError::Logging(format!("{}: {}", dir.display(), e)))?;
    let appender = tracing_appender::rolling::never(&dir, "oracle.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
    Ok(Some(guard))
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal tarot oracle with a glitching reveal", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the card images.
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    /// Seed for reproducible draws and glitches.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Never contact the remote model.
    #[arg(long, global = true)]
    offline: bool,

    /// Log to stderr instead of the log file.
    #[arg(long, global = true)]
    log_stderr: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Full-screen oracle (the default).
    Tui,
    /// Draw and print one reading without the full-screen interface.
    Read {
        /// Question for the oracle; blank lets the void ask.
        #[arg(short, long, default_value = "")]
        query: String,
        /// Print without animation delays.
        #[arg(long)]
        instant: bool,
        /// Also write the reading as plain text.
        #[arg(long)]
        save: Option<PathBuf>,
        /// Also write the reading as an HTML page.
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// Play any text file through the glitch reveal.
    Reveal {
        path: PathBuf,
        #[arg(long)]
        instant: bool,
    },
    /// List the Major Arcana.
    Cards,
}
