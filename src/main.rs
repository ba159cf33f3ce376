use anyhow::Result;
use clap::Parser;
use mystic_quest::{
    config::GameConfig, input::ConsoleInput, music, renderer::ConsoleRenderer, session::Session,
};
use save::SaveSystem;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mystic_quest")]
#[command(about = "A small text adventure: fight the goblin, collect treasure, save your hero")]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Save file to write and load
    #[arg(long)]
    save_file: Option<PathBuf>,

    /// How long the background music plays, in seconds
    #[arg(long)]
    music_secs: Option<u64>,

    /// Skip the background music
    #[arg(long)]
    no_music: bool,

    /// Verbose logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    }
    .with_overrides(cli.save_file, cli.music_secs, cli.no_music);
    info!(?config, "starting");

    let mut session = Session::new(
        ConsoleInput::stdin(),
        ConsoleRenderer::stdio(),
        SaveSystem::new(&config.save_file),
    );
    session.show_opening_screen()?;

    let music = if config.music.enabled {
        Some(music::spawn_background_music(config.music_duration())?)
    } else {
        None
    };
    // Wait for the music on every way out of main
    let _music = scopeguard::guard(music, |music| {
        if let Some(handle) = music {
            if handle.join().is_err() {
                warn!("music thread panicked");
            }
        }
    });

    session.run()
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
