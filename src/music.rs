//! Background music simulation. Shares no state with the game.

use anyhow::Context;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::info;

/// Start "playing" music on its own thread for a fixed duration
pub fn spawn_background_music(duration: Duration) -> anyhow::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("music".to_string())
        .spawn(move || play_background_music(duration))
        .context("Failed to start music thread")
}

fn play_background_music(duration: Duration) {
    println!("Playing background music...");
    info!(?duration, "music started");
    thread::sleep(duration);
    println!("Music ended.");
    info!("music ended");
}
