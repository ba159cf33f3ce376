//! Shared helpers for session-level tests.

use mystic_quest::input::ConsoleInput;
use mystic_quest::renderer::ConsoleRenderer;
use mystic_quest::session::Session;
use save::SaveSystem;
use std::path::Path;

pub type ScriptedSession<'a> = Session<ConsoleInput<&'a [u8]>, ConsoleRenderer<Vec<u8>, Vec<u8>>>;

/// Session fed from a fixed script, writing into in-memory buffers
pub fn scripted_session<'a>(script: &'a str, save_file: &Path) -> ScriptedSession<'a> {
    Session::new(
        ConsoleInput::new(script.as_bytes()),
        ConsoleRenderer::new(Vec::new(), Vec::new()),
        SaveSystem::new(save_file),
    )
}

/// Run the menu to completion, returning (stdout, stderr) text
pub fn run_script(script: &str, save_file: &Path) -> (String, String) {
    let mut session = scripted_session(script, save_file);
    session.run().expect("session should finish cleanly");
    let (_, renderer) = session.into_parts();
    (
        String::from_utf8(renderer.out).unwrap(),
        String::from_utf8(renderer.err).unwrap(),
    )
}
