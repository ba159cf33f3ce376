//! Main menu and ownership of the single player.

use crate::game_loop::GameLoop;
use crate::input::{InputSource, parse_selector};
use crate::renderer::Renderer;
use combat::BoutState;
use error::{GameError, handle_error};
use hero::Hero;
use save::SaveSystem;
use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};
use tracing::{debug, info, warn};

/// Main menu entries, numbered the way they are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, FromRepr)]
#[repr(u8)]
pub enum MenuChoice {
    #[strum(to_string = "Start Game")]
    StartGame = 1,
    #[strum(to_string = "Load Game")]
    LoadGame = 2,
    #[strum(to_string = "Exit")]
    Exit = 3,
}

impl MenuChoice {
    pub fn from_selector(token: &str) -> Option<Self> {
        token.trim().parse::<u8>().ok().and_then(Self::from_repr)
    }
}

/// Whether the menu keeps running after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Menu-driven game session. Owns at most one player at a time.
pub struct Session<I, R> {
    input: I,
    renderer: R,
    save_system: SaveSystem,
    player: Option<Hero>,
    last_outcome: Option<BoutState>,
}

impl<I: InputSource, R: Renderer> Session<I, R> {
    pub fn new(input: I, renderer: R, save_system: SaveSystem) -> Self {
        Self {
            input,
            renderer,
            save_system,
            player: None,
            last_outcome: None,
        }
    }

    /// Whether the session currently holds a player
    pub fn has_player(&self) -> bool {
        self.player.is_some()
    }

    /// How the most recent bout ended, if one was played
    pub fn last_outcome(&self) -> Option<BoutState> {
        self.last_outcome
    }

    /// Hand back the input and renderer, e.g. to inspect what was printed
    pub fn into_parts(self) -> (I, R) {
        (self.input, self.renderer)
    }

    pub fn show_opening_screen(&mut self) -> anyhow::Result<()> {
        for line in [
            "=====================",
            "  Welcome to Mystic Quest!",
            "=====================",
            "",
            "Instructions:",
            "1. Navigate through the forest.",
            "2. Solve puzzles, battle enemies, and collect treasures.",
            "3. Escape the forest to win.",
            "",
        ] {
            self.renderer.line(line)?;
        }
        Ok(())
    }

    /// Run the main menu until the player exits or input runs out
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            for choice in MenuChoice::iter() {
                self.renderer
                    .line(&format!("{}. {}", choice as u8, choice))?;
            }
            self.renderer.prompt("Choose an option: ")?;

            let Some(token) = self.input.next_token()? else {
                info!("input closed at main menu");
                return self.farewell();
            };

            let flow = match parse_selector(&token, MenuChoice::from_selector) {
                Ok(MenuChoice::StartGame) => self.start_game()?,
                Ok(MenuChoice::LoadGame) => self.load_game()?,
                Ok(MenuChoice::Exit) => Flow::Quit,
                Err(e) if e.is_input_error() => {
                    debug!(error = %e, "invalid menu choice");
                    self.renderer.error("Invalid choice. Please try again.")?;
                    Flow::Continue
                }
                Err(e) => return Err(e.into()),
            };

            if flow == Flow::Quit {
                return self.farewell();
            }
        }
    }

    fn start_game(&mut self) -> anyhow::Result<Flow> {
        self.renderer.prompt("Enter your name: ")?;
        let Some(name) = self.input.next_token()? else {
            return Ok(Flow::Quit);
        };

        info!(%name, "new game");
        self.player = Some(Hero::new(name));
        self.renderer.line("Starting new game...")?;
        self.play()
    }

    fn load_game(&mut self) -> anyhow::Result<Flow> {
        match self.save_system.load_game() {
            Ok(hero) => {
                self.player = Some(hero);
                self.renderer.line("Game state loaded successfully.")?;
                self.play()
            }
            Err(e) => {
                self.renderer
                    .error(&format!("Error loading game: {}", handle_error(&e)))?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Run a bout with the current player, then release it whatever happened
    fn play(&mut self) -> anyhow::Result<Flow> {
        let Some(player) = self.player.as_mut() else {
            warn!("play requested without a player");
            return Ok(Flow::Continue);
        };

        let result =
            GameLoop::new(&mut self.input, &mut self.renderer, &self.save_system).run(player);
        self.player = None;

        match result {
            Ok(state) => {
                self.last_outcome = Some(state);
                Ok(Flow::Continue)
            }
            Err(e) if matches!(e.downcast_ref::<GameError>(), Some(GameError::InputClosed)) => {
                info!("input closed mid-bout");
                Ok(Flow::Quit)
            }
            Err(e) => Err(e),
        }
    }

    fn farewell(&mut self) -> anyhow::Result<()> {
        self.renderer.line("Thank you for playing Mystic Quest!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ConsoleInput;
    use crate::renderer::ConsoleRenderer;
    use tempfile::tempdir;

    type TestSession<'a> = Session<ConsoleInput<&'a [u8]>, ConsoleRenderer<Vec<u8>, Vec<u8>>>;

    fn session<'a>(script: &'a str, saves: SaveSystem) -> TestSession<'a> {
        Session::new(
            ConsoleInput::new(script.as_bytes()),
            ConsoleRenderer::new(Vec::new(), Vec::new()),
            saves,
        )
    }

    fn output(session: TestSession<'_>) -> (String, String) {
        let (_, renderer) = session.into_parts();
        (
            String::from_utf8(renderer.out).unwrap(),
            String::from_utf8(renderer.err).unwrap(),
        )
    }

    #[test]
    fn menu_selectors() {
        assert_eq!(MenuChoice::from_selector("1"), Some(MenuChoice::StartGame));
        assert_eq!(MenuChoice::from_selector("2"), Some(MenuChoice::LoadGame));
        assert_eq!(MenuChoice::from_selector("3"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_selector("4"), None);
        assert_eq!(MenuChoice::from_selector("x"), None);
    }

    #[test]
    fn exit_prints_farewell() {
        let dir = tempdir().unwrap();
        let mut session = session("3", SaveSystem::new(dir.path().join("s.txt")));
        session.run().unwrap();

        let (out, err) = output(session);
        assert!(out.starts_with("1. Start Game\n2. Load Game\n3. Exit\nChoose an option: "));
        assert!(out.ends_with("Thank you for playing Mystic Quest!\n"));
        assert!(err.is_empty());
    }

    #[test]
    fn invalid_menu_choice_reprompts() {
        let dir = tempdir().unwrap();
        let mut session = session("7 nope 3", SaveSystem::new(dir.path().join("s.txt")));
        session.run().unwrap();

        let (out, err) = output(session);
        assert_eq!(err.matches("Invalid choice. Please try again.").count(), 2);
        assert_eq!(out.matches("Choose an option: ").count(), 3);
    }

    #[test]
    fn failed_load_stays_in_menu_without_player() {
        let dir = tempdir().unwrap();
        let mut session = session("2 3", SaveSystem::new(dir.path().join("absent.txt")));
        session.run().unwrap();

        assert!(!session.has_player());
        assert_eq!(session.last_outcome(), None);
        let (out, err) = output(session);
        assert!(err.starts_with("Error loading game: Failed to open file for loading"));
        assert!(!out.contains("Player:"));
        assert!(!out.contains("loaded successfully"));
    }

    #[test]
    fn player_is_released_after_victory() {
        let dir = tempdir().unwrap();
        let mut session = session("1 Hero 1 1 1 3", SaveSystem::new(dir.path().join("s.txt")));
        session.run().unwrap();

        assert!(!session.has_player());
        assert_eq!(session.last_outcome(), Some(BoutState::PlayerVictory));
        let (out, _) = output(session);
        assert!(out.contains("Enter your name: Starting new game..."));
        assert!(out.contains("You defeated the enemy! Victory!"));
    }

    #[test]
    fn end_of_input_mid_bout_quits_cleanly() {
        let dir = tempdir().unwrap();
        let mut session = session("1 Hero 2", SaveSystem::new(dir.path().join("s.txt")));
        session.run().unwrap();

        assert!(!session.has_player());
        let (out, _) = output(session);
        assert!(out.ends_with("Thank you for playing Mystic Quest!\n"));
    }

    #[test]
    fn opening_screen() {
        let dir = tempdir().unwrap();
        let mut session = session("", SaveSystem::new(dir.path().join("s.txt")));
        session.show_opening_screen().unwrap();

        let (out, _) = output(session);
        assert!(out.contains("  Welcome to Mystic Quest!\n"));
        assert!(out.contains("3. Escape the forest to win.\n"));
    }
}
