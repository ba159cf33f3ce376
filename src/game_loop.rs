//! Game loop: one bout between the player and a freshly spawned enemy.
//!
//! Every iteration shows both stat lines, reads one action and resolves it:
//! - Attack: the player strikes, the enemy hits back if it survived
//! - Collect Treasure: no combat, the enemy does not get a turn
//! - Save and Exit: writes the save file and leaves the bout
//!
//! Invalid selections are reported and do not use up a turn.

use crate::input::{InputSource, parse_selector};
use crate::renderer::Renderer;
use combat::{Action, BoutState, Combat, Combatant, Enemy};
use error::{GameError, handle_error};
use hero::Hero;
use save::SaveSystem;
use strum::IntoEnumIterator;
use tracing::{debug, info};

/// Runs a single bout against one enemy
pub struct GameLoop<'a, I, R> {
    input: &'a mut I,
    renderer: &'a mut R,
    save_system: &'a SaveSystem,
}

impl<'a, I: InputSource, R: Renderer> GameLoop<'a, I, R> {
    pub fn new(input: &'a mut I, renderer: &'a mut R, save_system: &'a SaveSystem) -> Self {
        Self {
            input,
            renderer,
            save_system,
        }
    }

    /// Play until victory, defeat or save-and-exit.
    ///
    /// Returns `GameError::InputClosed` if the console runs dry mid-bout.
    pub fn run(&mut self, player: &mut Hero) -> anyhow::Result<BoutState> {
        let mut enemy = Enemy::goblin();
        info!(player = player.name(), hp = player.hp(), enemy = enemy.name(), "bout started");

        loop {
            let state = Combat::assess(&*player, &enemy);
            if state.is_terminal() {
                return self.finish(state);
            }

            self.show_turn(player, &enemy)?;

            let token = self.input.next_token()?.ok_or(GameError::InputClosed)?;
            let action = match parse_selector(&token, Action::from_selector) {
                Ok(action) => action,
                Err(e) if e.is_input_error() => {
                    debug!(error = %e, "invalid action");
                    self.renderer.error("Invalid action. Try again.")?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            match action {
                Action::Attack => {
                    let result = Combat::engage(player, &mut enemy);
                    for log in &result.logs {
                        self.renderer.line(log)?;
                    }
                    debug!(player_hp = player.hp(), enemy_hp = enemy.hp(), "exchange resolved");
                }
                Action::CollectTreasure => {
                    let message = player.collect_treasure();
                    self.renderer.line(&message)?;
                }
                Action::SaveAndExit => {
                    self.save(player)?;
                    return self.finish(BoutState::SavedExit);
                }
            }
        }
    }

    fn show_turn(&mut self, player: &Hero, enemy: &Enemy) -> anyhow::Result<()> {
        self.renderer.line(&player.display_stats())?;
        self.renderer.line(&enemy.display_stats())?;
        self.renderer.line("")?;
        self.renderer.line("Choose an action:")?;
        for action in Action::iter() {
            self.renderer.line(&format!("{}. {}", action as u8, action))?;
        }
        Ok(())
    }

    /// A failed save is reported and the bout still ends
    fn save(&mut self, player: &Hero) -> anyhow::Result<()> {
        match self.save_system.save_game(player) {
            Ok(()) => self.renderer.line("Game state saved successfully."),
            Err(e) => self
                .renderer
                .error(&format!("Error saving game: {}", handle_error(&e))),
        }
    }

    fn finish(&mut self, state: BoutState) -> anyhow::Result<BoutState> {
        if let Some(message) = state.outcome_message() {
            self.renderer.line(message)?;
        }
        info!(?state, "bout finished");
        Ok(state)
    }
}
