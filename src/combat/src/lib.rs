// src/combat/src/lib.rs

pub mod combatant;
pub mod enemy;


pub use crate::combatant::{Combatant, Vitals};
pub use crate::enemy::Enemy;

use strum::{Display, EnumIter, FromRepr};
use tracing::debug;

/// Resolves attacks between combatants
pub struct Combat;

impl Combat {
    /// A single attack, no counterattack
    pub fn strike(attacker: &dyn Combatant, defender: &mut dyn Combatant) -> CombatResult {
        let mut result = CombatResult::new();
        let before = defender.hp();

        result.log(attacker.attack(defender));
        debug!(
            attacker = attacker.name(),
            defender = defender.name(),
            before,
            after = defender.hp(),
            "strike resolved"
        );
        result
    }

    /// Player attacks; the enemy retaliates once if it survived the hit
    pub fn engage(player: &mut dyn Combatant, enemy: &mut dyn Combatant) -> CombatResult {
        let mut result = Self::strike(&*player, enemy);

        if enemy.is_alive() {
            let counter = Self::strike(&*enemy, player);
            result.combine(counter);
        }

        result
    }

    /// Terminal check after an exchange. Defeat wins a tie.
    pub fn assess(player: &dyn Combatant, enemy: &dyn Combatant) -> BoutState {
        if !player.is_alive() {
            BoutState::PlayerDefeated
        } else if !enemy.is_alive() {
            BoutState::PlayerVictory
        } else {
            BoutState::Ongoing
        }
    }
}

/// Combat result with detailed logs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombatResult {
    pub logs: Vec<String>, // Combat messages for UI
}

impl CombatResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, message: String) {
        self.logs.push(message);
    }

    pub fn combine(&mut self, other: CombatResult) {
        self.logs.extend(other.logs);
    }
}

/// State of one bout between the player and an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoutState {
    Ongoing,
    PlayerVictory,
    PlayerDefeated,
    SavedExit,
}

impl BoutState {
    pub fn is_terminal(self) -> bool {
        self != BoutState::Ongoing
    }

    /// Line printed when the bout ends. Saving out of a bout prints none.
    pub fn outcome_message(self) -> Option<&'static str> {
        match self {
            BoutState::PlayerDefeated => Some("You have been defeated. Game over."),
            BoutState::PlayerVictory => Some("You defeated the enemy! Victory!"),
            BoutState::Ongoing | BoutState::SavedExit => None,
        }
    }
}

/// In-combat actions, numbered the way they are listed to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, FromRepr)]
#[repr(u8)]
pub enum Action {
    #[strum(to_string = "Attack")]
    Attack = 1,
    #[strum(to_string = "Collect Treasure")]
    CollectTreasure = 2,
    #[strum(to_string = "Save and Exit")]
    SaveAndExit = 3,
}

impl Action {
    /// Parse a numeric selector such as `"2"`
    pub fn from_selector(token: &str) -> Option<Self> {
        token.trim().parse::<u8>().ok().and_then(Self::from_repr)
    }
}
