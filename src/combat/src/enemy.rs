//src/combat/src/enemy.rs

use crate::combatant::{Combatant, Vitals};

pub const ENEMY_BASE_HP: u32 = 50;
pub const ENEMY_ATTACK_DAMAGE: u32 = 15;
pub const DEFAULT_ENEMY_NAME: &str = "Goblin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    vitals: Vitals,
}

impl Enemy {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            vitals: Vitals::new(name, ENEMY_BASE_HP),
        }
    }

    /// The enemy every bout is fought against
    pub fn goblin() -> Self {
        Self::new(DEFAULT_ENEMY_NAME)
    }
}

impl Combatant for Enemy {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    fn attack_power(&self) -> u32 {
        ENEMY_ATTACK_DAMAGE
    }

    fn attack_message(&self) -> String {
        format!("{} attacks the player!", self.name())
    }

    fn display_stats(&self) -> String {
        format!("Enemy: {}, Health: {}", self.name(), self.hp())
    }
}
