// src/hero/src/core.rs
use combat::{Combatant, Vitals};
use tracing::debug;

pub const HERO_BASE_HP: u32 = 100;
pub const HERO_ATTACK_DAMAGE: u32 = 20;

/// 英雄核心数据结构
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    vitals: Vitals,
    treasures: u32,
}

impl Hero {
    /// New hero at full health with no treasure
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            vitals: Vitals::new(name, HERO_BASE_HP),
            treasures: 0,
        }
    }

    /// Rebuild a hero from a saved health value.
    ///
    /// The hero starts at full health and takes `HERO_BASE_HP - saved_hp`
    /// damage, so the usual clamping applies: anything at or below zero comes
    /// back as 0 and anything above the base comes back as the base.
    pub fn restore(name: impl Into<String>, saved_hp: i64) -> Self {
        let mut hero = Self::new(name);
        let damage = i64::from(HERO_BASE_HP)
            .saturating_sub(saved_hp)
            .clamp(0, i64::from(u32::MAX)) as u32;
        hero.take_damage(damage);
        debug!(name = hero.name(), saved_hp, hp = hero.hp(), "hero restored");
        hero
    }

    pub fn treasures(&self) -> u32 {
        self.treasures
    }

    /// Pick up one treasure, returns the message shown to the player
    pub fn collect_treasure(&mut self) -> String {
        self.treasures += 1;
        format!("Collected a treasure! Total: {}", self.treasures)
    }
}

impl Combatant for Hero {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    fn attack_power(&self) -> u32 {
        HERO_ATTACK_DAMAGE
    }

    fn attack_message(&self) -> String {
        format!("{} attacks the enemy!", self.name())
    }

    fn display_stats(&self) -> String {
        format!(
            "Player: {}, Health: {}, Treasures: {}",
            self.name(),
            self.hp(),
            self.treasures
        )
    }
}
