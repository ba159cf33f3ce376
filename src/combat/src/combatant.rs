// src/combat/src/combatant.rs

/// Name and health shared by every combatant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vitals {
    pub name: String,
    hp: u32,
}

impl Vitals {
    pub fn new(name: impl Into<String>, hp: u32) -> Self {
        Self {
            name: name.into(),
            hp,
        }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    /// Health never drops below zero and damage never heals.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        self.hp > 0
    }
}

/// 表示可以参加战斗的活体
pub trait Combatant {
    fn vitals(&self) -> &Vitals;

    fn vitals_mut(&mut self) -> &mut Vitals;

    /// Fixed damage dealt by one attack
    fn attack_power(&self) -> u32;

    /// Narrative line printed when this combatant attacks
    fn attack_message(&self) -> String;

    /// One-line stat summary with role label
    fn display_stats(&self) -> String;

    fn name(&self) -> &str {
        &self.vitals().name
    }

    fn hp(&self) -> u32 {
        self.vitals().hp()
    }

    fn is_alive(&self) -> bool {
        self.hp() > 0
    }

    /// Apply damage, returns whether the combatant is still alive
    fn take_damage(&mut self, amount: u32) -> bool {
        self.vitals_mut().take_damage(amount)
    }

    /// Hit `target` for this combatant's attack power
    fn attack(&self, target: &mut dyn Combatant) -> String {
        let message = self.attack_message();
        target.take_damage(self.attack_power());
        message
    }
}
