// src/hero/src/lib.rs

mod core;

pub use self::core::{Hero, HERO_ATTACK_DAMAGE, HERO_BASE_HP};
