pub mod config;
pub mod game_loop;
pub mod input;
pub mod music;
pub mod renderer;
pub mod session;
