pub mod app;
pub mod config;
pub mod game;
pub mod input;
pub mod render;
pub mod settings;
pub mod utils;
