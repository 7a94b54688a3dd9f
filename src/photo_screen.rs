pub mod core;
pub mod display_state;
pub mod main;
pub mod render;
pub mod run_effect;
