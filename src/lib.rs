pub mod cli;
pub mod config;
pub mod logging;
pub mod tui;
pub mod vault;
