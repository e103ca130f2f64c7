pub mod api;
pub mod commands;
pub mod report;
pub mod roster;

pub mod cmd {
    pub use super::commands::Cli;
}
