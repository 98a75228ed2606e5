//! CLI module for GridCommit

pub mod app;
pub mod commands;

pub use app::GridCommitApp;
pub use commands::{Cli, Commands, TermsArgs};
