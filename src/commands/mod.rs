//! CLI commands for pathfinder

pub mod dispatch;
pub mod init;
pub mod path;
pub mod show;
pub mod span;
