//! Shared pieces of the `pm2-list` and `pm2-stop-here` binaries

pub mod cli;
pub mod commands;
pub mod logging;
