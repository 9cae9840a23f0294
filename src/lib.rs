//! Terminal dashboard and command-line client for the projects of a GNS3 server.

pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod output;
pub mod tui;
pub mod types;
