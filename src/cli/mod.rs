//! CLI module for the Notes API
//!
//! Provides subcommands:
//! - `serve`: run the HTTP server
//! - `check-user`: validate a user profile from the command line

pub mod check_user;
pub mod serve;

use clap::{Parser, Subcommand};

/// Notes API - Minimal CRUD service for notes
#[derive(Parser)]
#[command(name = "notes-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Validate a user profile and print the result
    CheckUser(check_user::CheckUserArgs),
}
