//! Command-line interface.
//!
//! `serve` runs the web application; the other commands inspect or set up
//! the local installation.

pub mod init;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod serve;
pub mod stats;
pub mod tasks;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Run the web server")]
    Serve(serve::ServeArgs),
    #[command(about = "Show total tasks and comments")]
    Stats,
    #[command(about = "List stored tasks")]
    Tasks(tasks::TasksArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::Stats => stats::cmd(),
            Commands::Tasks(args) => tasks::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
