mod cli;
mod color;
mod commands;
mod config;
mod domain;
mod integrations;
mod service;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::env::CompleteEnv;

use cli::{Cli, Commands};
use commands::init::InitScope;

fn main() -> Result<()> {
    // Handle dynamic completion via COMPLETE environment variable
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();

    // Resolve color mode from CLI flag and environment variables
    let color_mode = color::ColorMode::resolve(cli.color);
    let terraform = cli.terraform.as_deref();

    match cli.command {
        Commands::Validate { dir } => {
            commands::validate::cmd_validate(dir.as_deref(), terraform, color_mode)
        }
        Commands::Run {
            scenarios,
            dir,
            json,
        } => commands::run::cmd_run(&scenarios, dir.as_deref(), terraform, json, color_mode),
        Commands::Ls => commands::list::cmd_list(color_mode),
        Commands::Init {
            global,
            local,
            force,
        } => commands::init::cmd_init(InitScope::from_flags(global, local), force, color_mode),
        Commands::Completion { shell } => commands::completion::cmd_completion(&shell),
    }
}
