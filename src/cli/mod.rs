pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "usersctl")]
#[command(about = "Maintenance commands for the users API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Mint a bearer token signed with JWT_SECRET")]
    Token {
        #[arg(long, help = "Subject (user name or id) to put in the token")]
        subject: String,
        #[arg(long, help = "Role claim, e.g. ADMIN or USER")]
        role: Option<String>,
        #[arg(long, help = "Lifetime in hours (defaults to JWT_EXPIRY_HOURS)")]
        hours: Option<u64>,
    },

    #[command(about = "Create the users file as an empty collection")]
    Init {
        #[arg(long, help = "Users file (defaults to USERS_FILE)")]
        file: Option<PathBuf>,
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },

    #[command(about = "Validate every record in the users file")]
    Check {
        #[arg(long, help = "Users file (defaults to USERS_FILE)")]
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let config = AppConfig::from_env();

    match cli.command {
        Commands::Token { subject, role, hours } => {
            commands::token::handle(&config, subject, role, hours, output_format)
        }
        Commands::Init { file, force } => {
            let path = file.unwrap_or_else(|| config.server.users_file.clone());
            commands::init::handle(&path, force, output_format).await
        }
        Commands::Check { file } => {
            let path = file.unwrap_or_else(|| config.server.users_file.clone());
            commands::check::handle(&path, output_format).await
        }
    }
}
