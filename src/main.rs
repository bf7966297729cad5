use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use countries::KeyKind;
use countries::core::config::ProviderMode;
use countries::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Lookup mode, overrides the configuration file
    #[arg(short, long, global = true, value_enum)]
    mode: Option<ProviderMode>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for countries::AppCommand {
    fn from(cmd: Commands) -> countries::AppCommand {
        let lookup = |key, value| countries::AppCommand::Lookup { key, value };
        match cmd {
            Commands::Name { name } => lookup(KeyKind::Name, name),
            Commands::Alpha2 { code } => lookup(KeyKind::Alpha2, code),
            Commands::Alpha3 { code } => lookup(KeyKind::Alpha3, code),
            Commands::Numeric { code } => lookup(KeyKind::Numeric, code),
            Commands::List => countries::AppCommand::List,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Look a country up by its official name
    Name { name: String },
    /// Look a country up by its alpha-2 code (SK)
    Alpha2 { code: String },
    /// Look a country up by its alpha-3 code (SVK)
    Alpha3 { code: String },
    /// Look a country up by its numeric code (703)
    Numeric { code: String },
    /// List every country in the dataset
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => countries::cli::setup::setup(),
        Some(cmd) => countries::run_command(cmd.into(), cli.config_path.as_deref(), cli.mode),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
