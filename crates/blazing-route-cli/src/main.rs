mod commands;
mod scan;
#[cfg(test)]
mod testing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use commands::generate::GenerateArgs;

#[derive(Parser)]
#[command(name = "blazing-route")]
#[command(version, about = "Typed route helpers for Blazor projects", long_about = None)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the routes class for a project
    Generate {
        /// Project directory (containing the .csproj)
        #[arg(short, long, default_value = ".")]
        project: PathBuf,

        /// Options file (default: <project>/route-generation.toml)
        #[arg(long)]
        options: Option<PathBuf>,

        /// Namespace of the generated class, overrides the options file
        #[arg(short, long)]
        namespace: Option<String>,

        /// Output directory (default: the project directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the generated source instead of writing it
        #[arg(long)]
        stdout: bool,
    },

    /// List discovered pages and routes
    List {
        /// Project directory
        #[arg(short, long, default_value = ".")]
        project: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Execute command
    match cli.command {
        Commands::Generate {
            project,
            options,
            namespace,
            output,
            stdout,
        } => {
            commands::generate::execute(GenerateArgs {
                project,
                options,
                namespace,
                output,
                stdout,
            })?;
        }
        Commands::List { project } => {
            commands::list::execute(&project)?;
        }
    }

    Ok(())
}
