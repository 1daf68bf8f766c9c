//! Folio CLI entry point.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Folio.
#[derive(Parser)]
#[command(name = "folio", version, about = "Serve and check the Folio portfolio site")]
struct Cli {
    /// Path to the site configuration
    #[arg(short, long, default_value = "app/site.toml")]
    config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Serve the built frontend bundle
    Serve {
        /// Directory produced by `trunk build`
        #[arg(short, long, default_value = "frontend/dist")]
        dist: PathBuf,
        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Validate configuration and content
    Check {
        /// Content root holding `work/` and `notes/`
        #[arg(long, default_value = "app/content")]
        content: PathBuf,
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    folio::init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { dist, port } => {
            folio::cmd::serve::run(&dist, port).await?;
        }
        Commands::Check { content, strict } => {
            folio::cmd::check::run(&cli.config, &content, strict)?;
        }
    }

    Ok(())
}
