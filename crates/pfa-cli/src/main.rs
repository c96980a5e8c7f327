//! pfa-screen: score a screening instrument from the command line.
//!
//! Usage:
//!   pfa-screen score [--input <file>] [--srq29-trigger <variant>]
//!   pfa-screen instruments
//!   pfa-screen items <instrument_id>
//!   pfa-screen init-config

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use pfa_cli::commands;
use pfa_cli::config::{self, LogFormat};
use pfa_core::models::screening::Srq29Trigger;

#[derive(Parser)]
#[command(name = "pfa-screen")]
#[command(version)]
#[command(about = "Score SRQ-20, SRQ-29 and DASS-42 screenings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to $PFA_CONFIG, then the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON regardless of the configured format
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a request ({"instrument_id": ..., "answers": [...]}) and print the result
    Score {
        /// Request file (stdin if not specified)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Override the configured SRQ-29 referral rule
        #[arg(long)]
        srq29_trigger: Option<TriggerArg>,
    },

    /// List supported instruments
    Instruments,

    /// Print an instrument's item bank
    Items {
        /// Instrument id, e.g. SRQ-20
        instrument_id: String,
    },

    /// Write a default config file
    InitConfig,
}

impl Commands {
    /// Listing commands work without a readable config file.
    fn reads_config(&self) -> bool {
        matches!(self, Self::Score { .. } | Self::InitConfig)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TriggerArg {
    CombinedTotal,
    AnxietyDepression,
}

impl From<TriggerArg> for Srq29Trigger {
    fn from(arg: TriggerArg) -> Self {
        match arg {
            TriggerArg::CombinedTotal => Srq29Trigger::CombinedTotal,
            TriggerArg::AnxietyDepression => Srq29Trigger::AnxietyDepression,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let loaded = if cli.command.reads_config() {
        let path = config::config_path(cli.config.as_deref())?;
        let loaded = config::load_config(&path)?;
        Some((path, loaded))
    } else {
        None
    };

    let log_format = match &loaded {
        _ if cli.json_logs => LogFormat::Json,
        Some((_, loaded)) => loaded.config.log_format,
        None => LogFormat::default(),
    };
    init_logging(log_format);
    if let Some((path, loaded)) = &loaded {
        loaded.log(path);
    }

    let mut settings = loaded
        .map(|(_, loaded)| loaded.config)
        .unwrap_or_default();

    match cli.command {
        Commands::Score {
            input,
            srq29_trigger,
        } => {
            if let Some(trigger) = srq29_trigger {
                settings.srq29_trigger = trigger.into();
            }
            let request = commands::read_request(input.as_deref())?;
            let result = commands::score(&request, &settings.referral_policy())?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Instruments => {
            println!(
                "{}",
                serde_json::to_string_pretty(&commands::list_instruments())?
            );
        }
        Commands::Items { instrument_id } => {
            let detail = commands::instrument_detail(&instrument_id)?;
            println!("{}", serde_json::to_string_pretty(&detail)?);
        }
        Commands::InitConfig => {
            let path = config::config_path(cli.config.as_deref())?;
            config::save_config(&path, &settings)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_logging(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
