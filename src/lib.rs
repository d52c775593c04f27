pub mod config;
pub mod models;
pub mod intake;
pub mod medications;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::intake::{parse_medication_input, IntakeError};

/// Sentences shown by `medtrack demo`.
pub const DEMO_SENTENCES: &[&str] = &[
    "Add aspirin 500mg twice daily",
    "Take vitamin D 1000 IU every morning",
    "Remind me to use my inhaler 2 puffs as needed",
    "Add metformin 850mg three times a day with food",
    "Take blood pressure medication 10mg once daily",
];

#[derive(Debug, Parser)]
#[command(name = "medtrack", version, about = "Turn medication sentences into records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show how a sentence is understood without creating anything
    Parse {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Create a medication record from a sentence
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Parse the built-in sample sentences
    Demo,
}

/// Structured error body printed on rejection.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// Failures surfaced by a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Intake(err) => err.code(),
            CliError::Encode(_) => "ENCODE_FAILED",
        }
    }

    /// HTTP-equivalent status: rejected sentences are 400, encoding faults 500.
    pub fn status_code(&self) -> u16 {
        match self {
            CliError::Intake(err) => err.status_code(),
            CliError::Encode(_) => 500,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Intake(_) => EXIT_REJECTED,
            CliError::Encode(_) => EXIT_INTERNAL,
        }
    }
}

impl From<&CliError> for ErrorBody {
    fn from(err: &CliError) -> Self {
        ErrorBody {
            error: ErrorDetail {
                code: err.code(),
                message: err.to_string(),
            },
        }
    }
}

/// Exit status used when a sentence is rejected.
pub const EXIT_REJECTED: i32 = 2;
/// Exit status used when output could not be produced.
pub const EXIT_INTERNAL: i32 = 1;

/// Run one CLI command, returning the JSON document to print.
pub fn execute(command: &Command) -> Result<serde_json::Value, CliError> {
    let value = match command {
        Command::Parse { text } => serde_json::to_value(medications::preview_medication_text(
            &text.join(" "),
        )?)?,
        Command::Add { text } => serde_json::to_value(
            medications::create_medication_from_text_today(&text.join(" "))?,
        )?,
        Command::Demo => {
            let mut items = Vec::with_capacity(DEMO_SENTENCES.len());
            for sentence in DEMO_SENTENCES {
                items.push(serde_json::json!({
                    "input": sentence,
                    "understood_as": serde_json::to_value(parse_medication_input(sentence))?,
                }));
            }
            serde_json::Value::Array(items)
        }
    };
    Ok(value)
}

/// Execute and render as pretty JSON.
pub fn render(command: &Command) -> Result<String, CliError> {
    let value = execute(command)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

pub fn run() -> i32 {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let cli = Cli::parse();

    match render(&cli.command) {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(err) => {
            tracing::warn!(code = err.code(), status = err.status_code(), "Command failed");
            match serde_json::to_string_pretty(&ErrorBody::from(&err)) {
                Ok(body) => eprintln!("{body}"),
                Err(encode_err) => {
                    tracing::error!(%encode_err, "Failed to encode error body");
                    eprintln!("{err}");
                }
            }
            err.exit_code()
        }
    }
}
