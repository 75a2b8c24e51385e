use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::digits::DEFAULT_SEED;
use crate::sequences::{DEFAULT_DIFFERENCE_INPUT, DEFAULT_PROGRESSION_INPUT};

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Small data and number puzzles
#[derive(Parser, Debug, Clone)]
#[command(name = "drill", about = "Small data and number puzzles", version)]
pub struct Settings {
    /// Logging level
    #[arg(long, global = true, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Puzzle to run (all of them when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One puzzle invocation.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Average process duration per machine
    AverageTime {
        /// JSONL file of activity records (built-in sample when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// First value above the seed sharing no digit with it
    DigitSearch {
        /// Starting value
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },

    /// Classify a sequence as arithmetic, geometric or random
    Progression {
        /// Whitespace-separated integers
        #[arg(default_value = DEFAULT_PROGRESSION_INPUT, allow_hyphen_values = true)]
        numbers: String,
    },

    /// Largest absolute difference between neighbours
    MaxDiff {
        /// Whitespace-separated integers
        #[arg(default_value = DEFAULT_DIFFERENCE_INPUT, allow_hyphen_values = true)]
        numbers: String,
    },
}

impl Command {
    /// Every puzzle with its built-in input, in a fixed order.
    pub fn defaults() -> Vec<Command> {
        vec![
            Command::AverageTime { input: None },
            Command::DigitSearch { seed: DEFAULT_SEED },
            Command::Progression {
                numbers: DEFAULT_PROGRESSION_INPUT.to_string(),
            },
            Command::MaxDiff {
                numbers: DEFAULT_DIFFERENCE_INPUT.to_string(),
            },
        ]
    }

    /// Short name used in log lines and JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AverageTime { .. } => "average-time",
            Command::DigitSearch { .. } => "digit-search",
            Command::Progression { .. } => "progression",
            Command::MaxDiff { .. } => "max-diff",
        }
    }
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments. Exits with usage on error.
    pub fn load() -> Self {
        Self::resolve(Settings::parse())
    }

    /// Parse an explicit argument list, enabling unit-testing without
    /// spawning subprocesses.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Settings::try_parse_from(args).map(Self::resolve)
    }

    /// Commands to run: the chosen one, or every puzzle with defaults.
    pub fn commands(&self) -> Vec<Command> {
        match &self.command {
            Some(command) => vec![command.clone()],
            None => Command::defaults(),
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }

    /// Apply the `--debug` flag.
    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
