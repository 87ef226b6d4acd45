use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "breathe")]
#[command(about = "A breath-training stopwatch that tracks inhale, hold, and exhale timings")]
#[command(long_about = "breathe - breath timing stopwatch

Measure inhalation, breath-hold, and exhalation with a stopwatch, save the
timings to your breath-data server, and see how close your sessions come to
the ideal 1:4:2 breathing ratio.

QUICK START:
  breathe                       Open the interactive stopwatch
  breathe timings list          Show saved timings
  breathe session save          Merge the latest inhale/hold/exhale into a session
  breathe session list          Show sessions with their health category
  breathe stats                 Average durations per phase

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  breathe <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    /// Falls back to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Server root URL (overrides `server.base_url` from the config file)
    #[arg(short, long, env = "BREATHE_SERVER", global = true)]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive stopwatch
    ///
    /// Select a phase with 1/2/3, start and pause with space, reset with r,
    /// and save the measured time with s. Press b to merge the latest
    /// timings into a breath session and ? for all keys.
    ///
    /// This is the default when no command is given.
    #[command(alias = "t")]
    Timer,

    /// Manage saved timings
    Timings(TimingsArgs),

    /// Save and review breath sessions
    ///
    /// A session combines the latest Inhalation, Breath-Hold, and
    /// Exhalation timings. Sessions are scored against the ideal 1:4:2
    /// ratio: within distance 1 is Healthy, within 2 Borderline, anything
    /// further Needs Attention.
    Session(SessionArgs),

    /// Show average durations per phase
    Stats,

    /// Show or update your profile
    Profile(ProfileArgs),

    /// Delete all timings, sessions, and the profile
    ///
    /// This cannot be undone. Requires --force.
    Clear {
        /// Confirm deletion
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Check that the breath-data server is reachable
    Health,

    /// Generate a shell completion script
    ///
    /// Examples:
    ///   breathe completions bash > ~/.local/share/bash-completion/completions/breathe
    ///   breathe completions zsh > ~/.zfunc/_breathe
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for timings.
#[derive(Args)]
pub struct TimingsArgs {
    #[command(subcommand)]
    pub command: TimingsCommands,
}

/// Timing subcommands.
#[derive(Subcommand)]
pub enum TimingsCommands {
    /// List saved timings (newest first as sent by the server)
    #[command(alias = "ls")]
    List,

    /// Save a timing measured elsewhere
    ///
    /// Examples:
    ///   breathe timings add inhale 4.2
    ///   breathe timings add hold 16
    Add {
        /// Phase (inhale, hold, exhale)
        phase: String,

        /// Duration in seconds
        seconds: f64,
    },

    /// Delete a timing by ID
    #[command(alias = "rm")]
    Delete {
        /// Timing ID (see 'breathe timings list')
        id: String,
    },
}

/// Arguments for sessions.
#[derive(Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommands,
}

/// Session subcommands.
#[derive(Subcommand)]
pub enum SessionCommands {
    /// Save a session from the latest timing of each phase
    Save,

    /// List sessions with ratio, distance, and health category
    #[command(alias = "ls")]
    List,
}

/// Arguments for the profile.
#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommands,
}

/// Profile subcommands.
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the saved profile
    Show,

    /// Replace the profile
    ///
    /// The whole profile is overwritten: any field not given is cleared.
    Set(ProfileFields),
}

/// Profile fields. Omitted fields are saved as empty.
#[derive(Args, Debug, Default, Clone)]
pub struct ProfileFields {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Age
    #[arg(long)]
    pub age: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Height
    #[arg(long)]
    pub height: Option<String>,

    /// Weight
    #[arg(long)]
    pub weight: Option<String>,

    /// Medical notes
    #[arg(long)]
    pub medical: Option<String>,

    /// Free-text notes
    #[arg(long)]
    pub notes: Option<String>,
}
