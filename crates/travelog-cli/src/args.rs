use clap::{ArgGroup, Parser, Subcommand};

/// CLI arguments for travelog
#[derive(Debug, Parser)]
#[command(
    name = "travelog",
    version,
    about = "Inspect and edit the cities of a travel log backend"
)]
pub struct CliArgs {
    /// Base URL of the cities REST backend
    #[arg(
        short = 'u',
        long = "base-url",
        env = "TRAVELOG_API_URL",
        default_value = "http://localhost:8000",
        global = true
    )]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(
        long = "timeout-secs",
        env = "TRAVELOG_TIMEOUT_SECS",
        default_value_t = 10,
        global = true
    )]
    pub timeout_secs: u64,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List visited cities
    Cities,

    /// List visited countries (one line per country)
    Countries,

    /// Show one city
    City {
        /// City id as assigned by the backend
        id: String,
    },

    /// Record a new visited city
    #[command(group(ArgGroup::new("flag").required(true).args(["country_code", "emoji"])))]
    Add {
        /// City name
        #[arg(long)]
        name: String,

        /// Country name
        #[arg(long)]
        country: String,

        /// ISO2 country code used to derive the flag emoji (e.g. PT)
        #[arg(long = "country-code")]
        country_code: Option<String>,

        /// Flag emoji, if no country code is given
        #[arg(long)]
        emoji: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lng: f64,

        /// Visit date (RFC 3339); defaults to now
        #[arg(long)]
        date: Option<String>,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Delete a city
    Delete {
        /// City id as assigned by the backend
        id: String,
    },

    /// Try the demo login
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
}
