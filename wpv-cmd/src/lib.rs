//! Command implementations for the article form CLI.
//!
//! Runs the form's headless pieces outside the browser: the week-start
//! default, validation and payload building, and the location resolver.

use clap::Subcommand;

pub mod locate;
pub mod submit;

#[derive(Subcommand)]
pub enum Command {
    /// Print the Monday of the week containing a date (today by default)
    WeekStart {
        /// Date in YYYY-MM-DD format
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Validate form values and print the payload and top-articles URL
    Submit {
        /// ISO 3166-1 alpha-2 country code
        #[arg(short, long, default_value = "")]
        country: String,

        /// Date in YYYY-MM-DD format (defaults to this week's Monday)
        #[arg(short, long)]
        date: Option<String>,

        /// all-access, desktop, mobile-app or mobile-web
        #[arg(short, long, default_value = "all-access")]
        access: String,
    },

    /// Resolve the country of a position through the reverse geocoding service
    Locate {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Override the reverse geocoding endpoint
        #[arg(long)]
        endpoint: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::WeekStart { date } => {
            println!("{}", submit::week_start(date.as_deref())?);
            Ok(())
        }
        Command::Submit {
            country,
            date,
            access,
        } => submit::run_submit(&country, date.as_deref(), &access),
        Command::Locate { lat, lon, endpoint } => {
            locate::run_locate(lat, lon, endpoint.as_deref()).await
        }
    }
}
