//! travelog — command-line front end for the travel log city store
//!
//! Every network command mounts the city store against the backend (which
//! loads the full collection), performs one operation, and prints the
//! resulting derived view. `login` only exercises the auth stub.
//!
//! Usage examples
//! --------------
//!
//! - List visited cities / countries
//!   $ travelog cities
//!   $ travelog countries
//!
//! - Show one city
//!   $ travelog city 73930385
//!
//! - Record a visit (flag derived from the ISO2 code)
//!   $ travelog add --name Lisbon --country Portugal --country-code PT --lat 38.72 --lng -9.14
//!
//! - Delete a visit
//!   $ travelog delete 73930385
//!
//! - Point at another backend
//!   $ travelog --base-url http://localhost:9000 cities
//!   $ TRAVELOG_API_URL=http://localhost:9000 travelog cities
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use travelog_cli::{
    city_detail, city_line, country_line, render_list, sign_in, AddCity, CitiesProvider,
};
use travelog_core::views::{city_list, country_list};
use travelog_core::{api::HttpCityApi, ApiConfig, CityId};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let config = ApiConfig::new(&args.base_url, Duration::from_secs(args.timeout_secs))
        .with_context(|| format!("invalid --base-url {}", args.base_url))?;
    tracing::debug!(base_url = config.base_url(), "using backend");

    match args.command {
        // Login never touches the backend.
        Commands::Login { email, password } => println!("{}", sign_in(&email, &password)),

        Commands::Cities => print_cities(&mount(&config)?),

        Commands::Countries => {
            let provider = mount(&config)?;
            let state = provider.state();
            print!(
                "{}",
                render_list(&country_list(&state.cities, state.is_loading), country_line)
            );
        }

        Commands::City { id } => {
            let mut provider = mount(&config)?;
            let id = CityId::from(id);
            provider
                .fetch_current_city(&id)
                .with_context(|| format!("could not load city {id}"))?;
            if let Some(city) = &provider.state().current_city {
                print!("{}", city_detail(city));
            }
        }

        Commands::Add {
            name,
            country,
            country_code,
            emoji,
            lat,
            lng,
            date,
            notes,
        } => {
            let new_city = AddCity {
                name,
                country,
                country_code,
                emoji,
                lat,
                lng,
                date,
                notes,
            }
            .into_new_city()?;
            let mut provider = mount(&config)?;
            provider
                .create_city(&new_city)
                .context("could not create city")?;
            print_cities(&provider);
        }

        Commands::Delete { id } => {
            let mut provider = mount(&config)?;
            let id = CityId::from(id);
            if provider.state().find(&id).is_none() {
                eprintln!("No city with id {id}");
                return Ok(());
            }
            provider
                .delete_city(&id)
                .with_context(|| format!("could not delete city {id}"))?;
            print_cities(&provider);
        }
    }

    Ok(())
}

/// Mount the city store against the backend; a failed initial load is fatal.
fn mount(config: &ApiConfig) -> anyhow::Result<CitiesProvider<HttpCityApi>> {
    let provider = CitiesProvider::mount(HttpCityApi::new(config)?);
    if let Some(error) = &provider.state().error {
        anyhow::bail!("{error} ({})", config.cities_url());
    }
    Ok(provider)
}

fn print_cities(provider: &CitiesProvider<HttpCityApi>) {
    let state = provider.state();
    let view = city_list(&state.cities, state.is_loading, state.current_id());
    print!("{}", render_list(&view, city_line));
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "travelog_core=debug,travelog=debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
