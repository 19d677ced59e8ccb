//! Basic usage of the city store against a running backend.
//!
//! Start any JSON REST server exposing `/cities` on `http://localhost:8000`
//! (or set `TRAVELOG_API_URL`), then run:
//!
//! ```text
//! cargo run --example basic_usage
//! ```

use travelog::prelude::*;

fn main() -> Result<()> {
    println!("=== travelog basic usage ===\n");

    let config = ApiConfig::from_env()?;
    println!("Backend: {}", config.base_url());

    let mut provider = CitiesProvider::mount(HttpCityApi::new(&config)?);
    if let Some(error) = &provider.state().error {
        eprintln!("✗ {error}");
        return Ok(());
    }
    println!("✓ Loaded {} cities", provider.state().cities.len());

    // Pick the first city twice; the second selection is served from the store.
    if let Some(id) = provider.state().cities.first().map(|c| c.id.clone()) {
        provider.fetch_current_city(&id)?;
        provider.fetch_current_city(&id)?;
        if let Some(city) = &provider.state().current_city {
            println!("Current city: {} {}", city.emoji, city.city_name);
        }
    }

    let mut auth = AuthProvider::new();
    auth.login("jack@example.com", "qwerty");
    println!("Authenticated: {}", auth.state().is_authenticated());

    Ok(())
}
