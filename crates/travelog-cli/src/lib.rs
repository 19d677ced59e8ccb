//! travelog-cli
//! ============
//!
//! Command-line front end for `travelog-core`.
//!
//! The binary (`travelog`) mounts a [`CitiesProvider`] against the configured
//! backend and runs one operation per invocation. This library target holds
//! the text rendering so it can be tested without a backend.
//!
//! ```text
//! travelog cities
//! travelog countries
//! travelog city 73930385
//! travelog add --name Lisbon --country Portugal --country-code PT --lat 38.72 --lng -9.14
//! travelog delete 73930385
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::fmt::Write;
use travelog_core::auth::{AuthProvider, AuthState};
use travelog_core::model::{flag_emoji, now_timestamp, City, NewCity, Position};
use travelog_core::views::{format_date_long, CityItem, CountryItem, ListView};

pub use travelog_core::store::CitiesProvider;

/// Render a list view: a spinner line, the empty message, or one line per item.
pub fn render_list<T>(view: &ListView<T>, line: impl Fn(&T) -> String) -> String {
    match view {
        ListView::Loading => "Loading...\n".to_owned(),
        ListView::Empty(message) => format!("{message}\n"),
        ListView::Items(items) => items.iter().fold(String::new(), |mut out, item| {
            let _ = writeln!(out, "{}", line(item));
            out
        }),
    }
}

pub fn country_line(item: &CountryItem) -> String {
    format!("{} {}", item.emoji, item.country)
}

pub fn city_line(item: &CityItem) -> String {
    let marker = if item.is_active { '*' } else { ' ' };
    format!(
        "{marker} {:>10}  {} {} ({})",
        item.id, item.emoji, item.city_name, item.date_label
    )
}

/// Multi-line detail block for one city.
pub fn city_detail(city: &City) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "City name: {} {}", city.emoji, city.city_name);
    let _ = writeln!(out, "Country: {}", city.country);
    let _ = writeln!(
        out,
        "You went to {} on {}",
        city.city_name,
        format_date_long(&city.date)
    );
    if !city.notes.is_empty() {
        let _ = writeln!(out, "Your notes: {}", city.notes);
    }
    let _ = writeln!(
        out,
        "Position: {:.4}, {:.4}",
        city.position.lat, city.position.lng
    );
    out
}

pub fn auth_summary(state: &AuthState) -> String {
    match state.user() {
        Some(user) => format!("Welcome, {} <{}>", user.name, user.email),
        None => "Not signed in".to_owned(),
    }
}

/// Run the fake login and describe the resulting session. No backend involved.
pub fn sign_in(email: &str, password: &str) -> String {
    let mut auth = AuthProvider::new();
    auth.login(email, password);
    auth_summary(auth.state())
}

/// Arguments of the `add` command, before the emoji and date are resolved.
#[derive(Debug, Clone)]
pub struct AddCity {
    pub name: String,
    pub country: String,
    pub country_code: Option<String>,
    pub emoji: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub date: Option<String>,
    pub notes: String,
}

impl AddCity {
    /// Resolve the flag (explicit emoji wins over the country code) and the
    /// visit date (defaults to now).
    pub fn into_new_city(self) -> anyhow::Result<NewCity> {
        let emoji = match (self.emoji, self.country_code.as_deref()) {
            (Some(emoji), _) => emoji,
            (None, Some(code)) => flag_emoji(code)
                .ok_or_else(|| anyhow::anyhow!("'{code}' is not a two-letter country code"))?,
            (None, None) => anyhow::bail!("either --emoji or --country-code is required"),
        };
        Ok(NewCity {
            city_name: self.name,
            country: self.country,
            emoji,
            date: self.date.unwrap_or_else(now_timestamp),
            notes: self.notes,
            position: Position {
                lat: self.lat,
                lng: self.lng,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use travelog_core::views::EMPTY_LIST_MESSAGE;
    use travelog_core::CityId;

    fn add(code: Option<&str>, emoji: Option<&str>) -> AddCity {
        AddCity {
            name: "Lisbon".into(),
            country: "Portugal".into(),
            country_code: code.map(Into::into),
            emoji: emoji.map(Into::into),
            lat: 38.72,
            lng: -9.14,
            date: Some("2027-10-31T15:59:59.138Z".into()),
            notes: String::new(),
        }
    }

    #[test]
    fn render_list_states() {
        let loading: ListView<CountryItem> = ListView::Loading;
        assert_eq!(render_list(&loading, country_line), "Loading...\n");

        let empty: ListView<CountryItem> = ListView::Empty(EMPTY_LIST_MESSAGE);
        assert!(render_list(&empty, country_line).starts_with("Add your first city"));

        let items = ListView::Items(vec![
            CountryItem {
                country: "Portugal".into(),
                emoji: "🇵🇹".into(),
            },
            CountryItem {
                country: "Spain".into(),
                emoji: "🇪🇸".into(),
            },
        ]);
        assert_eq!(render_list(&items, country_line), "🇵🇹 Portugal\n🇪🇸 Spain\n");
    }

    #[test]
    fn active_city_is_starred() {
        let item = CityItem {
            id: CityId::new("7"),
            city_name: "Lisbon".into(),
            emoji: "🇵🇹".into(),
            date_label: "October 31, 2027".into(),
            is_active: true,
        };
        assert!(city_line(&item).starts_with('*'));
    }

    #[test]
    fn detail_mentions_long_date_and_skips_empty_notes() {
        let city = add(Some("PT"), None).into_new_city().unwrap().with_id("1");
        let detail = city_detail(&city);
        assert!(detail.contains("Sunday, October 31, 2027"));
        assert!(!detail.contains("Your notes"));
    }

    #[test]
    fn add_resolves_emoji() {
        assert_eq!(add(Some("pt"), None).into_new_city().unwrap().emoji, "🇵🇹");
        assert_eq!(add(Some("PT"), Some("🏳")).into_new_city().unwrap().emoji, "🏳");
        assert!(add(Some("PRT"), None).into_new_city().is_err());
        assert!(add(None, None).into_new_city().is_err());
    }

    #[test]
    fn add_defaults_date_to_now() {
        let mut args = add(Some("PT"), None);
        args.date = None;
        let city = args.into_new_city().unwrap();
        assert!(city.date.ends_with('Z'));
    }

    #[test]
    fn auth_summary_reflects_session() {
        let mut auth = AuthProvider::new();
        assert_eq!(auth_summary(auth.state()), "Not signed in");
        auth.login("jack@example.com", "qwerty");
        assert_eq!(auth_summary(auth.state()), "Welcome, Jack <jack@example.com>");
    }

    #[test]
    fn sign_in_needs_the_fake_credentials() {
        assert_eq!(
            sign_in("jack@example.com", "qwerty"),
            "Welcome, Jack <jack@example.com>"
        );
        assert_eq!(sign_in("jack@example.com", "hunter2"), "Not signed in");
    }
}
