// crates/travelog-core/src/views.rs

//! # Derived Views
//!
//! Presentation data computed from the store on demand. Nothing here is
//! persisted or dispatched; call the functions again after the state changes.

use crate::model::{City, CityId};
use chrono::DateTime;
use serde::Serialize;
use std::collections::HashSet;

/// Shown by both lists when there are no cities yet.
pub const EMPTY_LIST_MESSAGE: &str = "Add your first city by clicking a city on the map";

/// What a list component should render.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum ListView<T> {
    /// A request is in flight; show a spinner.
    Loading,
    /// No cities; show the call-to-action message.
    Empty(&'static str),
    Items(Vec<T>),
}

impl<T> ListView<T> {
    pub fn items(&self) -> &[T] {
        match self {
            ListView::Items(items) => items,
            _ => &[],
        }
    }
}

/// One row of the country list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CountryItem {
    pub country: String,
    pub emoji: String,
}

/// One row of the city list.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityItem {
    pub id: CityId,
    pub city_name: String,
    pub emoji: String,
    pub date_label: String,
    /// This row is the store's current city.
    pub is_active: bool,
}

/// Distinct countries of `cities`, in first-seen order.
///
/// When several cities share a country, the first city's emoji is kept.
pub fn countries_of(cities: &[City]) -> Vec<CountryItem> {
    let mut seen = HashSet::new();
    cities
        .iter()
        .filter(|city| seen.insert(city.country.as_str()))
        .map(|city| CountryItem {
            country: city.country.clone(),
            emoji: city.emoji.clone(),
        })
        .collect()
}

pub fn country_list(cities: &[City], is_loading: bool) -> ListView<CountryItem> {
    list_view(cities, is_loading, countries_of)
}

pub fn city_list(
    cities: &[City],
    is_loading: bool,
    current: Option<&CityId>,
) -> ListView<CityItem> {
    list_view(cities, is_loading, |cities| {
        cities
            .iter()
            .map(|city| CityItem {
                id: city.id.clone(),
                city_name: city.city_name.clone(),
                emoji: city.emoji.clone(),
                date_label: format_date(&city.date),
                is_active: current == Some(&city.id),
            })
            .collect()
    })
}

fn list_view<T>(
    cities: &[City],
    is_loading: bool,
    project: impl FnOnce(&[City]) -> Vec<T>,
) -> ListView<T> {
    if is_loading {
        ListView::Loading
    } else if cities.is_empty() {
        ListView::Empty(EMPTY_LIST_MESSAGE)
    } else {
        ListView::Items(project(cities))
    }
}

/// `"2027-10-31T15:59:59.138Z"` → `"October 31, 2027"`.
///
/// Unparseable dates are returned unchanged.
pub fn format_date(date: &str) -> String {
    DateTime::parse_from_rfc3339(date)
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| date.to_owned())
}

/// Long form used on the city detail page: `"Sunday, October 31, 2027"`.
pub fn format_date_long(date: &str) -> String {
    DateTime::parse_from_rfc3339(date)
        .map(|d| d.format("%A, %B %-d, %Y").to_string())
        .unwrap_or_else(|_| date.to_owned())
}
