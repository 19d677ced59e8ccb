// crates/travelog-core/src/store/mod.rs

//! # City Store
//!
//! The state of the city collection and the single function allowed to change
//! it. Everything that happens to the store is an [`Action`]; [`reducer`]
//! turns the current [`CitiesState`] and an action into the next state without
//! side effects. I/O lives in [`CitiesProvider`].
//!
//! ```text
//! CitiesState + Action  →  reducer()  →  CitiesState
//! ```

use crate::error::{Result, TravelogError};
use crate::model::{City, CityId};
use serde::{Deserialize, Serialize};

mod provider;

pub use provider::{CitiesProvider, Listener};

/// Snapshot of the city store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitiesState {
    pub cities: Vec<City>,
    /// True only while a request is in flight.
    pub is_loading: bool,
    /// Most recently loaded or added city; `None` is the empty city.
    pub current_city: Option<City>,
    /// Message of the last rejected operation.
    pub error: Option<String>,
}

impl CitiesState {
    /// Id of the current city, if there is one.
    pub fn current_id(&self) -> Option<&CityId> {
        self.current_city.as_ref().map(|c| &c.id)
    }

    pub fn find(&self, id: &CityId) -> Option<&City> {
        self.cities.iter().find(|c| &c.id == id)
    }
}

/// Every transition the city store knows.
///
/// The serde form is `{"type": "<kind>", "payload": ...}` so actions can be
/// dispatched from JavaScript.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Action {
    #[serde(rename = "loading")]
    Loading,
    #[serde(rename = "cities/loaded")]
    CitiesLoaded(Vec<City>),
    #[serde(rename = "city/loaded")]
    CityLoaded(City),
    #[serde(rename = "city/added")]
    CityAdded(City),
    #[serde(rename = "city/deleted")]
    CityDeleted(CityId),
    #[serde(rename = "rejected")]
    Rejected(String),
}

impl Action {
    pub const KINDS: [&'static str; 6] = [
        "loading",
        "cities/loaded",
        "city/loaded",
        "city/added",
        "city/deleted",
        "rejected",
    ];

    /// Wire name of the action.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Loading => "loading",
            Action::CitiesLoaded(_) => "cities/loaded",
            Action::CityLoaded(_) => "city/loaded",
            Action::CityAdded(_) => "city/added",
            Action::CityDeleted(_) => "city/deleted",
            Action::Rejected(_) => "rejected",
        }
    }

    /// Decode an action from its JSON form.
    ///
    /// An unrecognised `type` is reported as [`TravelogError::UnknownAction`]
    /// rather than a generic JSON error.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        let kind = value
            .get("type")
            .and_then(|t| t.as_str())
            .ok_or_else(|| TravelogError::UnknownAction(value.to_string()))?;
        if !Self::KINDS.iter().any(|known| *known == kind) {
            return Err(TravelogError::UnknownAction(kind.to_owned()));
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Compute the next store state.
///
/// Successful results clear `is_loading` and any earlier error. A rejection
/// clears `is_loading`, records the message and keeps the data that was
/// already loaded.
pub fn reducer(state: &CitiesState, action: Action) -> CitiesState {
    match action {
        Action::Loading => CitiesState {
            is_loading: true,
            ..state.clone()
        },
        Action::CitiesLoaded(cities) => CitiesState {
            cities,
            is_loading: false,
            error: None,
            ..state.clone()
        },
        Action::CityLoaded(city) => CitiesState {
            current_city: Some(city),
            is_loading: false,
            error: None,
            ..state.clone()
        },
        Action::CityAdded(city) => {
            let mut cities = state.cities.clone();
            cities.push(city.clone());
            CitiesState {
                cities,
                current_city: Some(city),
                is_loading: false,
                error: None,
            }
        }
        Action::CityDeleted(id) => CitiesState {
            cities: state
                .cities
                .iter()
                .filter(|c| c.id != id)
                .cloned()
                .collect(),
            current_city: None,
            is_loading: false,
            error: None,
        },
        Action::Rejected(message) => CitiesState {
            is_loading: false,
            error: Some(message),
            ..state.clone()
        },
    }
}
