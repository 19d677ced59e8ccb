//! Mounted stores for the single JS thread.
//!
//! A store exists between `mount_*` and `unmount_*`; the `use_*` accessors
//! fail with [`TravelogError::OutsideProvider`] when nothing is mounted.

use std::cell::RefCell;
use travelog_core::auth::{AuthProvider, AuthState};
use travelog_core::store::{reducer, Action, CitiesState};
use travelog_core::views::{city_list, country_list, CityItem, CountryItem, ListView};
use travelog_core::{CityId, Result, TravelogError};

thread_local! {
    static CITIES: RefCell<Option<CitiesState>> = const { RefCell::new(None) };
    static AUTH: RefCell<Option<AuthProvider>> = const { RefCell::new(None) };
}

pub fn mount_cities() -> CitiesState {
    let state = CitiesState::default();
    CITIES.with(|slot| *slot.borrow_mut() = Some(state.clone()));
    state
}

pub fn unmount_cities() {
    CITIES.with(|slot| *slot.borrow_mut() = None);
}

fn with_cities<T>(f: impl FnOnce(&mut CitiesState) -> T) -> Result<T> {
    CITIES.with(|slot| match slot.borrow_mut().as_mut() {
        Some(state) => Ok(f(state)),
        None => Err(TravelogError::OutsideProvider("Cities")),
    })
}

pub fn cities() -> Result<CitiesState> {
    with_cities(|state| state.clone())
}

/// Decode `action`, run it through the reducer and return the new state.
pub fn dispatch(action: serde_json::Value) -> Result<(Action, CitiesState)> {
    let action = Action::from_json(action)?;
    with_cities(|state| {
        *state = reducer(state, action.clone());
        (action, state.clone())
    })
}

/// False when `id` already is the current city, so JS can skip the request.
pub fn should_fetch_city(id: &str) -> Result<bool> {
    let id = CityId::from(id);
    with_cities(|state| state.current_id() != Some(&id))
}

pub fn countries() -> Result<ListView<CountryItem>> {
    with_cities(|state| country_list(&state.cities, state.is_loading))
}

pub fn city_items() -> Result<ListView<CityItem>> {
    with_cities(|state| city_list(&state.cities, state.is_loading, state.current_id()))
}

pub fn mount_auth() -> AuthState {
    let provider = AuthProvider::new();
    let state = provider.state().clone();
    AUTH.with(|slot| *slot.borrow_mut() = Some(provider));
    state
}

fn with_auth<T>(f: impl FnOnce(&mut AuthProvider) -> T) -> Result<T> {
    AUTH.with(|slot| match slot.borrow_mut().as_mut() {
        Some(provider) => Ok(f(provider)),
        None => Err(TravelogError::OutsideProvider("Auth")),
    })
}

pub fn auth() -> Result<AuthState> {
    with_auth(|provider| provider.state().clone())
}

pub fn login(email: &str, password: &str) -> Result<AuthState> {
    with_auth(|provider| {
        provider.login(email, password);
        provider.state().clone()
    })
}

pub fn logout() -> Result<AuthState> {
    with_auth(|provider| {
        provider.logout();
        provider.state().clone()
    })
}
