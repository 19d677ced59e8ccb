//! travelog-wasm — WebAssembly bindings for travelog-core
//!
//! This crate exposes the travel log's client state to JavaScript: a mounted
//! city store driven by dispatched actions, the derived country/city lists
//! and the auth stub.
//!
//! The browser owns networking. JS performs the `fetch` against the backend
//! and reports each step as an action, exactly like the store's own
//! provider does on native targets:
//!
//! ```javascript
//! import init, { mount_cities_provider, dispatch_cities, should_fetch_city,
//!                country_list, api_base_url } from 'travelog-wasm';
//!
//! async function main() {
//!   await init();
//!   mount_cities_provider();
//!
//!   dispatch_cities({ type: 'loading' });
//!   try {
//!     const res = await fetch(`${api_base_url()}/cities`);
//!     dispatch_cities({ type: 'cities/loaded', payload: await res.json() });
//!   } catch {
//!     dispatch_cities({ type: 'rejected', payload: 'There is some error loading cities!' });
//!   }
//!
//!   console.log(country_list()); // { kind: 'items', data: [{ country, emoji }, ...] }
//!   if (should_fetch_city('73930385')) { /* GET /cities/73930385 ... */ }
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Hooks (`use_cities`, `use_auth`, ...) throw when the matching provider
//!   has not been mounted.
//! - `dispatch_cities` throws on an unknown action `type`.
//! - All returned objects are plain JSON-compatible values.
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use std::fmt::Display;
use wasm_bindgen::prelude::*;

mod session;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing travelog WASM module...".into());
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(js_err)
}

fn js_err(err: impl Display) -> JsError {
    JsError::new(&err.to_string())
}

/* --------------------------------------------------------------------------
   Cities Provider
-------------------------------------------------------------------------- */

/// Mount an empty city store and return its state.
#[wasm_bindgen]
pub fn mount_cities_provider() -> Result<JsValue, JsError> {
    to_js(&session::mount_cities())
}

#[wasm_bindgen]
pub fn unmount_cities_provider() {
    session::unmount_cities();
}

/// Current city store state: `{ cities, isLoading, currentCity, error }`.
#[wasm_bindgen]
pub fn use_cities() -> Result<JsValue, JsError> {
    to_js(&session::cities().map_err(js_err)?)
}

/// Apply `{ type, payload }` to the store and return the new state.
#[wasm_bindgen]
pub fn dispatch_cities(action: JsValue) -> Result<JsValue, JsError> {
    let action: serde_json::Value = serde_wasm_bindgen::from_value(action).map_err(js_err)?;
    let (action, state) = session::dispatch(action).map_err(js_err)?;
    web_sys::console::debug_1(&format!("dispatch {}", action.kind()).into());
    to_js(&state)
}

#[wasm_bindgen]
pub fn should_fetch_city(id: &str) -> Result<bool, JsError> {
    session::should_fetch_city(id).map_err(js_err)
}

/* --------------------------------------------------------------------------
   Derived Views
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn country_list() -> Result<JsValue, JsError> {
    to_js(&session::countries().map_err(js_err)?)
}

#[wasm_bindgen]
pub fn city_list() -> Result<JsValue, JsError> {
    to_js(&session::city_items().map_err(js_err)?)
}

#[wasm_bindgen]
pub fn flag_emoji(country_code: &str) -> Option<String> {
    travelog_core::model::flag_emoji(country_code)
}

#[wasm_bindgen]
pub fn api_base_url() -> String {
    travelog_core::config::DEFAULT_BASE_URL.to_owned()
}

/* --------------------------------------------------------------------------
   Auth Provider
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn mount_auth_provider() -> Result<JsValue, JsError> {
    to_js(&session::mount_auth())
}

/// `{ user, isAuthenticated }`
#[wasm_bindgen]
pub fn use_auth() -> Result<JsValue, JsError> {
    to_js(&session::auth().map_err(js_err)?)
}

#[wasm_bindgen]
pub fn login(email: &str, password: &str) -> Result<JsValue, JsError> {
    to_js(&session::login(email, password).map_err(js_err)?)
}

#[wasm_bindgen]
pub fn logout() -> Result<JsValue, JsError> {
    to_js(&session::logout().map_err(js_err)?)
}
