#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

// Import the wasm functions from this crate
use travelog_wasm::{
    country_list, dispatch_cities, flag_emoji, login, mount_auth_provider, mount_cities_provider,
    should_fetch_city, unmount_cities_provider, use_auth, use_cities,
};

fn ok<T>(result: Result<T, wasm_bindgen::JsError>) -> T {
    result.map_err(JsValue::from).unwrap()
}

fn field(value: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(value, &key.into()).unwrap()
}

#[wasm_bindgen_test]
fn hook_throws_without_provider() {
    unmount_cities_provider();
    assert!(use_cities().is_err());
}

#[wasm_bindgen_test]
fn loading_dispatch_updates_state() {
    ok(mount_cities_provider());
    let action = js_sys::JSON::parse(r#"{ "type": "loading" }"#).unwrap();
    let state = ok(dispatch_cities(action));
    assert_eq!(field(&state, "isLoading").as_bool(), Some(true));

    let view = ok(country_list());
    assert_eq!(field(&view, "kind").as_string().as_deref(), Some("loading"));
    assert!(ok(should_fetch_city("1")));
}

#[wasm_bindgen_test]
fn unknown_action_throws() {
    ok(mount_cities_provider());
    let action = js_sys::JSON::parse(r#"{ "type": "nope" }"#).unwrap();
    assert!(dispatch_cities(action).is_err());
}

#[wasm_bindgen_test]
fn fake_login() {
    ok(mount_auth_provider());
    ok(login("jack@example.com", "qwerty"));
    let state = ok(use_auth());
    assert_eq!(field(&state, "isAuthenticated").as_bool(), Some(true));
}

#[wasm_bindgen_test]
fn flags() {
    assert_eq!(flag_emoji("de").as_deref(), Some("🇩🇪"));
}
