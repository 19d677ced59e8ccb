// crates/travelog-core/src/lib.rs

//! # travelog-core
//!
//! Client-side state layer of the travel log: the city store (a pure reducer
//! plus a provider that talks to the REST backend), derived list views and a
//! single-user auth stub.
//!
//! ```no_run
//! use travelog_core::prelude::*;
//!
//! # fn main() -> travelog_core::Result<()> {
//! let api = HttpCityApi::new(&ApiConfig::default())?;
//! let provider = CitiesProvider::mount(api);
//!
//! for country in countries_of(&provider.state().cities) {
//!     println!("{} {}", country.emoji, country.country);
//! }
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod model;
pub mod prelude;
pub mod store;
pub mod views;

// Re-exports
pub use crate::config::ApiConfig;
pub use crate::error::{Result, TravelogError};
pub use crate::model::{City, CityId, NewCity, Position};
pub use crate::store::{reducer, Action, CitiesProvider, CitiesState};
