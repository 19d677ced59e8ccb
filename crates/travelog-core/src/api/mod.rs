// crates/travelog-core/src/api/mod.rs

//! # Cities API
//!
//! The transport seam of the store. [`CitiesProvider`](crate::store::CitiesProvider)
//! only talks to a [`CityApi`]; the blocking reqwest client lives behind the
//! `http` feature so the browser build can leave networking to JavaScript.

use crate::error::Result;
use crate::model::{City, CityId, NewCity};

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::HttpCityApi;

/// The four REST calls the city store needs.
///
/// Implementations do no retrying and no caching; every call maps to exactly
/// one request.
#[cfg_attr(test, mockall::automock)]
pub trait CityApi {
    /// `GET /cities`
    fn list_cities(&self) -> Result<Vec<City>>;

    /// `GET /cities/{id}`
    fn get_city(&self, id: &CityId) -> Result<City>;

    /// `POST /cities`, returning the stored record with its new id.
    fn create_city(&self, city: &NewCity) -> Result<City>;

    /// `DELETE /cities/{id}`
    fn delete_city(&self, id: &CityId) -> Result<()>;
}

impl<T: CityApi + ?Sized> CityApi for &T {
    fn list_cities(&self) -> Result<Vec<City>> {
        (**self).list_cities()
    }

    fn get_city(&self, id: &CityId) -> Result<City> {
        (**self).get_city(id)
    }

    fn create_city(&self, city: &NewCity) -> Result<City> {
        (**self).create_city(city)
    }

    fn delete_city(&self, id: &CityId) -> Result<()> {
        (**self).delete_city(id)
    }
}
