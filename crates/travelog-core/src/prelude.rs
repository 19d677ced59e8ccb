//! travelog prelude: bring common types and traits into scope for demos.

pub use crate::api::CityApi;
#[cfg(feature = "http")]
pub use crate::api::HttpCityApi;
pub use crate::auth::{AuthAction, AuthProvider, AuthState, User};
pub use crate::config::ApiConfig;
pub use crate::error::{Result, TravelogError};
pub use crate::model::{flag_emoji, City, CityId, NewCity, Position};
pub use crate::store::{reducer, Action, CitiesProvider, CitiesState};
pub use crate::views::{city_list, countries_of, country_list, CityItem, CountryItem, ListView};
