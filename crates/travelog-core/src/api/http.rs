// crates/travelog-core/src/api/http.rs

//! Reqwest-backed cities client.
//!
//! Owns transport details only: URL building, the JSON body, status mapping
//! and decoding.

use super::CityApi;
use crate::config::ApiConfig;
use crate::error::{Result, TravelogError};
use crate::model::{City, CityId, NewCity};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Blocking client for the cities REST backend.
#[derive(Debug, Clone)]
pub struct HttpCityApi {
    client: Client,
    config: ApiConfig,
}

impl HttpCityApi {
    /// Build a client with the configured request timeout.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(TravelogError::Network)?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl CityApi for HttpCityApi {
    fn list_cities(&self) -> Result<Vec<City>> {
        let url = self.config.cities_url();
        debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(TravelogError::Network)?;
        decode(check_status(response, &url)?)
    }

    fn get_city(&self, id: &CityId) -> Result<City> {
        let url = self.config.city_url(id.as_str())?;
        debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(TravelogError::Network)?;
        decode(check_status(response, &url)?)
    }

    fn create_city(&self, city: &NewCity) -> Result<City> {
        let url = self.config.cities_url();
        debug!(%url, city = %city.city_name, "POST");
        // `.json()` sets `Content-Type: application/json`.
        let response = self
            .client
            .post(&url)
            .json(city)
            .send()
            .map_err(TravelogError::Network)?;
        decode(check_status(response, &url)?)
    }

    fn delete_city(&self, id: &CityId) -> Result<()> {
        let url = self.config.city_url(id.as_str())?;
        debug!(%url, "DELETE");
        let response = self
            .client
            .delete(&url)
            .send()
            .map_err(TravelogError::Network)?;
        check_status(response, &url)?;
        Ok(())
    }
}

fn check_status(response: Response, url: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(TravelogError::Status {
            status: status.as_u16(),
            url: url.to_owned(),
        })
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.bytes().map_err(TravelogError::Network)?;
    serde_json::from_slice(&body).map_err(|e| TravelogError::Decode(e.to_string()))
}
