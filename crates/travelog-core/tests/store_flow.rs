//! End-to-end store behaviour against an in-memory backend.

use std::cell::{Cell, RefCell};
use travelog_core::prelude::*;

/// Backend double that stores cities in memory and counts requests.
#[derive(Default)]
struct MemoryBackend {
    cities: RefCell<Vec<City>>,
    next_id: Cell<u64>,
    requests: RefCell<Vec<String>>,
    offline: Cell<bool>,
}

impl MemoryBackend {
    fn seeded() -> Self {
        let backend = Self::default();
        backend.next_id.set(100);
        for (name, country, emoji) in [
            ("Lisbon", "Portugal", "🇵🇹"),
            ("Porto", "Portugal", "🇵🇹"),
            ("Berlin", "Germany", "🇩🇪"),
        ] {
            let stored = new_city(name, country, emoji).with_id(backend.bump());
            backend.cities.borrow_mut().push(stored);
        }
        backend
    }

    fn bump(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn log(&self, line: String) -> Result<()> {
        self.requests.borrow_mut().push(line);
        if self.offline.get() {
            return Err(TravelogError::Status {
                status: 502,
                url: "http://localhost:8000".into(),
            });
        }
        Ok(())
    }

    fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl CityApi for MemoryBackend {
    fn list_cities(&self) -> Result<Vec<City>> {
        self.log("GET /cities".into())?;
        Ok(self.cities.borrow().clone())
    }

    fn get_city(&self, id: &CityId) -> Result<City> {
        self.log(format!("GET /cities/{id}"))?;
        self.cities
            .borrow()
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| TravelogError::Status {
                status: 404,
                url: format!("/cities/{id}"),
            })
    }

    fn create_city(&self, city: &NewCity) -> Result<City> {
        self.log("POST /cities".into())?;
        let stored = city.clone().with_id(self.bump());
        self.cities.borrow_mut().push(stored.clone());
        Ok(stored)
    }

    fn delete_city(&self, id: &CityId) -> Result<()> {
        self.log(format!("DELETE /cities/{id}"))?;
        self.cities.borrow_mut().retain(|c| &c.id != id);
        Ok(())
    }
}

fn new_city(name: &str, country: &str, emoji: &str) -> NewCity {
    NewCity {
        city_name: name.into(),
        country: country.into(),
        emoji: emoji.into(),
        date: "2027-06-01T12:00:00.000Z".into(),
        notes: String::new(),
        position: Position { lat: 0.0, lng: 0.0 },
    }
}

#[test]
fn mounting_fetches_once_and_derives_countries() {
    let backend = MemoryBackend::seeded();
    let provider = CitiesProvider::mount(&backend);

    assert_eq!(backend.request_count(), 1);
    let state = provider.state();
    let countries = country_list(&state.cities, state.is_loading);
    let names: Vec<_> = countries.items().iter().map(|c| c.country.as_str()).collect();
    assert_eq!(names, ["Portugal", "Germany"]);
}

#[test]
fn selecting_the_current_city_again_is_free() {
    let backend = MemoryBackend::seeded();
    let mut provider = CitiesProvider::mount(&backend);

    let id = CityId::from(101_u64);
    provider.fetch_current_city(&id).unwrap();
    let after_first = backend.request_count();
    provider.fetch_current_city(&CityId::from("101")).unwrap();

    assert_eq!(backend.request_count(), after_first);
    assert_eq!(provider.state().current_id(), Some(&id));
}

#[test]
fn create_then_delete_round_trip() {
    let backend = MemoryBackend::seeded();
    let mut provider = CitiesProvider::mount(&backend);

    provider
        .create_city(&new_city("Paris", "France", "🇫🇷"))
        .unwrap();
    let created = provider.state().current_city.clone().expect("current city");
    assert_eq!(created.city_name, "Paris");
    assert_eq!(provider.state().cities.len(), 4);

    let view = city_list(
        &provider.state().cities,
        provider.state().is_loading,
        provider.state().current_id(),
    );
    let active: Vec<_> = view.items().iter().filter(|c| c.is_active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].city_name, "Paris");

    provider.delete_city(&created.id).unwrap();
    assert!(provider.state().find(&created.id).is_none());
    assert_eq!(provider.state().current_city, None);
    assert_eq!(
        backend.requests.borrow().last().map(String::as_str),
        Some("DELETE /cities/103")
    );
}

#[test]
fn failures_reject_without_losing_data() {
    let backend = MemoryBackend::seeded();
    let mut provider = CitiesProvider::mount(&backend);
    backend.offline.set(true);

    assert!(provider
        .create_city(&new_city("Rome", "Italy", "🇮🇹"))
        .is_err());
    let state = provider.state();
    assert!(!state.is_loading);
    assert_eq!(state.cities.len(), 3);
    assert!(state.error.is_some());

    backend.offline.set(false);
    provider.load_cities().unwrap();
    assert_eq!(provider.state().error, None);
}

#[test]
fn unknown_city_is_rejected() {
    let backend = MemoryBackend::seeded();
    let mut provider = CitiesProvider::mount(&backend);

    let err = provider
        .fetch_current_city(&CityId::new("nope"))
        .unwrap_err();
    assert!(matches!(err, TravelogError::Status { status: 404, .. }));
    assert_eq!(provider.state().current_city, None);
}
