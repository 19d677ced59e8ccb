// crates/travelog-core/src/store/provider.rs
use super::{reducer, Action, CitiesState};
use crate::api::CityApi;
use crate::error::Result;
use crate::model::{CityId, NewCity};
use tracing::{debug, info, warn};

pub const LOAD_CITIES_FAILED: &str = "There is some error loading cities!";
pub const LOAD_CITY_FAILED: &str = "There is some error in loading city!";
pub const CREATE_CITY_FAILED: &str = "There is some error in creating city!";
pub const DELETE_CITY_FAILED: &str = "There is some error in deleting city!";

/// Callback invoked after every dispatch with the action and the new state.
pub type Listener = Box<dyn FnMut(&Action, &CitiesState)>;

/// Owner of the city store and the operations that feed it.
///
/// Every operation has the same shape: dispatch [`Action::Loading`], make one
/// call through the [`CityApi`], then dispatch either the success action or
/// [`Action::Rejected`]. Failures are recorded in the state *and* returned so
/// the caller can decide whether to surface them.
pub struct CitiesProvider<A: CityApi> {
    api: A,
    state: CitiesState,
    listeners: Vec<Listener>,
}

impl<A: CityApi> CitiesProvider<A> {
    /// A provider with an empty store. Nothing is fetched.
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: CitiesState::default(),
            listeners: Vec::new(),
        }
    }

    /// A provider that has already loaded the city collection.
    ///
    /// A failed initial load is not fatal: it leaves the store empty with its
    /// `error` set.
    pub fn mount(api: A) -> Self {
        let mut provider = Self::new(api);
        info!("mounting cities provider");
        provider.load_cities().ok();
        provider
    }

    pub fn state(&self) -> &CitiesState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Register a consumer that is notified after each dispatch.
    pub fn subscribe(&mut self, listener: impl FnMut(&Action, &CitiesState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply one action to the store.
    pub fn dispatch(&mut self, action: Action) {
        debug!(action = action.kind(), "dispatch");
        self.state = reducer(&self.state, action.clone());
        for listener in &mut self.listeners {
            listener(&action, &self.state);
        }
    }

    /// Fetch the whole collection and replace `cities`.
    pub fn load_cities(&mut self) -> Result<()> {
        self.run(LOAD_CITIES_FAILED, |api| api.list_cities(), Action::CitiesLoaded)
    }

    /// Make `id` the current city.
    ///
    /// When `id` already is the current city nothing is fetched and nothing is
    /// dispatched.
    pub fn fetch_current_city(&mut self, id: &CityId) -> Result<()> {
        if self.state.current_id() == Some(id) {
            debug!(%id, "city already current, skipping fetch");
            return Ok(());
        }
        self.run(LOAD_CITY_FAILED, |api| api.get_city(id), Action::CityLoaded)
    }

    /// Store a new city; the server's record is appended and becomes current.
    pub fn create_city(&mut self, new_city: &NewCity) -> Result<()> {
        self.run(
            CREATE_CITY_FAILED,
            |api| api.create_city(new_city),
            Action::CityAdded,
        )
    }

    /// Remove a city from the backend and from the store.
    pub fn delete_city(&mut self, id: &CityId) -> Result<()> {
        let deleted = id.clone();
        self.run(
            DELETE_CITY_FAILED,
            |api| api.delete_city(id),
            move |()| Action::CityDeleted(deleted),
        )
    }

    fn run<T>(
        &mut self,
        message: &'static str,
        call: impl FnOnce(&A) -> Result<T>,
        on_success: impl FnOnce(T) -> Action,
    ) -> Result<()> {
        self.dispatch(Action::Loading);
        match call(&self.api) {
            Ok(value) => {
                self.dispatch(on_success(value));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "{message}");
                self.dispatch(Action::Rejected(message.to_owned()));
                Err(err)
            }
        }
    }
}
