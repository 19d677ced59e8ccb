// crates/travelog-core/src/auth.rs

//! # Auth Stub
//!
//! A reducer-driven session store that accepts exactly one hardcoded
//! identity. It exists so the rest of the application can be gated behind a
//! login; it is not a credential system.

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Public profile of a signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub avatar: String,
}

struct FakeIdentity {
    user: User,
    password: &'static str,
}

static FAKE_IDENTITY: Lazy<FakeIdentity> = Lazy::new(|| FakeIdentity {
    user: User {
        name: "Jack".to_owned(),
        email: "jack@example.com".to_owned(),
        avatar: "https://i.pravatar.cc/100?u=zz".to_owned(),
    },
    password: "qwerty",
});

/// The profile the stub signs in as.
pub fn fake_user() -> &'static User {
    &FAKE_IDENTITY.user
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    user: Option<User>,
    is_authenticated: bool,
}

/// Only `user` is read; `isAuthenticated` is recomputed from it.
impl<'de> Deserialize<'de> for AuthState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RawState {
            #[serde(default)]
            user: Option<User>,
        }

        let raw = RawState::deserialize(deserializer)?;
        Ok(AuthState {
            is_authenticated: raw.user.is_some(),
            user: raw.user,
        })
    }
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    Login(User),
    Logout,
}

/// `is_authenticated` is derived from `user` so the two cannot disagree.
pub fn auth_reducer(_state: &AuthState, action: AuthAction) -> AuthState {
    match action {
        AuthAction::Login(user) => AuthState {
            user: Some(user),
            is_authenticated: true,
        },
        AuthAction::Logout => AuthState::default(),
    }
}

/// Session store with `login`/`logout` triggers.
#[derive(Debug, Default)]
pub struct AuthProvider {
    state: AuthState,
}

impl AuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn dispatch(&mut self, action: AuthAction) {
        self.state = auth_reducer(&self.state, action);
    }

    /// Sign in if the credentials match the fake identity; otherwise nothing
    /// happens.
    pub fn login(&mut self, email: &str, password: &str) {
        let identity = &*FAKE_IDENTITY;
        if email == identity.user.email && password == identity.password {
            self.dispatch(AuthAction::Login(identity.user.clone()));
        } else {
            debug!(email, "login rejected");
        }
    }

    pub fn logout(&mut self) {
        self.dispatch(AuthAction::Logout);
    }
}
