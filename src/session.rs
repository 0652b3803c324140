//! Session and authentication gate.
//!
//! Identity lives outside this application; a [`SessionProvider`] only reports
//! who is signed in. The dashboard is a protected view: without an
//! authenticated user the app routes to the landing screen instead.

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
}

pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Option<User>;

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}

/// Reads the signed-in user's name from an environment variable
#[derive(Debug, Clone)]
pub struct EnvSessionProvider {
    user_env: String,
}

impl EnvSessionProvider {
    pub fn new(user_env: impl Into<String>) -> Self {
        Self {
            user_env: user_env.into(),
        }
    }

    pub fn user_env(&self) -> &str {
        &self.user_env
    }
}

impl SessionProvider for EnvSessionProvider {
    fn current_user(&self) -> Option<User> {
        std::env::var(&self.user_env)
            .ok()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .map(|name| User { name })
    }
}

/// Fixed session, used for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    pub user: Option<User>,
}

impl StaticSession {
    pub fn signed_in(name: &str) -> Self {
        Self {
            user: Some(User { name: name.to_string() }),
        }
    }

    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

impl SessionProvider for StaticSession {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }
}

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Dashboard,
}

pub fn route_for(session: &dyn SessionProvider) -> Route {
    if session.is_authenticated() {
        Route::Dashboard
    } else {
        Route::Landing
    }
}

pub fn greeting(user: Option<&User>) -> String {
    match user {
        Some(user) if !user.name.is_empty() => format!("Welcome back, {}!", user.name),
        _ => "Welcome back!".to_string(),
    }
}
