//! Auth session state and context for the frontend. The whole session, the
//! pending verification included, lives in one `SessionStore` signal so every
//! page reads and writes the same state. Nothing is persisted; a reload starts
//! signed out.

use carpool_ui::{
    flows::{dashboard, login, profile, verify},
    types::{AuthResponse, VerifyEmailResponse},
    AppError, PendingVerification, SessionStore, User,
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub store: RwSignal<SessionStore>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    fn new(store: RwSignal<SessionStore>) -> Self {
        let is_authenticated = Signal::derive(move || store.with(SessionStore::is_authenticated));
        Self {
            store,
            is_authenticated,
        }
    }

    /// Stores the session from a login response and returns the next route.
    pub fn complete_login(&self, response: AuthResponse) -> &'static str {
        self.apply(|store| login::complete_login(store, response))
            .unwrap_or(carpool_ui::paths::HOME)
    }

    /// Applies a verification result and returns the next route.
    pub fn complete_verification(&self, response: VerifyEmailResponse) -> &'static str {
        self.apply(|store| verify::complete_verification(store, response))
            .unwrap_or(carpool_ui::paths::LOGIN)
    }

    /// Saves the updated profile and returns the next route.
    pub fn complete_profile(&self, user: User) -> &'static str {
        self.apply(|store| profile::complete_profile(store, user))
            .unwrap_or(carpool_ui::paths::LOGIN)
    }

    /// Signs out on a rejected token. Returns the route to leave for, if any.
    pub fn handle_failure(&self, err: &AppError) -> Option<&'static str> {
        self.apply(|store| dashboard::handle_failure(store, err))
            .flatten()
    }

    pub fn logout(&self) {
        self.store.update(SessionStore::logout);
    }

    pub fn set_pending_verification(&self, pending: PendingVerification) {
        self.store
            .update(|store| store.set_pending_verification(pending));
    }

    pub fn pending_verification(&self) -> Option<PendingVerification> {
        self.store
            .with_untracked(|store| store.pending_verification().cloned())
    }

    pub fn token(&self) -> Option<String> {
        self.store
            .with_untracked(|store| store.token().map(str::to_string))
    }

    pub fn user(&self) -> Option<User> {
        self.store.with(|store| store.user().cloned())
    }

    /// Writes through the store; `None` once the owning scope is disposed.
    fn apply<T>(&self, apply: impl FnOnce(&mut SessionStore) -> T) -> Option<T> {
        self.store.try_update(apply)
    }
}

/// Provides auth context for the whole app.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new(RwSignal::new(SessionStore::new()));
    provide_context(auth);

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| AuthContext::new(RwSignal::new(SessionStore::new())))
}
