//! Session state management.
//!
//! The session is an explicit object injected through context, decoupled
//! from routing: the router receives a derived authentication signal, and
//! the HTTP layer receives a derived token signal. Browser storage is only
//! touched here and by the transport's 401 cleanup; components never read
//! it directly.

use aptcare_shared::{SessionUser, STORAGE_TOKEN_KEY, STORAGE_USER_KEY};
use gloo_storage::{LocalStorage, SessionStorage, Storage};
use leptos::prelude::*;

/// Observable session lifecycle: `uninitialized → ready{anonymous} |
/// ready{token, user}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Initializing,
    Unauthenticated,
    Authenticated,
}

#[derive(Clone, Default, PartialEq)]
pub struct SessionState {
    /// Signed-in identity, absent when anonymous.
    pub user: Option<SessionUser>,
    /// Opaque credential attached to every request.
    pub token: Option<String>,
    /// Whether the startup storage check has completed.
    pub is_initialized: bool,
}

impl SessionState {
    /// A session is authenticated only when both token and user are present;
    /// either one missing means anonymous.
    pub fn is_authenticated(&self) -> bool {
        self.is_initialized && self.token.is_some() && self.user.is_some()
    }

    pub fn phase(&self) -> SessionPhase {
        if !self.is_initialized {
            SessionPhase::Initializing
        } else if self.token.is_some() && self.user.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }
}

/// Session context shared between components via Leptos context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<SessionState>,
    pub set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self { state, set_state }
    }

    /// Authentication signal injected into the router service.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }

    /// Token signal injected into the HTTP client.
    pub fn token_signal(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.get().token.clone())
    }

    /// Current identity without subscribing, for payload builders.
    pub fn current_user(&self) -> Option<SessionUser> {
        self.state.get_untracked().user
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// Startup check: restore the token from durable storage and the user from
/// session storage, then mark the context initialized.
pub fn init_session(ctx: &SessionContext) {
    let token: Option<String> = LocalStorage::get(STORAGE_TOKEN_KEY).ok();
    let user: Option<SessionUser> = SessionStorage::get(STORAGE_USER_KEY).ok();
    ctx.set_state.update(|state| {
        state.token = token;
        state.user = user;
        state.is_initialized = true;
    });
}

/// Persist credentials after a successful sign-in and flip the state.
pub fn store_session(ctx: &SessionContext, token: String, user: SessionUser) {
    let _ = LocalStorage::set(STORAGE_TOKEN_KEY, &token);
    let _ = SessionStorage::set(STORAGE_USER_KEY, &user);
    ctx.set_state.update(|state| {
        state.token = Some(token);
        state.user = Some(user);
    });
}

/// Explicit logout. Navigation is handled by the router's auth-state effect.
pub fn sign_out(ctx: &SessionContext) {
    LocalStorage::delete(STORAGE_TOKEN_KEY);
    SessionStorage::delete(STORAGE_USER_KEY);
    ctx.set_state.update(|state| {
        state.token = None;
        state.user = None;
    });
}

/// Subscriber action for the transport's session-expired event. The client
/// has already cleared storage; this clears the reactive state so the router
/// redirects.
pub fn expire(ctx: &SessionContext) {
    sign_out(ctx);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(token: Option<&str>, user: bool) -> SessionState {
        SessionState {
            token: token.map(str::to_string),
            user: user.then(SessionUser::default),
            is_initialized: true,
        }
    }

    #[test]
    fn uninitialized_reports_initializing_regardless_of_credentials() {
        let state = SessionState {
            token: Some("t".to_string()),
            user: Some(SessionUser::default()),
            is_initialized: false,
        };
        assert_eq!(state.phase(), SessionPhase::Initializing);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn missing_token_or_user_is_unauthenticated() {
        assert_eq!(ready(None, true).phase(), SessionPhase::Unauthenticated);
        assert_eq!(ready(Some("t"), false).phase(), SessionPhase::Unauthenticated);
        assert_eq!(ready(None, false).phase(), SessionPhase::Unauthenticated);
    }

    #[test]
    fn token_and_user_present_is_authenticated() {
        let state = ready(Some("t"), true);
        assert_eq!(state.phase(), SessionPhase::Authenticated);
        assert!(state.is_authenticated());
    }
}
