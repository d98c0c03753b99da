//! Router service.
//!
//! All `window.history` access lives here. Navigation follows a
//! request → guard check → history update → signal update flow, and an
//! effect watches the injected authentication signal so that signing out
//! (or a session-expired event) redirects without any component asking.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Router service, shared via context. The authentication signal is
/// injected so routing never reads session internals.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);
        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    pub fn navigate_route(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        let is_auth = self.is_authenticated.get_untracked();

        if target_route.requires_auth() && !is_auth {
            web_sys::console::log_1(&"[router] access denied, redirecting to sign-in".into());
            self.apply(AppRoute::auth_failure_redirect(), use_push);
            return;
        }

        if target_route.should_redirect_when_authenticated() && is_auth {
            self.apply(AppRoute::auth_success_redirect(), use_push);
            return;
        }

        self.apply(target_route, use_push);
    }

    fn apply(&self, route: AppRoute, use_push: bool) {
        // Re-applying the current route would stack duplicate history
        // entries, so it is a no-op. The guard component and the auth effect
        // can both request the same redirect; only the first one lands.
        if route == self.current_route.get_untracked() {
            return;
        }
        if use_push {
            push_history_state(route.to_path());
        } else {
            replace_history_state(route.to_path());
        }
        self.set_route.set(route);
    }

    /// Back/forward buttons go through the same guard.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            if target_route.requires_auth() && !is_authenticated.get_untracked() {
                let redirect = AppRoute::auth_failure_redirect();
                replace_history_state(redirect.to_path());
                set_route.set(redirect);
            } else {
                set_route.set(target_route);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Leak the closure to keep the listener alive for the page lifetime.
        closure.forget();
    }

    /// Redirect automatically when the authentication state flips.
    fn setup_auth_redirect(&self) {
        let router = *self;

        Effect::new(move |_| {
            let is_auth = router.is_authenticated.get();
            let route = router.current_route.get_untracked();

            if let Some(redirect) = AppRoute::auth_change_redirect(is_auth, route) {
                if !is_auth {
                    web_sys::console::log_1(&"[router] signed out, redirecting to sign-in".into());
                }
                router.apply(redirect, true);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);
    router.init_popstate_listener();
    router.setup_auth_redirect();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// =========================================================
// Components
// =========================================================

/// Router root component; provides the service, should wrap the App body.
#[component]
pub fn Router(
    /// Authentication state signal
    is_authenticated: Signal<bool>,
    /// Child components
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);
    children()
}

/// Renders the view the matcher returns for the current route.
#[component]
pub fn RouterOutlet(
    /// Route matcher: maps the current route to a view
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
