//! Aptcare admin frontend.
//!
//! Context-driven architecture:
//! - `web::route` / `web::router`: route model and history-API router
//! - `session`: explicit session object, injected into router and client
//! - `api`: HTTP client wrapper and per-resource service modules
//! - `components`: UI layer, with `SessionGuard` gating protected pages

pub mod api;
pub mod components;
pub mod config;
pub mod session;
pub mod validate;
pub mod web;

use crate::api::ApiClient;
use crate::components::dashboard::DashboardPage;
use crate::components::facilities::FacilitiesPage;
use crate::components::guard::SessionGuard;
use crate::components::profile::ProfilePage;
use crate::components::role_form::RolesPage;
use crate::components::signin::SignInPage;
use crate::components::users::UsersPage;
use crate::config::AppConfig;
use crate::session::{expire, init_session, SessionContext};
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

use leptos::prelude::*;

/// Maps the current route to its page. Every protected page sits behind the
/// session guard; the router additionally refuses to navigate there while
/// anonymous.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::SignIn => view! { <SignInPage /> }.into_any(),
        AppRoute::Dashboard => view! {
            <SessionGuard>
                <DashboardPage />
            </SessionGuard>
        }
        .into_any(),
        AppRoute::Facilities => view! {
            <SessionGuard>
                <FacilitiesPage />
            </SessionGuard>
        }
        .into_any(),
        AppRoute::Users => view! {
            <SessionGuard>
                <UsersPage />
            </SessionGuard>
        }
        .into_any(),
        AppRoute::Roles => view! {
            <SessionGuard>
                <RolesPage />
            </SessionGuard>
        }
        .into_any(),
        AppRoute::Profile => view! {
            <SessionGuard>
                <ProfilePage />
            </SessionGuard>
        }
        .into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();

    // Session context first: the router and the client both derive from it.
    let session = SessionContext::new();
    provide_context(session);
    init_session(&session);

    // The transport reports 401s as an event; expiring the session makes the
    // router's auth effect redirect to sign-in.
    let on_session_expired = Callback::new(move |()| expire(&session));
    let api = ApiClient::new(
        &config.api_base_url,
        session.token_signal(),
        on_session_expired,
    );
    provide_context(api);
    provide_context(config);

    let is_authenticated = session.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
