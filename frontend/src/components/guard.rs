//! Route guard component.
//!
//! Three observable states, driven purely by the session signals:
//! initializing renders a placeholder, an anonymous session schedules a
//! redirect and renders nothing, an authenticated session renders children.

use crate::session::{use_session, SessionPhase};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn SessionGuard(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    // The redirect is an effect, not part of rendering, so it fires once per
    // state change even if the view re-renders.
    Effect::new(move |_| {
        let state = session.state.get();
        if state.is_initialized && !state.is_authenticated() {
            router.navigate_route(AppRoute::auth_failure_redirect());
        }
    });

    move || match session.state.get().phase() {
        SessionPhase::Initializing => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center space-y-2">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                    <p class="text-base-content/70">"Checking your session..."</p>
                </div>
            </div>
        }
        .into_any(),
        SessionPhase::Unauthenticated => ().into_any(),
        SessionPhase::Authenticated => children().into_any(),
    }
}
