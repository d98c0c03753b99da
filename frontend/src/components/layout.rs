//! Shared page chrome: the navigation header and loading fragments.

use crate::config::AppConfig;
use crate::session::{sign_out, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;

const NAV_ITEMS: [(&str, AppRoute); 5] = [
    ("Dashboard", AppRoute::Dashboard),
    ("Facilities", AppRoute::Facilities),
    ("Team", AppRoute::Users),
    ("Roles", AppRoute::Roles),
    ("Profile", AppRoute::Profile),
];

#[component]
pub fn PageHeader() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let config = use_context::<AppConfig>().unwrap_or_else(AppConfig::from_build_env);

    let display_name = move || {
        session
            .state
            .get()
            .user
            .map(|u| u.display_name)
            .unwrap_or_default()
    };
    let environment = config.environment.clone();

    let on_sign_out = move |_| {
        sign_out(&session);
        // Navigation is handled by the router's auth-state effect.
    };

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2">
                <a class="btn btn-ghost text-xl">"Aptcare Admin"</a>
                <span class="badge badge-neutral hidden md:inline-flex">{environment}</span>
                <div class="tabs tabs-boxed bg-base-100 hidden lg:flex">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(label, route)| {
                            view! {
                                <a
                                    class=move || {
                                        if router.current_route().get() == route {
                                            "tab tab-active"
                                        } else {
                                            "tab"
                                        }
                                    }
                                    on:click=move |_| router.navigate_route(route)
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="flex-none gap-2">
                <span class="text-sm text-base-content/70 hidden md:inline">{display_name}</span>
                <button on:click=on_sign_out class="btn btn-outline btn-error btn-sm">
                    "Sign out"
                </button>
            </div>
        </div>
    }
}

/// Centered spinner for an in-flight page fetch.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-8">
            <span class="loading loading-spinner loading-md text-primary"></span>
        </div>
    }
}

/// Placeholder table row for an empty or still-loading list.
#[component]
pub fn EmptyRow(
    #[prop(into)] colspan: String,
    #[prop(into)] message: String,
) -> impl IntoView {
    view! {
        <tr>
            <td colspan=colspan class="text-center py-8 text-base-content/50">
                {message}
            </td>
        </tr>
    }
}
