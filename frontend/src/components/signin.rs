//! Sign-in page.

use crate::api::use_api;
use crate::session::{store_session, use_session};
use crate::validate::required;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = use_session();
    let api = use_api();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email_error, set_email_error) = signal(String::new());
    let (password_error, set_password_error) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let is_initializing = move || !session.state.get().is_initialized;

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let email_msg = required("Email", &email.get());
        let password_msg = required("Password", &password.get());
        set_email_error.set(email_msg.clone());
        set_password_error.set(password_msg.clone());
        if !email_msg.is_empty() || !password_msg.is_empty() {
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        spawn_local(async move {
            match api.sign_in(email.get_untracked(), password.get_untracked()).await {
                Ok(response) => {
                    // The router's auth effect forwards to the dashboard.
                    store_session(&session, response.token, response.user);
                }
                Err(error) => {
                    set_error_msg.set(Some(error.to_string()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <Show
            when=move || !is_initializing()
            fallback=|| {
                view! {
                    <div class="flex items-center justify-center min-h-screen">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            }
        >
            <div class="hero min-h-screen bg-base-200">
                <div class="hero-content flex-col w-full max-w-md">
                    <div class="text-center mb-4">
                        <h1 class="text-3xl font-bold">"Aptcare Admin"</h1>
                        <p class="text-base-content/70">"Sign in to manage your clinics"</p>
                    </div>

                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit.clone()>
                            <Show when=move || error_msg.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                                </div>
                            </Show>

                            <div class="form-control">
                                <label class="label" for="email">
                                    <span class="label-text">"Email"</span>
                                </label>
                                <input
                                    id="email"
                                    type="text"
                                    placeholder="admin@clinic.example"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                    class="input input-bordered"
                                />
                                <Show when=move || !email_error.get().is_empty()>
                                    <span class="label-text-alt text-error mt-1">
                                        {move || email_error.get()}
                                    </span>
                                </Show>
                            </div>
                            <div class="form-control">
                                <label class="label" for="password">
                                    <span class="label-text">"Password"</span>
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    placeholder="••••••••"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    class="input input-bordered"
                                />
                                <Show when=move || !password_error.get().is_empty()>
                                    <span class="label-text-alt text-error mt-1">
                                        {move || password_error.get()}
                                    </span>
                                </Show>
                            </div>
                            <div class="form-control mt-6">
                                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || {
                                        if is_submitting.get() {
                                            view! {
                                                <span class="loading loading-spinner"></span>
                                                "Signing in..."
                                            }
                                                .into_any()
                                        } else {
                                            "Sign in".into_any()
                                        }
                                    }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </Show>
    }
}
