//! Account details page. Loads the signed-in user's record, lets them edit
//! contact and professional fields, and submits the multipart update.

use crate::api::use_api;
use crate::components::layout::{PageHeader, Spinner};
use crate::components::notice::{Notice, Snackbar};
use crate::session::use_session;
use crate::validate::required;
use aptcare_shared::AccountDetailsUpdate;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let api = use_api();

    let (loading, set_loading) = signal(true);
    let (is_doctor, set_is_doctor) = signal(false);
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (specialty, set_specialty) = signal(String::new());
    let (qualification, set_qualification) = signal(String::new());
    let (council_id, set_council_id) = signal(String::new());
    let (registration_year, set_registration_year) = signal(String::new());
    let (first_error, set_first_error) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let notice = RwSignal::new(Option::<Notice>::None);

    // Prefill from the backend record, not from the session snapshot.
    Effect::new({
        let api = api.clone();
        move |_| {
            let state = session.state.get();
            if !state.is_authenticated() {
                return;
            }
            let Some(user) = state.user else {
                return;
            };
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.user_details(user.org_user_id).await {
                    Ok(details) => {
                        set_is_doctor.set(details.is_doctor());
                        set_first_name.set(details.first_name);
                        set_last_name.set(details.last_name);
                        set_email.set(details.email);
                        set_phone.set(details.phone);
                        set_specialty.set(details.specialty.unwrap_or_default());
                        set_qualification.set(details.qualification.unwrap_or_default());
                        set_council_id.set(details.council_id.unwrap_or_default());
                        set_registration_year.set(
                            details
                                .registration_year
                                .map(|y| y.to_string())
                                .unwrap_or_default(),
                        );
                    }
                    Err(error) => {
                        notice.set(Some(Notice::error(format!(
                            "Could not load your profile: {}",
                            error
                        ))));
                    }
                }
                set_loading.set(false);
            });
        }
    });

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let first_msg = required("First name", &first_name.get());
            set_first_error.set(first_msg.clone());
            if !first_msg.is_empty() {
                return;
            }
            let Some(user) = session.current_user() else {
                return;
            };

            set_submitting.set(true);

            let api = api.clone();
            let update = AccountDetailsUpdate {
                org_user_id: user.org_user_id,
                first_name: first_name.get_untracked(),
                last_name: last_name.get_untracked(),
                email: email.get_untracked(),
                phone: phone.get_untracked(),
                specialty: specialty.get_untracked(),
                qualification: qualification.get_untracked(),
                council_id: council_id.get_untracked(),
                registration_year: registration_year.get_untracked(),
            };
            spawn_local(async move {
                match api.edit_account_details(update).await {
                    Ok(outcome) => {
                        let message = if outcome.message.is_empty() {
                            "Account details saved".to_string()
                        } else {
                            outcome.message
                        };
                        notice.set(Some(Notice::success(message)));
                    }
                    Err(error) => {
                        notice.set(Some(Notice::error(format!(
                            "Could not save account details: {}",
                            error
                        ))));
                    }
                }
                set_submitting.set(false);
            });
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Snackbar notice=notice />
                <PageHeader />

                <div class="card bg-base-100 shadow-xl max-w-2xl">
                    <div class="card-body">
                        <h3 class="card-title">"Account details"</h3>
                        <Show when=move || !loading.get() fallback=Spinner>
                            <form on:submit=on_submit.clone() class="space-y-4">
                                <div class="grid grid-cols-2 gap-4">
                                    <div class="form-control">
                                        <label for="profile_first" class="label">
                                            <span class="label-text">"First name"</span>
                                        </label>
                                        <input
                                            id="profile_first"
                                            type="text"
                                            on:input=move |ev| set_first_name.set(event_target_value(&ev))
                                            prop:value=first_name
                                            class="input input-bordered w-full"
                                        />
                                        <Show when=move || !first_error.get().is_empty()>
                                            <span class="label-text-alt text-error mt-1">
                                                {move || first_error.get()}
                                            </span>
                                        </Show>
                                    </div>
                                    <div class="form-control">
                                        <label for="profile_last" class="label">
                                            <span class="label-text">"Last name"</span>
                                        </label>
                                        <input
                                            id="profile_last"
                                            type="text"
                                            on:input=move |ev| set_last_name.set(event_target_value(&ev))
                                            prop:value=last_name
                                            class="input input-bordered w-full"
                                        />
                                    </div>
                                </div>

                                <div class="grid grid-cols-2 gap-4">
                                    <div class="form-control">
                                        <label for="profile_email" class="label">
                                            <span class="label-text">"Email"</span>
                                        </label>
                                        <input
                                            id="profile_email"
                                            type="text"
                                            on:input=move |ev| set_email.set(event_target_value(&ev))
                                            prop:value=email
                                            class="input input-bordered w-full"
                                        />
                                    </div>
                                    <div class="form-control">
                                        <label for="profile_phone" class="label">
                                            <span class="label-text">"Phone"</span>
                                        </label>
                                        <input
                                            id="profile_phone"
                                            type="text"
                                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                                            prop:value=phone
                                            class="input input-bordered w-full"
                                        />
                                    </div>
                                </div>

                                <Show when=move || is_doctor.get()>
                                    <div class="divider">"Professional details"</div>
                                    <div class="grid grid-cols-2 gap-4">
                                        <div class="form-control">
                                            <label for="specialty" class="label">
                                                <span class="label-text">"Specialty"</span>
                                            </label>
                                            <input
                                                id="specialty"
                                                type="text"
                                                placeholder="Dermatology"
                                                on:input=move |ev| set_specialty.set(event_target_value(&ev))
                                                prop:value=specialty
                                                class="input input-bordered w-full"
                                            />
                                        </div>
                                        <div class="form-control">
                                            <label for="qualification" class="label">
                                                <span class="label-text">"Qualification"</span>
                                            </label>
                                            <input
                                                id="qualification"
                                                type="text"
                                                placeholder="MBBS, MD"
                                                on:input=move |ev| {
                                                    set_qualification.set(event_target_value(&ev))
                                                }
                                                prop:value=qualification
                                                class="input input-bordered w-full"
                                            />
                                        </div>
                                    </div>
                                    <div class="grid grid-cols-2 gap-4">
                                        <div class="form-control">
                                            <label for="council_id" class="label">
                                                <span class="label-text">"Council id"</span>
                                            </label>
                                            <input
                                                id="council_id"
                                                type="text"
                                                on:input=move |ev| set_council_id.set(event_target_value(&ev))
                                                prop:value=council_id
                                                class="input input-bordered w-full"
                                            />
                                        </div>
                                        <div class="form-control">
                                            <label for="registration_year" class="label">
                                                <span class="label-text">"Year of registration"</span>
                                            </label>
                                            <input
                                                id="registration_year"
                                                type="text"
                                                placeholder="2012"
                                                on:input=move |ev| {
                                                    set_registration_year.set(event_target_value(&ev))
                                                }
                                                prop:value=registration_year
                                                class="input input-bordered w-full"
                                            />
                                        </div>
                                    </div>
                                </Show>

                                <div class="form-control mt-4">
                                    <button
                                        type="submit"
                                        disabled=move || submitting.get()
                                        class="btn btn-primary"
                                    >
                                        {move || {
                                            if submitting.get() {
                                                view! {
                                                    <span class="loading loading-spinner"></span>
                                                    "Saving..."
                                                }
                                                    .into_any()
                                            } else {
                                                "Save changes".into_any()
                                            }
                                        }}
                                    </button>
                                </div>
                            </form>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
