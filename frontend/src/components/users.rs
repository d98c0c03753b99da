//! Team administration: org roster, registration, and a detail panel.
//!
//! The detail fetch is the one call site that deliberately absorbs failures
//! (`ok_or_logged`): a missing detail record degrades to "nothing selected"
//! instead of an error notice.

use crate::api::{ok_or_logged, use_api};
use crate::components::layout::{EmptyRow, PageHeader};
use crate::components::notice::{Notice, Snackbar};
use crate::session::use_session;
use crate::validate::required;
use aptcare_shared::{OrgUser, RegisterUserRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = use_session();
    let api = use_api();

    let (users, set_users) = signal(Vec::<OrgUser>::new());
    let (loading, set_loading) = signal(true);
    let (selected, set_selected) = signal(Option::<OrgUser>::None);
    let notice = RwSignal::new(Option::<Notice>::None);
    let register_open = RwSignal::new(false);

    let load = {
        let api = api.clone();
        move || {
            let Some(user) = session.current_user() else {
                return;
            };
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.org_users(user.org_id).await {
                    Ok(list) => set_users.set(list),
                    Err(error) => {
                        notice.set(Some(Notice::error(format!(
                            "Could not load team members: {}",
                            error
                        ))));
                    }
                }
                set_loading.set(false);
            });
        }
    };

    Effect::new({
        let load = load.clone();
        move |_| {
            if session.state.get().is_authenticated() {
                load();
            }
        }
    });

    let on_show_details = {
        let api = api.clone();
        move |org_user_id: i64| {
            let api = api.clone();
            spawn_local(async move {
                let details =
                    ok_or_logged("user details", api.user_details(org_user_id).await);
                set_selected.set(details);
            });
        }
    };

    let on_registered = Callback::new({
        let load = load.clone();
        move |message: String| {
            notice.set(Some(Notice::success(message)));
            load();
        }
    });

    let is_empty = move || users.with(|u| u.is_empty());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Snackbar notice=notice />
                <PageHeader />

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="flex items-center justify-between p-6 pb-2">
                            <div>
                                <h3 class="card-title">"Team"</h3>
                                <p class="text-base-content/70 text-sm">
                                    "Staff and doctors registered for your organization."
                                </p>
                            </div>
                            <div class="flex gap-2">
                                <button
                                    on:click={
                                        let load = load.clone();
                                        move |_| load()
                                    }
                                    disabled=move || loading.get()
                                    class="btn btn-ghost btn-sm"
                                >
                                    "Refresh"
                                </button>
                                <button
                                    on:click=move |_| register_open.set(true)
                                    class="btn btn-primary btn-sm"
                                >
                                    "Register member"
                                </button>
                            </div>
                        </div>

                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th class="hidden md:table-cell">"Email"</th>
                                        <th>"Role"</th>
                                        <th class="hidden md:table-cell">"Status"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || is_empty() && !loading.get()>
                                        <EmptyRow colspan="5" message="No team members yet." />
                                    </Show>
                                    <Show when=move || loading.get() && is_empty()>
                                        <EmptyRow colspan="5" message="Loading..." />
                                    </Show>
                                    <For
                                        each=move || users.get()
                                        key=|u| u.org_user_id
                                        children={
                                            let on_show_details = on_show_details.clone();
                                            move |user| {
                                                let on_show_details = on_show_details.clone();
                                                let detail_id = user.org_user_id;
                                                let is_doctor = user.is_doctor();
                                                let is_active = user.is_active();
                                                view! {
                                                    <tr>
                                                        <td class="font-bold">
                                                            {user.full_name()}
                                                            <Show when=move || is_doctor>
                                                                <span class="badge badge-accent badge-outline ml-2">
                                                                    "Doctor"
                                                                </span>
                                                            </Show>
                                                        </td>
                                                        <td class="hidden md:table-cell">{user.email.clone()}</td>
                                                        <td>{user.role_name.clone()}</td>
                                                        <td class="hidden md:table-cell">
                                                            <span class=if is_active {
                                                                "badge badge-success badge-outline"
                                                            } else {
                                                                "badge badge-ghost"
                                                            }>
                                                                {if is_active { "Active" } else { "Inactive" }}
                                                            </span>
                                                        </td>
                                                        <td>
                                                            <button
                                                                class="btn btn-ghost btn-xs"
                                                                on:click=move |_| on_show_details(detail_id)
                                                            >
                                                                "Details"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>

                <Show when=move || selected.get().is_some()>
                    <div class="card bg-base-100 shadow-xl max-w-xl">
                        <div class="card-body">
                            {move || {
                                selected
                                    .get()
                                    .map(|user| {
                                        view! {
                                            <h3 class="card-title">{user.full_name()}</h3>
                                            <div class="text-sm space-y-1">
                                                <p>{format!("Email: {}", user.email)}</p>
                                                <p>{format!("Phone: {}", user.phone)}</p>
                                                <p>{format!("Role: {}", user.role_name)}</p>
                                                <Show when={
                                                    let is_doctor = user.is_doctor();
                                                    move || is_doctor
                                                }>
                                                    <p>
                                                        {format!(
                                                            "Specialty: {}",
                                                            user.specialty.clone().unwrap_or_default(),
                                                        )}
                                                    </p>
                                                    <p>
                                                        {format!(
                                                            "Qualification: {}",
                                                            user.qualification.clone().unwrap_or_default(),
                                                        )}
                                                    </p>
                                                </Show>
                                            </div>
                                        }
                                    })
                            }}
                            <div class="card-actions justify-end">
                                <button
                                    class="btn btn-ghost btn-sm"
                                    on:click=move |_| set_selected.set(None)
                                >
                                    "Close"
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>

                <RegisterDialog open=register_open on_registered=on_registered />
            </div>
        </div>
    }
}

/// Registration dialog for new staff members.
#[component]
pub fn RegisterDialog(
    open: RwSignal<bool>,
    #[prop(into)] on_registered: Callback<String>,
) -> impl IntoView {
    let session = use_session();
    let api = use_api();

    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (role_name, set_role_name) = signal(String::new());
    let (is_doctor, set_is_doctor) = signal(false);
    let (first_error, set_first_error) = signal(String::new());
    let (email_error, set_email_error) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let reset_form = move || {
        set_first_name.set(String::new());
        set_last_name.set(String::new());
        set_email.set(String::new());
        set_phone.set(String::new());
        set_role_name.set(String::new());
        set_is_doctor.set(false);
        set_first_error.set(String::new());
        set_email_error.set(String::new());
        set_error_msg.set(None);
    };

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let first_msg = required("First name", &first_name.get());
            let email_msg = required("Email", &email.get());
            set_first_error.set(first_msg.clone());
            set_email_error.set(email_msg.clone());
            if !first_msg.is_empty() || !email_msg.is_empty() {
                return;
            }

            let Some(user) = session.current_user() else {
                return;
            };

            set_submitting.set(true);
            set_error_msg.set(None);

            let api = api.clone();
            let request = RegisterUserRequest {
                org_id: user.org_id,
                first_name: first_name.get_untracked(),
                last_name: last_name.get_untracked(),
                email: email.get_untracked(),
                phone: phone.get_untracked(),
                role_name: role_name.get_untracked(),
                is_doctor: i32::from(is_doctor.get_untracked()),
            };
            spawn_local(async move {
                match api.register_user(request).await {
                    Ok(outcome) => {
                        let message = if outcome.message.is_empty() {
                            "Member registered".to_string()
                        } else {
                            outcome.message
                        };
                        on_registered.run(message);
                        open.set(false);
                        reset_form();
                    }
                    Err(error) => {
                        set_error_msg.set(Some(error.to_string()));
                    }
                }
                set_submitting.set(false);
            });
        }
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"Register team member"</h3>

                <form on:submit=on_submit class="space-y-4">
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="first_name" class="label">
                                <span class="label-text">"First name"</span>
                            </label>
                            <input
                                id="first_name"
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
                            <label for="last_name" class="label">
                                <span class="label-text">"Last name"</span>
                            </label>
                            <input
                                id="last_name"
                                type="text"
                                on:input=move |ev| set_last_name.set(event_target_value(&ev))
                                prop:value=last_name
                                class="input input-bordered w-full"
                            />
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="member_email" class="label">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="member_email"
                                type="text"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered w-full"
                            />
                            <Show when=move || !email_error.get().is_empty()>
                                <span class="label-text-alt text-error mt-1">
                                    {move || email_error.get()}
                                </span>
                            </Show>
                        </div>
                        <div class="form-control">
                            <label for="member_phone" class="label">
                                <span class="label-text">"Phone"</span>
                            </label>
                            <input
                                id="member_phone"
                                type="text"
                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                                prop:value=phone
                                class="input input-bordered w-full"
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label for="member_role" class="label">
                            <span class="label-text">"Role"</span>
                        </label>
                        <input
                            id="member_role"
                            type="text"
                            placeholder="Receptionist"
                            on:input=move |ev| set_role_name.set(event_target_value(&ev))
                            prop:value=role_name
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="form-control">
                        <label class="label cursor-pointer">
                            <span class="label-text">"This member is a doctor"</span>
                            <input
                                type="checkbox"
                                class="toggle toggle-primary"
                                prop:checked=is_doctor
                                on:change=move |ev| set_is_doctor.set(event_target_checked(&ev))
                            />
                        </label>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || submitting.get() class="btn btn-primary">
                            {move || {
                                if submitting.get() {
                                    view! {
                                        <span class="loading loading-spinner"></span>
                                        "Registering..."
                                    }
                                        .into_any()
                                } else {
                                    "Register".into_any()
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
