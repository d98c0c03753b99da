//! Facility management page: list, create, edit, and appointment booking.

use crate::api::use_api;
use crate::components::booking_dialog::BookingDialog;
use crate::components::facility_form::FacilityFormState;
use crate::components::layout::{EmptyRow, PageHeader};
use crate::components::notice::{Notice, Snackbar};
use crate::session::use_session;
use crate::validate::required;
use aptcare_shared::Facility;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn FacilitiesPage() -> impl IntoView {
    let session = use_session();
    let api = use_api();

    let (facilities, set_facilities) = signal(Vec::<Facility>::new());
    let (loading, set_loading) = signal(true);
    let notice = RwSignal::new(Option::<Notice>::None);

    let form = FacilityFormState::new();
    let dialog_open = RwSignal::new(false);

    let booking_facility = RwSignal::new(Option::<Facility>::None);
    let booking_open = RwSignal::new(false);

    let load = {
        let api = api.clone();
        move || {
            let Some(user) = session.current_user() else {
                return;
            };
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.own_facilities(user.org_id).await {
                    Ok(list) => set_facilities.set(list),
                    Err(error) => {
                        notice.set(Some(Notice::error(format!(
                            "Could not load facilities: {}",
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

    let on_add = move |_| {
        form.reset();
        dialog_open.set(true);
    };

    let on_edit = {
        let api = api.clone();
        move |facility_id: i64| {
            let api = api.clone();
            spawn_local(async move {
                match api.facility_details(facility_id).await {
                    Ok(facility) => {
                        form.load(&facility);
                        dialog_open.set(true);
                    }
                    Err(error) => {
                        notice.set(Some(Notice::error(format!(
                            "Could not load facility: {}",
                            error
                        ))));
                    }
                }
            });
        }
    };

    // Refresh after a successful mutation is the only consistency mechanism:
    // no incremental updates.
    let on_save = Callback::new({
        let api = api.clone();
        let load = load.clone();
        move |()| {
            let Some(user) = session.current_user() else {
                return;
            };
            let api = api.clone();
            let load = load.clone();
            let editing = form.is_edit();
            spawn_local(async move {
                let result = if editing {
                    api.edit_facility(form.to_facility(user.org_id)).await
                } else {
                    api.add_facility(form.to_add_request(user.org_id)).await
                };
                match result {
                    Ok(outcome) => {
                        let message = if outcome.message.is_empty() {
                            "Facility saved".to_string()
                        } else {
                            outcome.message
                        };
                        notice.set(Some(Notice::success(message)));
                        load();
                    }
                    Err(error) => {
                        notice.set(Some(Notice::error(format!(
                            "Could not save facility: {}",
                            error
                        ))));
                    }
                }
            });
        }
    });

    let on_booked = Callback::new(move |message: String| {
        notice.set(Some(Notice::success(message)));
    });

    let is_empty = move || facilities.with(|f| f.is_empty());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Snackbar notice=notice />
                <PageHeader />

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="flex items-center justify-between p-6 pb-2">
                            <div>
                                <h3 class="card-title">"Facilities"</h3>
                                <p class="text-base-content/70 text-sm">
                                    "Clinics and locations for your organization."
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
                                <button on:click=on_add class="btn btn-primary btn-sm">
                                    "Add facility"
                                </button>
                            </div>
                        </div>

                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Facility"</th>
                                        <th>"City"</th>
                                        <th class="hidden md:table-cell">"Fee"</th>
                                        <th class="hidden md:table-cell">"Status"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || is_empty() && !loading.get()>
                                        <EmptyRow
                                            colspan="5"
                                            message="No facilities yet. Add one to get started."
                                        />
                                    </Show>
                                    <Show when=move || loading.get() && is_empty()>
                                        <EmptyRow colspan="5" message="Loading..." />
                                    </Show>
                                    <For
                                        each=move || facilities.get()
                                        key=|f| f.facility_id
                                        children={
                                            let on_edit = on_edit.clone();
                                            move |facility| {
                                                let on_edit = on_edit.clone();
                                                let edit_id = facility.facility_id;
                                                let book_target = facility.clone();
                                                view! {
                                                    <tr>
                                                        <td class="font-bold">{facility.facility_name.clone()}</td>
                                                        <td>{facility.city.clone()}</td>
                                                        <td class="hidden md:table-cell">
                                                            {format!("{:.2}", facility.fee)}
                                                        </td>
                                                        <td class="hidden md:table-cell">
                                                            <span class=if facility.is_active() {
                                                                "badge badge-success badge-outline"
                                                            } else {
                                                                "badge badge-ghost"
                                                            }>
                                                                {facility.status.clone()}
                                                            </span>
                                                        </td>
                                                        <td class="flex gap-1">
                                                            <button
                                                                class="btn btn-ghost btn-xs"
                                                                on:click=move |_| on_edit(edit_id)
                                                            >
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                class="btn btn-ghost btn-xs"
                                                                on:click=move |_| {
                                                                    booking_facility.set(Some(book_target.clone()));
                                                                    booking_open.set(true);
                                                                }
                                                            >
                                                                "Book"
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

                <FacilityDialog state=form open=dialog_open on_save=on_save />
                <BookingDialog open=booking_open facility=booking_facility on_booked=on_booked />
            </div>
        </div>
    }
}

/// Create/edit dialog. Validates the two required fields inline, then hands
/// the submit back to the page and closes.
#[component]
pub fn FacilityDialog(
    state: FacilityFormState,
    open: RwSignal<bool>,
    #[prop(into)] on_save: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let (name_error, set_name_error) = signal(String::new());
    let (phone_error, set_phone_error) = signal(String::new());

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

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let name_msg = required("Facility name", &state.facility_name.get());
        let phone_msg = required("Contact phone", &state.contact_phone.get());
        set_name_error.set(name_msg.clone());
        set_phone_error.set(phone_msg.clone());
        if !name_msg.is_empty() || !phone_msg.is_empty() {
            return;
        }

        on_save.run(());
        open.set(false);
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">
                    {move || if state.is_edit() { "Edit facility" } else { "Add facility" }}
                </h3>

                <form on:submit=on_submit class="space-y-4">
                    <div class="form-control">
                        <label for="facility_name" class="label">
                            <span class="label-text">"Facility name"</span>
                        </label>
                        <input
                            id="facility_name"
                            type="text"
                            placeholder="Riverside Clinic"
                            on:input=move |ev| state.facility_name.set(event_target_value(&ev))
                            prop:value=state.facility_name
                            class="input input-bordered w-full"
                        />
                        <Show when=move || !name_error.get().is_empty()>
                            <span class="label-text-alt text-error mt-1">
                                {move || name_error.get()}
                            </span>
                        </Show>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="contact_phone" class="label">
                                <span class="label-text">"Contact phone"</span>
                            </label>
                            <input
                                id="contact_phone"
                                type="text"
                                placeholder="+91 98765 43210"
                                on:input=move |ev| state.contact_phone.set(event_target_value(&ev))
                                prop:value=state.contact_phone
                                class="input input-bordered w-full"
                            />
                            <Show when=move || !phone_error.get().is_empty()>
                                <span class="label-text-alt text-error mt-1">
                                    {move || phone_error.get()}
                                </span>
                            </Show>
                        </div>
                        <div class="form-control">
                            <label for="facility_email" class="label">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="facility_email"
                                type="text"
                                placeholder="clinic@example.com"
                                on:input=move |ev| state.email.set(event_target_value(&ev))
                                prop:value=state.email
                                class="input input-bordered w-full"
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label for="address_line" class="label">
                            <span class="label-text">"Address"</span>
                        </label>
                        <input
                            id="address_line"
                            type="text"
                            on:input=move |ev| state.address_line.set(event_target_value(&ev))
                            prop:value=state.address_line
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="city" class="label">
                                <span class="label-text">"City"</span>
                            </label>
                            <input
                                id="city"
                                type="text"
                                on:input=move |ev| state.city.set(event_target_value(&ev))
                                prop:value=state.city
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label for="pincode" class="label">
                                <span class="label-text">"Pincode"</span>
                            </label>
                            <input
                                id="pincode"
                                type="text"
                                on:input=move |ev| state.pincode.set(event_target_value(&ev))
                                prop:value=state.pincode
                                class="input input-bordered w-full"
                            />
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="fee" class="label">
                                <span class="label-text">"Consultation fee"</span>
                            </label>
                            <input
                                id="fee"
                                type="number"
                                min="0"
                                step="0.01"
                                class="input input-bordered w-full"
                                prop:value=move || state.fee.get().to_string()
                                on:input=move |ev| {
                                    if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                                        state.fee.set(value);
                                    }
                                }
                            />
                        </div>
                        <div class="form-control">
                            <label class="label cursor-pointer mt-8">
                                <span class="label-text">"Active"</span>
                                <input
                                    type="checkbox"
                                    class="toggle toggle-primary"
                                    prop:checked=state.active
                                    on:change=move |ev| state.active.set(event_target_checked(&ev))
                                />
                            </label>
                        </div>
                    </div>

                    <div class="form-control">
                        <label for="status" class="label">
                            <span class="label-text">"Status note"</span>
                        </label>
                        <input
                            id="status"
                            type="text"
                            placeholder="Open for walk-ins"
                            on:input=move |ev| state.status.set(event_target_value(&ev))
                            prop:value=state.status
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">
                            {move || if state.is_edit() { "Save changes" } else { "Add facility" }}
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
