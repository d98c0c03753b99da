//! Appointment booking dialog.
//!
//! Slot availability is still the static demo grid; the selection lives
//! only in the dialog until "Book" is confirmed, then goes to the backend
//! through the typed protocol.

use crate::api::use_api;
use crate::session::use_session;
use aptcare_shared::{demo_slots, AppointmentSlot, BookSlotsRequest, Facility};
use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeSet;

/// Which slots the user has toggled. Booked slots are inert: toggling one
/// never changes the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotSelection {
    selected: BTreeSet<u32>,
}

impl SlotSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the slot is selected after the call.
    pub fn toggle(&mut self, slot: &AppointmentSlot) -> bool {
        if slot.booked {
            return false;
        }
        if self.selected.remove(&slot.slot_id) {
            false
        } else {
            self.selected.insert(slot.slot_id);
            true
        }
    }

    pub fn contains(&self, slot_id: u32) -> bool {
        self.selected.contains(&slot_id)
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn slot_ids(&self) -> Vec<u32> {
        self.selected.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

#[component]
pub fn BookingDialog(
    open: RwSignal<bool>,
    facility: RwSignal<Option<Facility>>,
    #[prop(into)] on_booked: Callback<String>,
) -> impl IntoView {
    let session = use_session();
    let api = use_api();

    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let slots = StoredValue::new(demo_slots());
    let selection = RwSignal::new(SlotSelection::new());
    let (date, set_date) = signal(String::new());
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

    // Selection does not survive closing the dialog.
    Effect::new(move |_| {
        if !open.get() {
            selection.update(SlotSelection::clear);
            set_error_msg.set(None);
            set_date.set(String::new());
        }
    });

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let Some(user) = session.current_user() else {
                return;
            };
            let Some(target) = facility.get_untracked() else {
                return;
            };
            let Ok(date) = NaiveDate::parse_from_str(&date.get(), "%Y-%m-%d") else {
                set_error_msg.set(Some("Pick a date for the appointment".to_string()));
                return;
            };
            let slot_ids = selection.with_untracked(SlotSelection::slot_ids);
            if slot_ids.is_empty() {
                set_error_msg.set(Some("Select at least one slot".to_string()));
                return;
            }

            set_submitting.set(true);
            set_error_msg.set(None);

            let api = api.clone();
            let request = BookSlotsRequest {
                org_user_id: user.org_user_id,
                facility_id: target.facility_id,
                date,
                slot_ids,
            };
            spawn_local(async move {
                match api.book_slots(request).await {
                    Ok(outcome) => {
                        let message = if outcome.message.is_empty() {
                            "Appointment booked".to_string()
                        } else {
                            outcome.message
                        };
                        on_booked.run(message);
                        open.set(false);
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
                <h3 class="font-bold text-lg">
                    {move || {
                        facility
                            .get()
                            .map(|f| format!("Book at {}", f.facility_name))
                            .unwrap_or_else(|| "Book appointment".to_string())
                    }}
                </h3>
                <p class="py-2 text-base-content/70">
                    "Pick a date and one or more open slots."
                </p>

                <form on:submit=on_submit class="space-y-4">
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="form-control">
                        <label for="booking_date" class="label">
                            <span class="label-text">"Date"</span>
                        </label>
                        <input
                            id="booking_date"
                            type="date"
                            on:input=move |ev| set_date.set(event_target_value(&ev))
                            prop:value=date
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="grid grid-cols-2 md:grid-cols-4 gap-2">
                        <For
                            each=move || slots.get_value()
                            key=|slot| slot.slot_id
                            children=move |slot| {
                                let slot_id = slot.slot_id;
                                let label = slot.label();
                                let booked = slot.booked;
                                let toggle_slot = slot.clone();
                                view! {
                                    <button
                                        type="button"
                                        disabled=booked
                                        class=move || {
                                            if booked {
                                                "btn btn-sm btn-disabled"
                                            } else if selection.with(|s| s.contains(slot_id)) {
                                                "btn btn-sm btn-primary"
                                            } else {
                                                "btn btn-sm btn-outline"
                                            }
                                        }
                                        on:click=move |_| {
                                            selection.update(|s| {
                                                s.toggle(&toggle_slot);
                                            });
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            }
                        />
                    </div>

                    <div class="text-sm text-base-content/70">
                        {move || format!("{} slot(s) selected", selection.with(SlotSelection::count))}
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || submitting.get() class="btn btn-primary">
                            {move || {
                                if submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Booking..." }
                                        .into_any()
                                } else {
                                    "Book".into_any()
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

#[cfg(test)]
mod tests {
    use super::SlotSelection;
    use aptcare_shared::demo_slots;

    #[test]
    fn double_toggle_restores_selection_count() {
        let slots = demo_slots();
        let open_slot = slots.iter().find(|s| !s.booked).unwrap();
        let mut selection = SlotSelection::new();

        let before = selection.count();
        assert!(selection.toggle(open_slot));
        assert_eq!(selection.count(), before + 1);
        assert!(!selection.toggle(open_slot));
        assert_eq!(selection.count(), before);
    }

    #[test]
    fn booked_slots_are_inert() {
        let slots = demo_slots();
        let booked_slot = slots.iter().find(|s| s.booked).unwrap();
        let mut selection = SlotSelection::new();

        assert!(!selection.toggle(booked_slot));
        assert_eq!(selection.count(), 0);
        assert!(!selection.contains(booked_slot.slot_id));
    }

    #[test]
    fn slot_ids_are_sorted_and_deduplicated() {
        let slots = demo_slots();
        let mut selection = SlotSelection::new();
        for slot in slots.iter().filter(|s| !s.booked).take(3) {
            selection.toggle(slot);
        }
        let ids = selection.slot_ids();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }
}
