//! Transient snackbar notices.
//!
//! Non-fatal failures (and mutation confirmations) surface here: the notice
//! auto-expires after a few seconds and can be dismissed early. Replacing a
//! notice drops the previous timer so an old expiry cannot clear a new
//! message.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const NOTICE_LIFETIME_MS: u32 = 4_000;

#[derive(Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub is_error: bool,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

#[component]
pub fn Snackbar(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    // Timeout handles are !Send, so the slot is owner-local.
    let pending = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        if notice.get().is_some() {
            let timer = Timeout::new(NOTICE_LIFETIME_MS, move || notice.set(None));
            // Dropping the previous handle cancels its timer.
            pending.set_value(Some(timer));
        } else {
            pending.set_value(None);
        }
    });

    view! {
        <Show when=move || notice.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    if notice.get().map(|n| n.is_error).unwrap_or(false) {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || notice.get().map(|n| n.message).unwrap_or_default()}</span>
                    <button class="btn btn-ghost btn-xs" on:click=move |_| notice.set(None)>
                        "✕"
                    </button>
                </div>
            </div>
        </Show>
    }
}
