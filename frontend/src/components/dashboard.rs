//! Landing page: headline counts over the org's facilities and team, plus
//! the discount-code checker.

use crate::api::use_api;
use crate::components::layout::PageHeader;
use crate::components::notice::{Notice, Snackbar};
use crate::session::use_session;
use crate::validate::required;
use aptcare_shared::{DiscountStatus, Facility, OrgUser};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// The landing table shows at most the five most recently returned rows.
fn recent_facilities(facilities: &[Facility]) -> Vec<Facility> {
    facilities.iter().take(5).cloned().collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let api = use_api();

    let (facilities, set_facilities) = signal(Vec::<Facility>::new());
    let (users, set_users) = signal(Vec::<OrgUser>::new());
    let (loading, set_loading) = signal(true);
    let notice = RwSignal::new(Option::<Notice>::None);

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

    // Initial load once the session is ready.
    Effect::new({
        let load = load.clone();
        move |_| {
            if session.state.get().is_authenticated() {
                load();
            }
        }
    });

    let facility_count = move || facilities.with(|f| f.len());
    let active_facilities = move || facilities.with(|f| f.iter().filter(|x| x.is_active()).count());
    let team_count = move || users.with(|u| u.len());
    let doctor_count = move || users.with(|u| u.iter().filter(|x| x.is_doctor()).count());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Snackbar notice=notice />
                <PageHeader />

                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <div class="stat">
                        <div class="stat-title">"Facilities"</div>
                        <div class="stat-value text-primary">{facility_count}</div>
                        <div class="stat-desc">{move || format!("{} active", active_facilities())}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Team members"</div>
                        <div class="stat-value text-secondary">{team_count}</div>
                        <div class="stat-desc">{move || format!("{} doctors", doctor_count())}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Status"</div>
                        <div class="stat-value text-success text-2xl">
                            {move || if loading.get() { "Loading" } else { "Up to date" }}
                        </div>
                        <div class="stat-desc">
                            <button
                                class="btn btn-ghost btn-xs"
                                disabled=move || loading.get()
                                on:click={
                                    let load = load.clone();
                                    move |_| load()
                                }
                            >
                                "Refresh"
                            </button>
                        </div>
                    </div>
                </div>

                <DiscountCheckCard />

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">"Recently updated facilities"</h3>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Facility"</th>
                                        <th>"City"</th>
                                        <th class="hidden md:table-cell">"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || facilities.with(|f| recent_facilities(f))
                                        key=|f| f.facility_id
                                        children=move |facility| {
                                            view! {
                                                <tr>
                                                    <td class="font-bold">{facility.facility_name}</td>
                                                    <td>{facility.city}</td>
                                                    <td class="hidden md:table-cell">
                                                        <span class="badge badge-outline">{facility.status}</span>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Checks a discount code against the backend and shows the verdict inline.
#[component]
fn DiscountCheckCard() -> impl IntoView {
    let session = use_session();
    let api = use_api();

    let (code, set_code) = signal(String::new());
    let (code_error, set_code_error) = signal(String::new());
    let (checking, set_checking) = signal(false);
    let (status, set_status) = signal(Option::<DiscountStatus>::None);
    let (check_error, set_check_error) = signal(Option::<String>::None);

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let code_msg = required("Discount code", &code.get());
            set_code_error.set(code_msg.clone());
            if !code_msg.is_empty() {
                return;
            }
            let Some(user) = session.current_user() else {
                return;
            };

            set_checking.set(true);
            set_status.set(None);
            set_check_error.set(None);

            let api = api.clone();
            spawn_local(async move {
                match api.check_discount(user.org_id, code.get_untracked()).await {
                    Ok(result) => set_status.set(Some(result)),
                    Err(error) => set_check_error.set(Some(error.to_string())),
                }
                set_checking.set(false);
            });
        }
    };

    view! {
        <div class="card bg-base-100 shadow-xl max-w-xl">
            <div class="card-body">
                <h3 class="card-title">"Check a discount code"</h3>
                <form on:submit=on_submit class="flex items-end gap-2">
                    <div class="form-control grow">
                        <input
                            type="text"
                            placeholder="WELLNESS10"
                            on:input=move |ev| set_code.set(event_target_value(&ev))
                            prop:value=code
                            class="input input-bordered w-full"
                        />
                        <Show when=move || !code_error.get().is_empty()>
                            <span class="label-text-alt text-error mt-1">
                                {move || code_error.get()}
                            </span>
                        </Show>
                    </div>
                    <button type="submit" disabled=move || checking.get() class="btn btn-secondary">
                        "Check"
                    </button>
                </form>
                <Show when=move || status.get().is_some()>
                    {move || {
                        status
                            .get()
                            .map(|s| {
                                if s.valid {
                                    view! {
                                        <div class="alert alert-success text-sm py-2">
                                            <span>
                                                {format!("{} is valid: {:.0}% off", s.code, s.percent)}
                                            </span>
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="alert alert-warning text-sm py-2">
                                            <span>
                                                {if s.message.is_empty() {
                                                    format!("{} is not valid", s.code)
                                                } else {
                                                    s.message
                                                }}
                                            </span>
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Show>
                <Show when=move || check_error.get().is_some()>
                    <div class="alert alert-error text-sm py-2">
                        <span>{move || check_error.get().unwrap_or_default()}</span>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::recent_facilities;
    use aptcare_shared::Facility;

    fn facility(id: i64) -> Facility {
        Facility {
            facility_id: id,
            facility_name: format!("Clinic {}", id),
            ..Facility::default()
        }
    }

    #[test]
    fn recent_list_caps_at_five_rows() {
        let all: Vec<Facility> = (1..=8).map(facility).collect();
        let recent = recent_facilities(&all);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].facility_id, 1);
        assert_eq!(recent[4].facility_id, 5);
    }

    #[test]
    fn short_lists_pass_through_unchanged() {
        let all: Vec<Facility> = (1..=2).map(facility).collect();
        assert_eq!(recent_facilities(&all), all);
    }
}
