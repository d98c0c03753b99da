//! Role administration: a form over (`roleGroupName`, `roleName`, `status`)
//! with per-field required checks. Persistence stays with the caller via the
//! submit callback.

use crate::api::use_api;
use crate::components::layout::PageHeader;
use crate::components::notice::{Notice, Snackbar};
use crate::validate::required;
use aptcare_shared::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Inline messages for the three tracked fields; empty string means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleFieldErrors {
    pub group: String,
    pub name: String,
    pub status: String,
}

impl RoleFieldErrors {
    pub fn validate(role: &Role) -> Self {
        Self {
            group: required("Role group", &role.role_group_name),
            name: required("Role name", &role.role_name),
            status: required("Status", &role.status),
        }
    }

    pub fn is_clear(&self) -> bool {
        self.group.is_empty() && self.name.is_empty() && self.status.is_empty()
    }
}

#[component]
pub fn RolesPage() -> impl IntoView {
    let api = use_api();
    let notice = RwSignal::new(Option::<Notice>::None);

    let on_save = Callback::new({
        let api = api.clone();
        move |role: Role| {
            let api = api.clone();
            spawn_local(async move {
                match api.save_role(role).await {
                    Ok(outcome) => {
                        let message = if outcome.message.is_empty() {
                            "Role saved".to_string()
                        } else {
                            outcome.message
                        };
                        notice.set(Some(Notice::success(message)));
                    }
                    Err(error) => {
                        notice.set(Some(Notice::error(format!("Could not save role: {}", error))));
                    }
                }
            });
        }
    });

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Snackbar notice=notice />
                <PageHeader />

                <div class="card bg-base-100 shadow-xl max-w-xl">
                    <div class="card-body">
                        <h3 class="card-title">"Roles"</h3>
                        <p class="text-base-content/70 text-sm">
                            "Define an access-control label for your organization."
                        </p>
                        <RoleForm on_save=on_save />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn RoleForm(#[prop(into)] on_save: Callback<Role>) -> impl IntoView {
    let (group, set_group) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (status, set_status) = signal(String::new());
    let (errors, set_errors) = signal(RoleFieldErrors::default());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let role = Role {
            role_group_name: group.get(),
            role_name: name.get(),
            status: status.get(),
        };
        let field_errors = RoleFieldErrors::validate(&role);
        if !field_errors.is_clear() {
            set_errors.set(field_errors);
            return;
        }
        set_errors.set(RoleFieldErrors::default());

        on_save.run(role);
        set_group.set(String::new());
        set_name.set(String::new());
        set_status.set(String::new());
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div class="form-control">
                <label for="role_group" class="label">
                    <span class="label-text">"Role group"</span>
                </label>
                <input
                    id="role_group"
                    type="text"
                    placeholder="Clinical"
                    on:input=move |ev| set_group.set(event_target_value(&ev))
                    prop:value=group
                    class="input input-bordered w-full"
                />
                <Show when=move || !errors.get().group.is_empty()>
                    <span class="label-text-alt text-error mt-1">
                        {move || errors.get().group}
                    </span>
                </Show>
            </div>

            <div class="form-control">
                <label for="role_name" class="label">
                    <span class="label-text">"Role name"</span>
                </label>
                <input
                    id="role_name"
                    type="text"
                    placeholder="Senior Nurse"
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    prop:value=name
                    class="input input-bordered w-full"
                />
                <Show when=move || !errors.get().name.is_empty()>
                    <span class="label-text-alt text-error mt-1">
                        {move || errors.get().name}
                    </span>
                </Show>
            </div>

            <div class="form-control">
                <label for="role_status" class="label">
                    <span class="label-text">"Status"</span>
                </label>
                <input
                    id="role_status"
                    type="text"
                    placeholder="active"
                    on:input=move |ev| set_status.set(event_target_value(&ev))
                    prop:value=status
                    class="input input-bordered w-full"
                />
                <Show when=move || !errors.get().status.is_empty()>
                    <span class="label-text-alt text-error mt-1">
                        {move || errors.get().status}
                    </span>
                </Show>
            </div>

            <div class="form-control mt-4">
                <button type="submit" class="btn btn-primary">
                    "Save role"
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::RoleFieldErrors;
    use aptcare_shared::Role;

    fn role(group: &str, name: &str, status: &str) -> Role {
        Role {
            role_group_name: group.to_string(),
            role_name: name.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn each_empty_field_gets_its_own_message() {
        let errors = RoleFieldErrors::validate(&role("", "  ", "\t"));
        assert_eq!(errors.group, "Role group is required");
        assert_eq!(errors.name, "Role name is required");
        assert_eq!(errors.status, "Status is required");
        assert!(!errors.is_clear());
    }

    #[test]
    fn filled_form_is_clear() {
        let errors = RoleFieldErrors::validate(&role("Clinical", "Nurse", "active"));
        assert!(errors.is_clear());
        assert_eq!(errors.group, "");
    }

    #[test]
    fn one_missing_field_blocks_submission() {
        let errors = RoleFieldErrors::validate(&role("Clinical", "", "active"));
        assert!(!errors.is_clear());
        assert_eq!(errors.name, "Role name is required");
        assert_eq!(errors.group, "");
        assert_eq!(errors.status, "");
    }
}
