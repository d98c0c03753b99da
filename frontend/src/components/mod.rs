//! UI component layer: pages, dialogs, and shared chrome.

pub mod booking_dialog;
pub mod dashboard;
pub mod facilities;
pub mod facility_form;
pub mod guard;
pub mod layout;
pub mod notice;
pub mod profile;
pub mod role_form;
pub mod signin;
pub mod users;
