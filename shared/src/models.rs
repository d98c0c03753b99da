//! Backend payload records.
//!
//! Field names follow the backend's camelCase JSON convention. The backend
//! frequently omits optional columns, so every record derives `Default` and
//! deserializes missing fields to their defaults. Boolean columns arrive as
//! integers (`0`/`1`) and are kept that way on the wire; helpers expose them
//! as `bool`.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A staff member or doctor belonging to an organization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrgUser {
    pub org_user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address_line: String,
    pub city: String,
    pub pincode: String,
    pub role_name: String,
    // Professional fields, only populated for doctors
    pub specialty: Option<String>,
    pub qualification: Option<String>,
    pub council_id: Option<String>,
    pub registration_year: Option<i32>,
    pub active_ind: i32,
    pub is_doctor: i32,
}

impl OrgUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn is_active(&self) -> bool {
        self.active_ind != 0
    }

    pub fn is_doctor(&self) -> bool {
        self.is_doctor != 0
    }
}

/// A clinic location.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Facility {
    pub facility_id: i64,
    pub org_id: i64,
    pub city_pincode_id: i64,
    pub facility_name: String,
    pub contact_phone: String,
    pub email: String,
    pub address_line: String,
    pub city: String,
    pub pincode: String,
    pub fee: f64,
    pub active_ind: i32,
    pub status: String,
}

impl Facility {
    pub fn is_active(&self) -> bool {
        self.active_ind != 0
    }
}

/// An access-control label edited through the role form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Role {
    pub role_group_name: String,
    pub role_name: String,
    pub status: String,
}

/// The identity subset persisted for the duration of a browser session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionUser {
    pub org_user_id: i64,
    pub org_id: i64,
    pub display_name: String,
    pub role_name: String,
}

/// Result of a discount-code check.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscountStatus {
    pub code: String,
    pub valid: bool,
    pub percent: f64,
    pub message: String,
}

/// Generic envelope returned by mutating endpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveOutcome {
    pub success: bool,
    pub message: String,
}

/// A bookable time range in the appointment dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentSlot {
    pub slot_id: u32,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub booked: bool,
}

impl AppointmentSlot {
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// Static slot grid used until the backend exposes real availability:
/// half-hour slots from 09:00 to 13:00, with two pre-booked.
pub fn demo_slots() -> Vec<AppointmentSlot> {
    let mut slots = Vec::with_capacity(8);
    for i in 0u32..8 {
        let minutes = 9 * 60 + i * 30;
        let start = NaiveTime::from_num_seconds_from_midnight_opt(minutes * 60, 0)
            .unwrap_or(NaiveTime::MIN);
        let end = NaiveTime::from_num_seconds_from_midnight_opt((minutes + 30) * 60, 0)
            .unwrap_or(NaiveTime::MIN);
        slots.push(AppointmentSlot {
            slot_id: i + 1,
            start,
            end,
            booked: matches!(i, 2 | 5),
        });
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn org_user_decodes_sparse_backend_row() {
        // Rows from /getorgusers often carry only the columns the list view needs.
        let row = r#"{"orgUserId": 7, "firstName": "A", "activeInd": 1, "isDoctor": 0}"#;
        let user: OrgUser = serde_json::from_str(row).unwrap();
        assert_eq!(user.org_user_id, 7);
        assert_eq!(user.first_name, "A");
        assert!(user.is_active());
        assert!(!user.is_doctor());
        assert_eq!(user.last_name, "");
        assert_eq!(user.specialty, None);
    }

    #[test]
    fn full_name_trims_missing_parts() {
        let user = OrgUser {
            first_name: "Asha".to_string(),
            ..OrgUser::default()
        };
        assert_eq!(user.full_name(), "Asha");
    }

    #[test]
    fn demo_slots_cover_morning_grid() {
        let slots = demo_slots();
        assert_eq!(slots.len(), 8);
        assert_eq!(slots[0].label(), "09:00 - 09:30");
        assert_eq!(slots.iter().filter(|s| s.booked).count(), 2);
        // Slot ids are unique and 1-based
        assert_eq!(slots[7].slot_id, 8);
    }
}
