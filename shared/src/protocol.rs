//! Typed request/response contract, one implementation per backend endpoint.
//!
//! The backend is POST-heavy: list fetches are POSTs carrying a small
//! context payload. Each request type states its path, method and response
//! shape once, so service code and tests never spell out untyped payloads.

use crate::models::{DiscountStatus, Facility, OrgUser, SaveOutcome, SessionUser};
use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Defines the request-response relationship and metadata for an endpoint.
pub trait ApiRequest: Serialize + DeserializeOwned {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// Relative URL path.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod = HttpMethod::Post;
}

// =========================================================
// Sign-in
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignInResponse {
    pub token: String,
    pub user: SessionUser,
}

impl ApiRequest for SignInRequest {
    type Response = SignInResponse;
    const PATH: &'static str = "/checklogin";
}

// =========================================================
// Facilities
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOwnFacilitiesRequest {
    pub org_id: i64,
}

impl ApiRequest for GetOwnFacilitiesRequest {
    type Response = Vec<Facility>;
    const PATH: &'static str = "/getownfacility";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFacilityDetailsRequest {
    pub facility_id: i64,
}

impl ApiRequest for GetFacilityDetailsRequest {
    type Response = Facility;
    const PATH: &'static str = "/getfacilitydetails";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddNewFacilityRequest {
    pub org_id: i64,
    pub facility_name: String,
    pub contact_phone: String,
    pub email: String,
    pub address_line: String,
    pub city: String,
    pub pincode: String,
    pub city_pincode_id: i64,
    pub fee: f64,
}

impl ApiRequest for AddNewFacilityRequest {
    type Response = SaveOutcome;
    const PATH: &'static str = "/addnewfacility";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditFacilityRequest {
    #[serde(flatten)]
    pub facility: Facility,
}

impl ApiRequest for EditFacilityRequest {
    type Response = SaveOutcome;
    const PATH: &'static str = "/editfacility";
}

// =========================================================
// Users and registration
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOrgUsersRequest {
    pub org_id: i64,
}

impl ApiRequest for GetOrgUsersRequest {
    type Response = Vec<OrgUser>;
    const PATH: &'static str = "/getorgusers";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserDetailsRequest {
    pub org_user_id: i64,
}

impl ApiRequest for GetUserDetailsRequest {
    type Response = OrgUser;
    const PATH: &'static str = "/getuserdetails";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub org_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role_name: String,
    pub is_doctor: i32,
}

impl ApiRequest for RegisterUserRequest {
    type Response = SaveOutcome;
    const PATH: &'static str = "/addorguser";
}

// =========================================================
// Roles
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRoleRequest {
    pub role_group_name: String,
    pub role_name: String,
    pub status: String,
}

impl ApiRequest for SaveRoleRequest {
    type Response = SaveOutcome;
    const PATH: &'static str = "/saverole";
}

// =========================================================
// Discounts
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckDiscountRequest {
    pub org_id: i64,
    pub code: String,
}

impl ApiRequest for CheckDiscountRequest {
    type Response = DiscountStatus;
    const PATH: &'static str = "/checkdiscount";
}

// =========================================================
// Bookings
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSlotsRequest {
    pub org_user_id: i64,
    pub facility_id: i64,
    pub date: NaiveDate,
    pub slot_ids: Vec<u32>,
}

impl ApiRequest for BookSlotsRequest {
    type Response = SaveOutcome;
    const PATH: &'static str = "/bookappointment";
}

// =========================================================
// Account details (multipart)
// =========================================================

/// `/editaccountdetails` is the one endpoint the backend accepts as
/// multipart form data rather than JSON, so it does not go through
/// [`ApiRequest`]. The field list is kept here so the form encoding stays
/// testable without a browser.
pub const EDIT_ACCOUNT_PATH: &str = "/editaccountdetails";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountDetailsUpdate {
    pub org_user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub specialty: String,
    pub qualification: String,
    pub council_id: String,
    pub registration_year: String,
}

impl AccountDetailsUpdate {
    /// Multipart field name/value pairs, in the order the backend reads them.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("orgUserId", self.org_user_id.to_string()),
            ("firstName", self.first_name.clone()),
            ("lastName", self.last_name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("specialty", self.specialty.clone()),
            ("qualification", self.qualification.clone()),
            ("councilId", self.council_id.clone()),
            ("registrationYear", self.registration_year.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_post_with_expected_paths() {
        assert_eq!(GetOwnFacilitiesRequest::PATH, "/getownfacility");
        assert_eq!(GetOrgUsersRequest::PATH, "/getorgusers");
        assert_eq!(AddNewFacilityRequest::PATH, "/addnewfacility");
        assert_eq!(SignInRequest::PATH, "/checklogin");
        assert_eq!(GetOrgUsersRequest::METHOD, HttpMethod::Post);
        assert_eq!(HttpMethod::Post.as_str(), "POST");
    }

    #[test]
    fn requests_serialize_camel_case() {
        let req = GetOrgUsersRequest { org_id: 1 };
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"orgId":1}"#);
    }

    #[test]
    fn edit_facility_flattens_record() {
        let req = EditFacilityRequest {
            facility: crate::models::Facility {
                facility_id: 3,
                facility_name: "Downtown".to_string(),
                ..Default::default()
            },
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["facilityId"], 3);
        assert_eq!(json["facilityName"], "Downtown");
    }

    #[test]
    fn account_update_form_fields_use_backend_names() {
        let update = AccountDetailsUpdate {
            org_user_id: 9,
            first_name: "Ira".to_string(),
            ..Default::default()
        };
        let fields = update.form_fields();
        assert_eq!(fields[0], ("orgUserId", "9".to_string()));
        assert_eq!(fields[1], ("firstName", "Ira".to_string()));
        assert_eq!(fields.len(), 9);
    }
}
