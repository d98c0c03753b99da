//! Facility service: list, detail fetch, create and edit. One round trip
//! per call, refresh is the caller's concern.

use super::{ApiClient, ApiResult};
use aptcare_shared::{
    AddNewFacilityRequest, EditFacilityRequest, Facility, GetFacilityDetailsRequest,
    GetOwnFacilitiesRequest, SaveOutcome,
};

impl ApiClient {
    pub async fn own_facilities(&self, org_id: i64) -> ApiResult<Vec<Facility>> {
        self.send(&GetOwnFacilitiesRequest { org_id }).await
    }

    pub async fn facility_details(&self, facility_id: i64) -> ApiResult<Facility> {
        self.send(&GetFacilityDetailsRequest { facility_id }).await
    }

    pub async fn add_facility(&self, request: AddNewFacilityRequest) -> ApiResult<SaveOutcome> {
        self.send(&request).await
    }

    pub async fn edit_facility(&self, facility: Facility) -> ApiResult<SaveOutcome> {
        self.send(&EditFacilityRequest { facility }).await
    }
}
