//! User administration service: org roster, detail fetch, registration.

use super::{ApiClient, ApiResult};
use aptcare_shared::{
    GetOrgUsersRequest, GetUserDetailsRequest, OrgUser, RegisterUserRequest, SaveOutcome,
};

impl ApiClient {
    pub async fn org_users(&self, org_id: i64) -> ApiResult<Vec<OrgUser>> {
        self.send(&GetOrgUsersRequest { org_id }).await
    }

    pub async fn user_details(&self, org_user_id: i64) -> ApiResult<OrgUser> {
        self.send(&GetUserDetailsRequest { org_user_id }).await
    }

    pub async fn register_user(&self, request: RegisterUserRequest) -> ApiResult<SaveOutcome> {
        self.send(&request).await
    }
}
