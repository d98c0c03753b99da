use super::{ApiClient, ApiResult};
use aptcare_shared::{Role, SaveOutcome, SaveRoleRequest};

impl ApiClient {
    pub async fn save_role(&self, role: Role) -> ApiResult<SaveOutcome> {
        self.send(&SaveRoleRequest {
            role_group_name: role.role_group_name,
            role_name: role.role_name,
            status: role.status,
        })
        .await
    }
}
