use super::{ApiClient, ApiResult};
use aptcare_shared::{CheckDiscountRequest, DiscountStatus};

impl ApiClient {
    pub async fn check_discount(&self, org_id: i64, code: String) -> ApiResult<DiscountStatus> {
        self.send(&CheckDiscountRequest { org_id, code }).await
    }
}
