use super::{ApiClient, ApiResult};
use aptcare_shared::{BookSlotsRequest, SaveOutcome};

impl ApiClient {
    pub async fn book_slots(&self, request: BookSlotsRequest) -> ApiResult<SaveOutcome> {
        self.send(&request).await
    }
}
