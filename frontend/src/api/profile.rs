use super::{ApiClient, ApiResult};
use aptcare_shared::{AccountDetailsUpdate, SaveOutcome, EDIT_ACCOUNT_PATH};

impl ApiClient {
    /// `/editaccountdetails` is multipart on the backend side, unlike its
    /// JSON siblings.
    pub async fn edit_account_details(
        &self,
        update: AccountDetailsUpdate,
    ) -> ApiResult<SaveOutcome> {
        self.send_multipart(EDIT_ACCOUNT_PATH, &update.form_fields())
            .await
    }
}
