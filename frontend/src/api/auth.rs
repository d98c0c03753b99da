use super::{ApiClient, ApiResult};
use aptcare_shared::{SignInRequest, SignInResponse};

impl ApiClient {
    /// Verify credentials against the backend; the caller stores the
    /// returned token and user in the session on success.
    pub async fn sign_in(&self, email: String, password: String) -> ApiResult<SignInResponse> {
        self.send(&SignInRequest { email, password }).await
    }
}
