//! HTTP client wrapper and per-resource service modules.
//!
//! Every round trip goes through [`ApiClient::send`]: build the URL from the
//! configured base address, attach the session token verbatim in the
//! `auth-token` header when present, POST the JSON payload, and decode the
//! response. Request preparation and response completion are pure functions
//! ([`prepare`], [`finish`]) so the whole pipeline short of the fetch itself
//! runs in native unit tests.
//!
//! A 401 is handled centrally: stored credentials are cleared and the
//! injected `on_session_expired` callback fires once; the transport never
//! navigates. All services surface failures as [`ApiResult`]; the only
//! sanctioned way to absorb one is the explicit [`ok_or_logged`] adapter.

mod auth;
mod bookings;
mod discounts;
mod facilities;
mod profile;
mod roles;
mod users;

use aptcare_shared::{
    ApiRequest, HttpMethod, SaveOutcome, HEADER_AUTH_TOKEN, STORAGE_TOKEN_KEY, STORAGE_USER_KEY,
};
use gloo_net::http::Request;
use gloo_storage::{LocalStorage, SessionStorage, Storage};
use leptos::prelude::*;
use serde::de::DeserializeOwned;

// =========================================================
// Errors
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure: DNS, connection, CORS.
    Network(String),
    /// Backend answered with a non-2xx status other than 401.
    Http { status: u16, message: String },
    /// The body could not be encoded or decoded.
    Decode(String),
    /// Backend signalled 401; the session has been cleared.
    SessionExpired,
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Http { status, message } => {
                write!(f, "server returned {}: {}", status, message)
            }
            ApiError::Decode(msg) => write!(f, "unexpected response shape: {}", msg),
            ApiError::SessionExpired => write!(f, "session expired, sign in again"),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

fn log_error(context: &str, error: &ApiError) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&format!("[api] {}: {}", context, error).into());

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::io::Write;
        let _ = writeln!(std::io::stderr(), "[api] {}: {}", context, error);
    }
}

/// Deliberate "absorb and degrade" adapter: logs the failure and substitutes
/// `None` so a list view can render empty instead of erroring. Callers opt
/// in at the call site; services themselves always rethrow.
pub fn ok_or_logged<T>(context: &str, result: ApiResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            log_error(context, &error);
            None
        }
    }
}

// =========================================================
// Pure request/response pipeline
// =========================================================

/// Everything about a request except the fetch itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

fn join_url(base_url: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base_url, path)
    } else {
        format!("{}/{}", base_url, path)
    }
}

/// Build the outgoing request. The token, when present, is attached exactly
/// as stored; when absent the header is omitted entirely.
pub fn prepare<R: ApiRequest>(
    base_url: &str,
    token: Option<&str>,
    request: &R,
) -> ApiResult<PreparedRequest> {
    let mut headers = Vec::new();
    if let Some(token) = token {
        headers.push((HEADER_AUTH_TOKEN.to_string(), token.to_string()));
    }
    let body = match R::METHOD {
        HttpMethod::Get => None,
        HttpMethod::Post => {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
            Some(serde_json::to_string(request).map_err(|e| ApiError::Decode(e.to_string()))?)
        }
    };
    Ok(PreparedRequest {
        method: R::METHOD,
        url: join_url(base_url, R::PATH),
        headers,
        body,
    })
}

/// Classify the response and decode the body. 401 maps to
/// [`ApiError::SessionExpired`]; other non-2xx statuses carry the raw body
/// as the message.
pub fn finish<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    if status == 401 {
        return Err(ApiError::SessionExpired);
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::Http {
            status,
            message: body.chars().take(200).collect(),
        });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

// =========================================================
// Client
// =========================================================

/// Shared request object. The token signal and the session-expired callback
/// are injected, so the client owns no session policy of its own.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Signal<Option<String>>,
    on_session_expired: Callback<()>,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        token: Signal<Option<String>>,
        on_session_expired: Callback<()>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            on_session_expired,
        }
    }

    pub(crate) async fn send<R: ApiRequest>(&self, request: &R) -> ApiResult<R::Response> {
        let token = self.token.get_untracked();
        let prepared = prepare(&self.base_url, token.as_deref(), request)?;

        let mut builder = match prepared.method {
            HttpMethod::Get => Request::get(&prepared.url),
            HttpMethod::Post => Request::post(&prepared.url),
        };
        for (key, value) in &prepared.headers {
            builder = builder.header(key, value);
        }
        let request = match prepared.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        self.complete(status, &body)
    }

    /// Multipart variant for the one endpoint that takes form data. The
    /// browser supplies the content type and boundary.
    pub(crate) async fn send_multipart(
        &self,
        path: &str,
        fields: &[(&'static str, String)],
    ) -> ApiResult<SaveOutcome> {
        let form = web_sys::FormData::new()
            .map_err(|e| ApiError::Network(format!("form data unavailable: {:?}", e)))?;
        for (key, value) in fields {
            form.append_with_str(key, value)
                .map_err(|e| ApiError::Network(format!("form field rejected: {:?}", e)))?;
        }

        let mut builder = Request::post(&join_url(&self.base_url, path));
        if let Some(token) = self.token.get_untracked() {
            builder = builder.header(HEADER_AUTH_TOKEN, &token);
        }
        let request = builder
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        self.complete(status, &body)
    }

    fn complete<T: DeserializeOwned>(&self, status: u16, body: &str) -> ApiResult<T> {
        let result = finish(status, body);
        if matches!(result, Err(ApiError::SessionExpired)) {
            self.expire_session();
        }
        result
    }

    /// 401 cleanup: drop stored credentials, then notify the host exactly
    /// once for this response. The host decides what navigation follows.
    fn expire_session(&self) {
        LocalStorage::delete(STORAGE_TOKEN_KEY);
        SessionStorage::delete(STORAGE_USER_KEY);
        self.on_session_expired.run(());
    }
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use aptcare_shared::{GetOrgUsersRequest, GetUserDetailsRequest, OrgUser};

    #[test]
    fn prepare_attaches_exact_token_when_present() {
        let request = GetOrgUsersRequest { org_id: 1 };
        let prepared = prepare("http://localhost:3000", Some("tok-123"), &request).unwrap();
        assert_eq!(prepared.url, "http://localhost:3000/getorgusers");
        assert!(prepared
            .headers
            .contains(&("auth-token".to_string(), "tok-123".to_string())));
        assert_eq!(prepared.body.as_deref(), Some(r#"{"orgId":1}"#));
    }

    #[test]
    fn prepare_omits_header_when_token_absent() {
        let request = GetOrgUsersRequest { org_id: 1 };
        let prepared = prepare("http://localhost:3000", None, &request).unwrap();
        assert!(prepared.headers.iter().all(|(k, _)| k != "auth-token"));
    }

    #[test]
    fn finish_maps_401_to_session_expired() {
        let result: ApiResult<OrgUser> = finish(401, "unauthorized");
        assert_eq!(result, Err(ApiError::SessionExpired));
    }

    #[test]
    fn finish_maps_other_failures_to_http() {
        let result: ApiResult<OrgUser> = finish(500, "boom");
        assert_eq!(
            result,
            Err(ApiError::Http {
                status: 500,
                message: "boom".to_string()
            })
        );
    }

    #[test]
    fn echoed_payload_decodes_unmodified() {
        // Sanity check that no transformation is silently applied: a backend
        // that echoes the posted payload yields a deep-equal value.
        let request = GetUserDetailsRequest { org_user_id: 7 };
        let prepared = prepare("http://localhost:3000", None, &request).unwrap();
        let echoed: serde_json::Value = finish(200, prepared.body.as_deref().unwrap()).unwrap();
        assert_eq!(echoed, serde_json::to_value(&request).unwrap());
    }

    #[test]
    fn org_users_stub_row_decodes_exactly() {
        let body = r#"[{"orgUserId": 7, "firstName": "A", "activeInd": 1, "isDoctor": 0}]"#;
        let users: Vec<OrgUser> = finish(200, body).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].org_user_id, 7);
        assert_eq!(users[0].first_name, "A");
        assert_eq!(users[0].active_ind, 1);
        assert_eq!(users[0].is_doctor, 0);
    }

    #[test]
    fn absorb_adapter_turns_500_into_none() {
        let result: ApiResult<OrgUser> = finish(500, "");
        assert_eq!(ok_or_logged("user details", result), None);
    }

    #[test]
    fn error_messages_are_truncated() {
        let long = "x".repeat(500);
        let result: ApiResult<OrgUser> = finish(502, &long);
        match result {
            Err(ApiError::Http { status, message }) => {
                assert_eq!(status, 502);
                assert_eq!(message.len(), 200);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
