//! Shared blocking HTTP plumbing for the providers.

use std::time::Duration;

use helpdesk_core::errors::{HelpdeskResult, ProviderError};
use reqwest::blocking::{Client, Response};

/// Build a blocking client with the given request timeout.
pub(crate) fn build_client(provider: &str, timeout: Duration) -> HelpdeskResult<Client> {
    Client::builder().timeout(timeout).build().map_err(|e| {
        ProviderError::RequestFailed {
            provider: provider.to_string(),
            reason: format!("client build error: {e}"),
        }
        .into()
    })
}

/// Turn a transport failure into a provider error.
pub(crate) fn request_failed(provider: &str, e: reqwest::Error) -> ProviderError {
    ProviderError::RequestFailed {
        provider: provider.to_string(),
        reason: e.to_string(),
    }
}

/// Pass successful responses through; read the body of failed ones into
/// a `BadStatus` error.
pub(crate) fn check_status(provider: &str, response: Response) -> HelpdeskResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(ProviderError::BadStatus {
        provider: provider.to_string(),
        status: status.as_u16(),
        body,
    }
    .into())
}

/// Read an API key from the named environment variable.
pub(crate) fn api_key_from_env(provider: &str, env_var: &str) -> HelpdeskResult<String> {
    match std::env::var(env_var) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ProviderError::MissingCredentials {
            provider: provider.to_string(),
            env_var: env_var.to_string(),
        }
        .into()),
    }
}

/// Strip a trailing slash so paths can be appended with `format!`.
pub(crate) fn trim_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
