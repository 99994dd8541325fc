//! Request plumbing shared by the REST clients.

use crate::{ServiceError, ServiceResult};

use std::time::Duration;

use reqwest::{Response, Url};
use serde_json::Value;

/// Build a URL from a base and path segments, percent-encoding each segment.
///
/// Segments may contain `/`; it is encoded rather than treated as a separator.
pub(crate) fn endpoint(base: &str, segments: &[&str]) -> ServiceResult<Url> {
    let mut url = Url::parse(base.trim_end_matches('/'))
        .map_err(|e| ServiceError::validation(format!("invalid base url '{base}': {e}")))?;

    url.path_segments_mut()
        .map_err(|_| ServiceError::validation(format!("base url '{base}' cannot have a path")))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

/// Append query pairs to a URL
pub(crate) fn with_query(mut url: Url, pairs: &[(&str, &str)]) -> Url {
    {
        let mut query = url.query_pairs_mut();
        for (key, value) in pairs {
            query.append_pair(key, value);
        }
    }
    url
}

/// `application/x-www-form-urlencoded` encoding of `pairs`
pub(crate) fn form_body(pairs: &[(&str, &str)]) -> ServiceResult<String> {
    let scratch = endpoint("http://localhost", &[])?;
    Ok(with_query(scratch, pairs)
        .query()
        .unwrap_or_default()
        .to_string())
}

/// Client with a request timeout
pub(crate) fn build_client(timeout: Option<Duration>) -> ServiceResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Read a JSON body, converting error envelopes into [`ServiceError::Api`].
///
/// Understands `{"error": {"code", "message", "status"}}`, which covers the
/// identity, document and weather APIs.
pub(crate) async fn read_json(response: Response) -> ServiceResult<Value> {
    let status = response.status();
    let text = response.text().await?;

    if status.is_success() {
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        return Ok(serde_json::from_str(&text)?);
    }

    let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
    match body.get("error") {
        Some(error) => {
            let code = error
                .get("status")
                .and_then(|v| v.as_str())
                .map(String::from)
                .or_else(|| error.get("code").map(|v| v.to_string()))
                .unwrap_or_else(|| status.as_u16().to_string());
            let message = error
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            Err(ServiceError::api(code, message))
        }
        None => Err(ServiceError::api(
            status.as_u16().to_string(),
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string(),
        )),
    }
}
