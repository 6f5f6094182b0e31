//! Fetching ICS feeds over HTTP.

use ics2tbricks_core::{TransformOptions, transform_with};
use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::HttpSettings;
use crate::error::{ClientError, ClientResult};

/// Checks that `url` is an `http` or `https` URL.
///
/// # Errors
///
/// Returns [`ClientError::InvalidUrlScheme`] for any other scheme or for
/// text that is not a URL.
pub fn validate_url(url: &str) -> ClientResult<Url> {
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(parsed),
        _ => Err(ClientError::InvalidUrlScheme(url.to_string())),
    }
}

/// Downloads the ICS text at `url`.
///
/// One request, no retries.
///
/// # Errors
///
/// Fails on an invalid scheme (before any request is made), on transport
/// errors and on non-success statuses.
pub async fn fetch_ics(url: &str, http: &HttpSettings) -> ClientResult<String> {
    let parsed = validate_url(url)?;

    let mut builder = Client::builder()
        .timeout(http.timeout())
        .user_agent(&http.user_agent);
    if !http.use_system_proxy {
        builder = builder.no_proxy();
    }
    let client = builder.build()?;

    info!(url = %parsed, "Fetching calendar");
    let response = client.get(parsed).send().await?;

    let status = response.status();
    if !status.is_success() {
        warn!(url = %url, status = %status, "Calendar fetch failed");
        return Err(ClientError::Fetch {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    debug!(bytes = body.len(), "Fetched calendar");
    Ok(body)
}

/// Fetches `url` and converts it into a calendar resource for `country_code`.
///
/// # Errors
///
/// See [`fetch_ics`]; ICS parse failures are passed through.
pub async fn calendar_resource_from_url(
    url: &str,
    country_code: &str,
    http: &HttpSettings,
) -> ClientResult<String> {
    resource_from_url_with(url, &TransformOptions::new(country_code), http).await
}

/// Fetches `url` and converts it with explicit transform options.
///
/// # Errors
///
/// See [`fetch_ics`]; ICS parse failures are passed through.
pub async fn resource_from_url_with(
    url: &str,
    options: &TransformOptions,
    http: &HttpSettings,
) -> ClientResult<String> {
    let ics = fetch_ics(url, http).await?;
    Ok(transform_with(&ics, options)?)
}
