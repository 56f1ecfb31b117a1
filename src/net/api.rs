//! Manifest fetch.
//!
//! Browser (csr): one `GET` via `gloo-net`. Native builds have no network
//! path; the call fails with [`SiteError::ManifestFetch`] so native callers
//! exercise the same failure handling the browser does.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors, non-2xx statuses and undecodable bodies each map to
//! their own [`SiteError`] variant. Nothing here logs; the router decides.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::manifest::Manifest;

use crate::error::SiteError;

#[cfg(any(test, feature = "csr"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(any(test, not(feature = "csr")))]
fn unavailable_message(url: &str) -> String {
    format!("{url}: no network outside the browser")
}

/// Fetch and decode the site manifest from `url`.
///
/// # Errors
///
/// [`SiteError::ManifestFetch`] when no response arrives,
/// [`SiteError::ManifestStatus`] for a non-success status and
/// [`SiteError::ManifestParse`] when the body is not a manifest.
pub async fn fetch_manifest(url: &str) -> Result<Manifest, SiteError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| SiteError::ManifestFetch(e.to_string()))?;
        if !is_success(resp.status()) {
            return Err(SiteError::ManifestStatus(resp.status()));
        }
        let body = resp.text().await.map_err(|e| SiteError::ManifestFetch(e.to_string()))?;
        Manifest::from_json(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(SiteError::ManifestFetch(unavailable_message(url)))
    }
}
