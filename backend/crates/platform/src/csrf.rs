//! Anti-Forgery (CSRF) Token Support
//!
//! Double-submit token scheme: the server issues a random token as a
//! JavaScript-readable cookie; state-changing requests must echo it in a
//! request header. Both values are compared in constant time.

use axum::http::HeaderMap;

use crate::cookie::{CookieConfig, SameSite, extract_cookie};
use crate::crypto::{constant_time_eq, random_bytes, to_base64url};

/// Name of the cookie carrying the anti-forgery token
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Request header that must echo the cookie value
pub const CSRF_HEADER_NAME: &str = "x-csrf-token";

/// Token length in raw bytes (before base64url encoding)
const TOKEN_BYTES: usize = 32;

/// Generate a fresh anti-forgery token
pub fn generate_token() -> String {
    to_base64url(&random_bytes(TOKEN_BYTES))
}

/// Cookie configuration for the anti-forgery token
///
/// Deliberately not HttpOnly: the frontend reads the cookie and mirrors it
/// into the request header.
pub fn cookie_config(secure: bool, same_site: SameSite) -> CookieConfig {
    CookieConfig {
        name: CSRF_COOKIE_NAME.to_string(),
        secure,
        http_only: false,
        same_site,
        path: "/".to_string(),
        max_age_secs: None,
    }
}

/// Verify the double-submit pair on a request
///
/// Returns true only when both the cookie and the header are present and
/// their values match.
pub fn verify_request(headers: &HeaderMap) -> bool {
    let cookie = match extract_cookie(headers, CSRF_COOKIE_NAME) {
        Some(v) => v,
        None => return false,
    };

    let header_value = match headers.get(CSRF_HEADER_NAME).and_then(|v| v.to_str().ok()) {
        Some(v) => v,
        None => return false,
    };

    constant_time_eq(cookie.as_bytes(), header_value.as_bytes())
}

/// Reuse an existing token from the request, or mint a new one
///
/// Keeps the token stable across requests so an open tab does not have its
/// in-flight token invalidated by a parallel check-auth call.
pub fn current_or_new_token(headers: &HeaderMap) -> String {
    extract_cookie(headers, CSRF_COOKIE_NAME).unwrap_or_else(generate_token)
}
