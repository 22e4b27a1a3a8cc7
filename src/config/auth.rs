//! Authentication header building for backend requests.
//!
//! Every request carries the project's anon key as `apikey`. The
//! `Authorization` bearer is the signed-in user's access token when a
//! session exists, and the anon key otherwise.

use super::credentials::SecureString;

/// Header name and value for authentication.
pub type AuthHeader = (&'static str, String);

/// Build the authentication headers for one request.
pub fn build_auth_headers(anon_key: &SecureString, access_token: Option<&SecureString>) -> [AuthHeader; 2] {
    let bearer = access_token
        .filter(|token| !token.is_empty())
        .unwrap_or(anon_key);

    [
        ("apikey", anon_key.expose().to_string()),
        ("Authorization", format!("Bearer {}", bearer.expose())),
    ]
}
