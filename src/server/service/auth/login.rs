//! Discord OAuth login URL generation and callback URL sanitizing.

use oauth2::{CsrfToken, Scope};
use reqwest::Url;

use crate::server::model::auth::{AuthorizationRequest, DiscordOAuthClient};

/// Where users land after signing in when no usable callback was given
pub static DEFAULT_CALLBACK_PATH: &str = "/dashboard";

static SCOPES: &[&str] = &["identify", "email"];

/// Builds the Discord authorize URL with a fresh CSRF state
pub fn login_service(oauth_client: &DiscordOAuthClient) -> AuthorizationRequest {
    let (url, state) = oauth_client
        .authorize_url(CsrfToken::new_random)
        .add_scopes(SCOPES.iter().map(|scope| Scope::new(scope.to_string())))
        .url();

    AuthorizationRequest {
        url: url.to_string(),
        state: state.secret().to_string(),
    }
}

/// Reduces a requested callback to a same-site path.
///
/// Accepts paths starting with a single `/` and absolute URLs on the app's own origin.
/// Anything else, including protocol-relative `//host` URLs, yields [`DEFAULT_CALLBACK_PATH`].
/// Callbacks containing whitespace or control characters are rejected as well: browsers drop
/// them from a `Location`, so `/\t/host` would land on `//host`.
pub fn sanitize_callback_url(callback: Option<&str>, app_url: &Url) -> String {
    let Some(callback) = callback.map(str::trim).filter(|callback| !callback.is_empty()) else {
        return DEFAULT_CALLBACK_PATH.to_string();
    };

    if callback
        .chars()
        .any(|c| c.is_control() || c.is_whitespace())
    {
        return DEFAULT_CALLBACK_PATH.to_string();
    }

    if callback.starts_with('/') {
        if callback.starts_with("//") || callback.contains('\\') {
            return DEFAULT_CALLBACK_PATH.to_string();
        }
        return callback.to_string();
    }

    match Url::parse(callback) {
        Ok(url) if url.origin() == app_url.origin() => match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        },
        _ => DEFAULT_CALLBACK_PATH.to_string(),
    }
}
