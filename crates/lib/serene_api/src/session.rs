//! Session cookie: identifies which conversation a request belongs to.

use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::{Cookie, Key, SameSite};
use serene_core::session::new_session_id;
use sha2::{Digest, Sha512};

/// Cookie name carrying the session id.
pub const SESSION_COOKIE: &str = "serene_session";

/// Derive the 64-byte cookie signing key from the configured secret.
pub fn signing_key(secret: &str) -> Key {
    Key::from(Sha512::digest(secret.as_bytes()).as_slice())
}

/// Build the httpOnly session cookie.
pub fn session_cookie(id: &str) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE.to_string(), id.to_string()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/".to_string())
        .build()
}

/// Return the session id carried by `jar`, starting a new session when the
/// cookie is missing or its signature does not verify.
pub fn resolve(jar: SignedCookieJar) -> (SignedCookieJar, String) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        let id = cookie.value().to_string();
        return (jar, id);
    }
    let id = new_session_id();
    (jar.add(session_cookie(&id)), id)
}
