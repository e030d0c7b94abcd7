//! # Auth Session
//!
//! The session lives entirely in the browser: one cookie holding the logged-in
//! username and any pending flash notices, serialized as JSON, base64 encoded
//! and signed with a key derived from `SECRET_KEY`. The server keeps no session
//! records, so any instance started with the same key accepts the cookie. A
//! tampered cookie fails the signature check and the request is anonymous.
//!
//! Handlers never parse the cookie themselves. They take an [`AuthContext`],
//! which decodes it once at the request boundary, and hand it back in the
//! response so changes are written out as a new `Set-Cookie`.

pub mod flash;

use crate::session::flash::{Flash, Level};
use crate::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::response::{IntoResponseParts, ResponseParts};
use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};
use std::convert::Infallible;

/// Name of the session cookie.
pub const COOKIE_NAME: &str = "session";

/// Stretch arbitrary key material into the 64 bytes `Key` requires.
pub fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Contents of the session cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct SessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    flashes: Vec<Flash>,
}

impl SessionData {
    fn is_empty(&self) -> bool {
        self.user.is_none() && self.flashes.is_empty()
    }

    fn encode(&self) -> serde_json::Result<String> {
        Ok(URL_SAFE_NO_PAD.encode(serde_json::to_vec(self)?))
    }

    /// `None` for anything that is not a cookie this server wrote.
    fn decode(raw: &str) -> Option<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(raw).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}

/// Request-scoped identity and flash queue.
///
/// Mutations only touch the in-memory copy; returning the context as part of
/// the response (`(auth, Redirect::to(..))`) writes them back to the cookie.
/// An untouched context adds no `Set-Cookie` header.
pub struct AuthContext {
    jar: SignedCookieJar,
    data: SessionData,
    secure: bool,
    modified: bool,
}

impl AuthContext {
    /// Decode the session cookie found in `headers`.
    pub fn from_headers(headers: &HeaderMap, key: Key, secure: bool) -> Self {
        let jar = SignedCookieJar::<Key>::from_headers(headers, key);
        let data = jar
            .get(COOKIE_NAME)
            .and_then(|cookie| SessionData::decode(cookie.value()))
            .unwrap_or_default();

        Self {
            jar,
            data,
            secure,
            modified: false,
        }
    }

    /// The logged-in username, if any.
    pub fn user(&self) -> Option<&str> {
        self.data.user.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.data.user.is_some()
    }

    /// Mark the session as belonging to `username`.
    pub fn log_in(&mut self, username: String) {
        self.data.user = Some(username);
        self.modified = true;
    }

    /// Drop the identity. Pending flashes survive.
    pub fn log_out(&mut self) {
        if self.data.user.take().is_some() {
            self.modified = true;
        }
    }

    /// Queue a notice for the next rendered page.
    pub fn flash(&mut self, level: Level, message: impl Into<String>) {
        self.data.flashes.push(Flash {
            level,
            message: message.into(),
        });
        self.modified = true;
    }

    /// Remove and return every pending notice, oldest first.
    pub fn take_flashes(&mut self) -> Vec<Flash> {
        if self.data.flashes.is_empty() {
            return Vec::new();
        }
        self.modified = true;
        std::mem::take(&mut self.data.flashes)
    }

    fn into_jar(self) -> SignedCookieJar {
        if !self.modified {
            return self.jar;
        }
        if self.data.is_empty() {
            return self.jar.remove(removal_cookie());
        }

        match self.data.encode() {
            Ok(value) => self.jar.add(session_cookie(value, self.secure)),
            Err(e) => {
                tracing::error!(error = %e, "failed to encode session; clearing it");
                self.jar.remove(removal_cookie())
            }
        }
    }
}

/// No max-age: the cookie lasts for the browser session.
fn session_cookie(value: String, secure: bool) -> Cookie<'static> {
    Cookie::build(Cookie::new(COOKIE_NAME, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn removal_cookie() -> Cookie<'static> {
    Cookie::build(Cookie::new(COOKIE_NAME, ""))
        .path("/")
        .build()
}

impl FromRequestParts<AppState> for AuthContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(
            &parts.headers,
            state.session_key.clone(),
            state.config.secure_cookies,
        ))
    }
}

impl IntoResponseParts for AuthContext {
    type Error = Infallible;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        self.into_jar().into_response_parts(res)
    }
}
