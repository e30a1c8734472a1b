/**
 * Session Management
 *
 * Login sessions are HS256-signed JWTs carried in an `HttpOnly` cookie. The
 * signing secret is generated when the process starts and never persisted,
 * so a restart invalidates every outstanding session.
 *
 * A token binds exactly one email (`sub`) and a random session id (`sid`).
 * Signature alone is not enough to resolve a session: the `sid` must still be
 * live in this process. Logout removes it, so a replayed cookie resolves to
 * an anonymous caller even though its signature is still valid.
 */

use std::collections::HashSet;
use std::sync::Arc;

use axum::http::{
    header::{InvalidHeaderValue, COOKIE},
    HeaderMap, HeaderValue,
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::{get_user_by_email, Identity, User};
use crate::backend::error::BackendResult;

/// Name of the session cookie
pub const SESSION_COOKIE_NAME: &str = "dragonblock_session";

/// Length of the generated signing secret in bytes
const SECRET_LEN: usize = 64;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Email the session is bound to
    pub sub: String,
    /// Session id, revoked on logout
    pub sid: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Process-lifetime secret used to sign session tokens
pub struct SigningSecret([u8; SECRET_LEN]);

impl SigningSecret {
    /// Draw a fresh secret from the OS random number generator
    pub fn generate() -> Self {
        let mut bytes = [0u8; SECRET_LEN];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Use fixed key material
    pub fn from_bytes(bytes: [u8; SECRET_LEN]) -> Self {
        Self(bytes)
    }
}

impl std::fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningSecret(..)")
    }
}

/// Identity of the caller after session resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No valid session
    Anonymous,
    /// Valid session for a registered user
    Authenticated(User),
}

impl Identity for SessionState {
    fn unique_id(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => user.unique_id(),
        }
    }

    fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

/// Issues, resolves and revokes login sessions
///
/// Cloning is cheap; all clones share the signing keys and the live session set.
#[derive(Clone)]
pub struct SessionManager {
    keys: Arc<SessionKeys>,
    live: Arc<RwLock<HashSet<Uuid>>>,
    cookie_secure: bool,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("cookie_secure", &self.cookie_secure)
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    /// Create a session manager signing with the given secret
    pub fn new(secret: &SigningSecret, cookie_secure: bool) -> Self {
        // Sessions have no expiry; they end at logout or restart.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        Self {
            keys: Arc::new(SessionKeys {
                encoding: EncodingKey::from_secret(&secret.0),
                decoding: DecodingKey::from_secret(&secret.0),
                validation,
            }),
            live: Arc::new(RwLock::new(HashSet::new())),
            cookie_secure,
        }
    }

    /// Create a session manager with a freshly generated secret
    pub fn generate(cookie_secure: bool) -> Self {
        Self::new(&SigningSecret::generate(), cookie_secure)
    }

    /// Issue a signed session token bound to `email`
    pub async fn issue(&self, email: &str) -> BackendResult<String> {
        let sid = Uuid::new_v4();
        let claims = Claims {
            sub: email.to_string(),
            sid: sid.to_string(),
            iat: chrono::Utc::now().timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)?;
        self.live.write().await.insert(sid);

        Ok(token)
    }

    /// Verify a token's signature and decode its claims
    ///
    /// Returns `None` for a bad signature, a token from another secret, or
    /// anything that does not parse. Liveness is not checked here.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        match decode::<Claims>(token, &self.keys.decoding, &self.keys.validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                tracing::debug!("Rejected session token: {:?}", e);
                None
            }
        }
    }

    /// Resolve a token to the email it is bound to, if the session is live
    pub async fn resolve_email(&self, token: &str) -> Option<String> {
        let claims = self.verify(token)?;
        let sid = Uuid::parse_str(&claims.sid).ok()?;

        if self.live.read().await.contains(&sid) {
            Some(claims.sub)
        } else {
            tracing::debug!("Session {} is no longer live", sid);
            None
        }
    }

    /// Reconstruct the caller's identity from request headers
    ///
    /// Any problem with the cookie yields `Anonymous`, and so does a session
    /// whose email no longer has a user record. Store failures propagate.
    pub async fn resolve(&self, pool: &SqlitePool, headers: &HeaderMap) -> BackendResult<SessionState> {
        let Some(token) = extract_session_token(headers) else {
            return Ok(SessionState::Anonymous);
        };
        let Some(email) = self.resolve_email(&token).await else {
            return Ok(SessionState::Anonymous);
        };

        match get_user_by_email(pool, &email).await? {
            Some(user) => Ok(SessionState::Authenticated(user)),
            None => {
                tracing::warn!("Session bound to unknown email, treating as anonymous");
                Ok(SessionState::Anonymous)
            }
        }
    }

    /// End the session a token belongs to
    ///
    /// Returns whether a live session was removed.
    pub async fn revoke(&self, token: &str) -> bool {
        let Some(claims) = self.verify(token) else {
            return false;
        };
        match Uuid::parse_str(&claims.sid) {
            Ok(sid) => self.live.write().await.remove(&sid),
            Err(_) => false,
        }
    }

    /// Number of live sessions in this process
    pub async fn live_sessions(&self) -> usize {
        self.live.read().await.len()
    }

    /// Build the `Set-Cookie` value carrying a session token
    ///
    /// No `Max-Age`: the cookie lives for the browser session.
    pub fn session_cookie(&self, token: &str) -> Result<HeaderValue, InvalidHeaderValue> {
        let mut cookie = format!("{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax");
        if self.cookie_secure {
            cookie.push_str("; Secure");
        }
        HeaderValue::from_str(&cookie)
    }

    /// Build the `Set-Cookie` value that removes the session cookie
    pub fn clear_session_cookie(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        let mut cookie = format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
        if self.cookie_secure {
            cookie.push_str("; Secure");
        }
        HeaderValue::from_str(&cookie)
    }
}

/// Pull the session token out of the `Cookie` header(s)
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    for header in headers.get_all(COOKIE) {
        let Ok(value) = header.to_str() else {
            continue;
        };
        for pair in value.split(';') {
            let mut parts = pair.trim().splitn(2, '=');
            let key = parts.next().unwrap_or_default().trim();
            let val = parts.next().unwrap_or_default().trim();
            if key == SESSION_COOKIE_NAME && !val.is_empty() {
                return Some(val.to_string());
            }
        }
    }
    None
}
