//! Identity provider seam.
//!
//! Wraps email+password sign-up/sign-in/sign-out and hands out an explicit
//! [`AuthContext`] instead of an ambient "current user": every operation in
//! the service core takes the context as a parameter, so "nobody is signed
//! in" is simply "the caller holds no context". Failures surface verbatim;
//! there are no retries at this layer.

use async_trait::async_trait;
use dashmap::DashMap;
use rand_core::{OsRng, RngCore};
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;

use matchday_storage::{Principal, PrincipalId};

/// Default minimum password length (matches the common provider policy).
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 6;

/// Error surface of the identity provider.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("email already in use")]
    EmailInUse,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("password must be at least {0} characters")]
    WeakPassword(usize),
    #[error("user not found")]
    UserNotFound,
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("forbidden")]
    Forbidden,
    #[error("backend error: {0}")]
    Backend(String),
}

/// Opaque session token issued at sign-up/sign-in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionToken(pub String);

/// The authenticated caller, passed explicitly into every store operation
/// that attributes a write.
#[derive(Clone, Debug)]
pub struct AuthContext {
    pub principal: Principal,
    pub token: SessionToken,
}

/// Email+password identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an account and start a session.
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthContext, AuthError>;

    /// Start a session for an existing account.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthContext, AuthError>;

    /// End the context's session. Idempotent: signing out twice is fine.
    async fn sign_out(&self, ctx: &AuthContext) -> Result<(), AuthError>;
}

struct Account {
    id: PrincipalId,
    salt: [u8; 16],
    digest: [u8; 32],
}

impl Account {
    fn digest_matches(&self, password: &str) -> bool {
        password_digest(&self.salt, password) == self.digest
    }
}

fn password_digest(salt: &[u8; 16], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

/// In-memory provider for tests and single-process runs.
///
/// Accounts are keyed by lower-cased email; passwords are stored as salted
/// SHA-256 digests. Not a hardened credential store, just the stand-in for
/// the managed provider behind the seam.
pub struct MemoryIdentity {
    accounts: DashMap<String, Account>,
    sessions: DashMap<SessionToken, PrincipalId>,
    min_password_len: usize,
}

impl MemoryIdentity {
    pub fn new() -> Self {
        Self::with_min_password_len(DEFAULT_MIN_PASSWORD_LEN)
    }

    pub fn with_min_password_len(min_password_len: usize) -> Self {
        Self {
            accounts: DashMap::new(),
            sessions: DashMap::new(),
            min_password_len,
        }
    }

    /// Whether the context's session token is still live.
    pub fn session_active(&self, ctx: &AuthContext) -> bool {
        self.sessions.contains_key(&ctx.token)
    }

    fn open_session(&self, principal: Principal) -> AuthContext {
        let token = SessionToken(Uuid::new_v4().to_string());
        self.sessions.insert(token.clone(), principal.id);
        AuthContext { principal, token }
    }
}

impl Default for MemoryIdentity {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentity {
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthContext, AuthError> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(AuthError::InvalidCredentials);
        }
        if password.len() < self.min_password_len {
            return Err(AuthError::WeakPassword(self.min_password_len));
        }

        let key = email.to_lowercase();
        // entry() keeps the existence check and the insert under one lock.
        match self.accounts.entry(key) {
            dashmap::mapref::entry::Entry::Occupied(_) => Err(AuthError::EmailInUse),
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                let mut salt = [0u8; 16];
                OsRng.fill_bytes(&mut salt);
                let account = Account {
                    id: PrincipalId(Uuid::new_v4()),
                    salt,
                    digest: password_digest(&salt, password),
                };
                let principal = Principal {
                    id: account.id,
                    email: email.to_string(),
                };
                slot.insert(account);
                Ok(self.open_session(principal))
            }
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthContext, AuthError> {
        let email = email.trim();
        let account = self
            .accounts
            .get(&email.to_lowercase())
            .ok_or(AuthError::UserNotFound)?;
        if !account.digest_matches(password) {
            return Err(AuthError::InvalidCredentials);
        }
        let principal = Principal {
            id: account.id,
            email: email.to_string(),
        };
        drop(account);
        Ok(self.open_session(principal))
    }

    async fn sign_out(&self, ctx: &AuthContext) -> Result<(), AuthError> {
        self.sessions.remove(&ctx.token);
        Ok(())
    }
}
