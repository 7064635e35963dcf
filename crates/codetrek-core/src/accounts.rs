//! Demo sign-up / login flow.
//!
//! Accounts and one-time codes live in injected [`KeyValueStore`]s keyed by
//! normalized email. This is not credential security: codes are handed back
//! to the caller and unknown emails are auto-registered on login.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::error::AppError;
use crate::traits::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// SHA-256 of the password, hex encoded.
    pub password_hash: String,
}

impl Account {
    fn new(name: &str, email: &str, password: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: compute_hash(password),
        }
    }

    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Account fields safe to return to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// An account waiting for its one-time code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSignup {
    pub account: Account,
    pub otp: String,
}

#[derive(Debug, Clone)]
pub struct SignupOutcome {
    pub user: PublicUser,
    /// Returned to the caller for the demo flow instead of being emailed.
    pub otp: String,
}

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: PublicUser,
    /// True when the email was unknown and an account was created on the spot.
    pub created: bool,
}

/// Compute a SHA-256 hash of a string, returned as 64-char hex.
pub fn compute_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Six-digit one-time code.
fn generate_otp() -> String {
    let n = 100_000 + (Uuid::new_v4().as_u128() % 900_000);
    n.to_string()
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn require(values: &[&str]) -> Result<(), AppError> {
    if values.iter().any(|value| value.trim().is_empty()) {
        return Err(AppError::ValidationError("Missing required fields".into()));
    }
    Ok(())
}

pub struct AccountService<A, P>
where
    A: KeyValueStore<Account>,
    P: KeyValueStore<PendingSignup>,
{
    accounts: A,
    pending: P,
}

impl<A, P> AccountService<A, P>
where
    A: KeyValueStore<Account>,
    P: KeyValueStore<PendingSignup>,
{
    pub fn new(accounts: A, pending: P) -> Self {
        Self { accounts, pending }
    }

    /// Register a pending account and issue its one-time code.
    ///
    /// Signing up again before verifying replaces the previous code.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<SignupOutcome, AppError> {
        require(&[name, email, password])?;
        let email = normalize_email(email);

        if self.accounts.get(&email).await?.is_some() {
            return Err(AppError::Conflict("User already exists".into()));
        }

        let account = Account::new(name.trim(), &email, password);
        let otp = generate_otp();
        let user = account.public();
        self.pending
            .put(
                &email,
                PendingSignup {
                    account,
                    otp: otp.clone(),
                },
            )
            .await?;

        tracing::info!(%email, "Signup pending verification");
        Ok(SignupOutcome { user, otp })
    }

    /// Check a one-time code and activate the pending account.
    ///
    /// The code is consumed on success; a wrong code leaves it in place.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<PublicUser, AppError> {
        require(&[email, otp])?;
        let email = normalize_email(email);

        let pending = self
            .pending
            .get(&email)
            .await?
            .ok_or_else(|| AppError::ValidationError("OTP expired or not found".into()))?;

        if !constant_time_eq(&pending.otp, otp.trim()) {
            return Err(AppError::ValidationError("Invalid OTP".into()));
        }

        self.pending.delete(&email).await?;
        let user = pending.account.public();
        self.accounts.put(&email, pending.account).await?;

        tracing::info!(%email, "OTP verified");
        Ok(user)
    }

    /// Log in, creating the account on first sight of an unknown email.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        require(&[email, password])?;
        let email = normalize_email(email);

        match self.accounts.get(&email).await? {
            Some(account) => {
                if !constant_time_eq(&account.password_hash, &compute_hash(password)) {
                    return Err(AppError::Unauthorized("Invalid credentials".into()));
                }
                tracing::info!(%email, "User logged in");
                Ok(LoginOutcome {
                    user: account.public(),
                    created: false,
                })
            }
            None => {
                let name = email.split('@').next().unwrap_or_default().to_string();
                let account = Account::new(&name, &email, password);
                let user = account.public();
                self.accounts.put(&email, account).await?;
                tracing::info!(%email, "Auto-created user on login");
                Ok(LoginOutcome {
                    user,
                    created: true,
                })
            }
        }
    }
}
