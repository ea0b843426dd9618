//! Admin gate: passkey hashing and verification.
//!
//! A single hashed passkey in admin settings guards moderation actions.
//! Every privileged call re-verifies the raw passkey; there are no session
//! tokens. First-time setup is the absence of the stored key.

use sha2::{Digest, Sha256};

use database::admin_setting::{self, ADMIN_PASSKEY_KEY};
use database::Database;

/// Minimum allowed passkey length.
pub const MIN_PASSKEY_LENGTH: usize = 8;

/// Maximum allowed passkey length.
pub const MAX_PASSKEY_LENGTH: usize = 128;

/// Outcome of a set-passkey attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetPasskeyOutcome {
    /// The passkey was stored.
    Updated,
    /// A passkey exists and no current passkey was supplied.
    CurrentRequired,
    /// A passkey exists and the supplied current passkey was wrong.
    InvalidCurrent,
}

/// Hash a passkey for storage and comparison.
pub fn hash_passkey(passkey: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(passkey.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

/// Verify a passkey against the stored hash.
///
/// Fails closed: if no passkey has ever been set, nothing verifies.
pub async fn verify_passkey(db: &Database, passkey: &str) -> database::Result<bool> {
    let stored = admin_setting::get_setting(db.pool(), ADMIN_PASSKEY_KEY).await?;

    match stored {
        Some(stored_hash) => Ok(hash_passkey(passkey) == stored_hash),
        None => Ok(false),
    }
}

/// Set or change the admin passkey.
///
/// When no passkey exists the new one is stored unconditionally (trust on
/// first use). Changing an existing passkey requires the current one.
pub async fn set_passkey(
    db: &Database,
    new_passkey: &str,
    current_passkey: Option<&str>,
) -> database::Result<SetPasskeyOutcome> {
    let existing = admin_setting::get_setting(db.pool(), ADMIN_PASSKEY_KEY).await?;

    if existing.is_some() {
        let Some(current) = current_passkey else {
            return Ok(SetPasskeyOutcome::CurrentRequired);
        };
        if !verify_passkey(db, current).await? {
            return Ok(SetPasskeyOutcome::InvalidCurrent);
        }
    }

    admin_setting::set_setting(db.pool(), ADMIN_PASSKEY_KEY, &hash_passkey(new_passkey)).await?;
    Ok(SetPasskeyOutcome::Updated)
}
