/**
 * Password Hashing
 *
 * Passwords are stored as bcrypt hashes. Hashing and verification run on the
 * blocking thread pool so a high work factor does not stall the runtime.
 */

use crate::backend::error::BackendError;

/// Hash a password with the configured bcrypt cost
pub async fn hash_password(password: String, cost: u32) -> Result<String, BackendError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| {
            tracing::error!("Password hashing task failed: {:?}", e);
            BackendError::internal("Server error")
        })?
        .map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            BackendError::internal("Server error")
        })
}

/// Check a password against a stored hash
///
/// A stored value that is not a valid bcrypt hash never matches.
pub async fn verify_password(password: String, stored: String) -> bool {
    let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(password, &stored)).await;

    match outcome {
        Ok(Ok(valid)) => valid,
        Ok(Err(e)) => {
            tracing::warn!("Stored password is not a usable hash: {:?}", e);
            false
        }
        Err(e) => {
            tracing::error!("Password verification task failed: {:?}", e);
            false
        }
    }
}
