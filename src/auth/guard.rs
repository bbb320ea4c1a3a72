use crate::db::User;
use crate::types::{AppError, Result};

/// Allows the request only when the authenticated identity is the owner
/// named in the path.
///
/// Pure and stateless: same inputs always produce the same decision, no
/// I/O. Ownership is checked before existence — a mismatch is rejected
/// without consulting the store, so an unauthorized caller learns nothing
/// about which usernames exist.
pub fn ensure_owner(current: &User, path_username: &str) -> Result<()> {
    if current.username == path_username {
        Ok(())
    } else {
        Err(AppError::PermissionDenied)
    }
}
