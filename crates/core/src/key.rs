//! Store key validation.

use crate::error::{Error, Result};

/// Check that a store key can address a collection.
///
/// Keys are opaque to redcoll; the only requirement is that they are not
/// empty. No namespacing is applied.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::Validation("store key must not be empty".to_string()));
    }
    Ok(())
}
