//! Session credential loading.
//!
//! The cookie string is provisioned by hand (copied out of a browser session)
//! and stored in a plain text file. This module only reads it back.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::InventoryError;

/// Default credential file name, resolved against the working directory.
pub const DEFAULT_CREDENTIAL_FILE: &str = ".cookie";

/// Opaque session cookie. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential(<{} bytes>)", self.0.len())
    }
}

/// Reads the credential file at `path` and returns its trimmed contents.
pub fn load_credential(path: &Path) -> Result<Credential, InventoryError> {
    let raw = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(InventoryError::CredentialNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(InventoryError::CredentialRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let value = raw.trim();
    if value.is_empty() {
        return Err(InventoryError::CredentialEmpty {
            path: path.to_path_buf(),
        });
    }
    tracing::debug!("loaded credential from {}", path.display());
    Ok(Credential(value.to_string()))
}
