//! Error taxonomy for credential loading and the inventory request.
//!
//! Nothing here is retried. Every variant surfaces straight to the CLI, which
//! prints it together with [`InventoryError::hint`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    /// Credential file does not exist.
    #[error("credential file not found: {}", path.display())]
    CredentialNotFound { path: PathBuf },

    /// Credential file exists but holds only whitespace.
    #[error("credential file is empty: {}", path.display())]
    CredentialEmpty { path: PathBuf },

    /// Credential file exists but could not be read.
    #[error("read credential file {}: {source}", path.display())]
    CredentialRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Query parameters rejected before any I/O.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Server answered 401 or 403: the session cookie is stale or was rejected.
    #[error("authentication expired (HTTP {status})")]
    AuthenticationExpired { status: u32 },

    /// Any other non-2xx response.
    #[error("inventory request failed with HTTP {status}")]
    RequestFailed { status: u32 },

    /// libcurl could not complete the transfer (DNS, connect, timeout).
    #[error("inventory request failed: {0}")]
    Transport(#[from] curl::Error),

    /// Body is not the expected dealer/inventory JSON shape.
    #[error("unexpected inventory response: {0}")]
    ResponseParseError(#[from] serde_json::Error),
}

impl InventoryError {
    /// Short remediation text for errors a user can fix by hand.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            InventoryError::CredentialNotFound { .. }
            | InventoryError::CredentialEmpty { .. }
            | InventoryError::CredentialRead { .. } => Some(
                "create the cookie file with the Cookie header value copied from your browser's dev tools",
            ),
            InventoryError::AuthenticationExpired { .. } => Some(
                "your session cookie has expired; refresh your credential file from the browser and retry",
            ),
            _ => None,
        }
    }

    /// True when the failure is the credential itself (missing or stale).
    pub fn is_credential_problem(&self) -> bool {
        matches!(
            self,
            InventoryError::CredentialNotFound { .. }
                | InventoryError::CredentialEmpty { .. }
                | InventoryError::CredentialRead { .. }
                | InventoryError::AuthenticationExpired { .. }
        )
    }
}
