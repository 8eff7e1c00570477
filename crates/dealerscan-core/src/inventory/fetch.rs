//! The inventory GET, via the curl crate (libcurl).

use curl::easy::{Easy, List};
use std::time::Duration;

use super::flatten::{flatten, parse_response};
use super::query::{request_headers, InventoryQuery};
use crate::config::EndpointConfig;
use crate::credential::Credential;
use crate::error::InventoryError;
use crate::table::InventoryTable;

/// Maps an HTTP status to success or the matching error kind.
pub fn classify_status(code: u32) -> Result<(), InventoryError> {
    match code {
        200..=299 => Ok(()),
        401 | 403 => Err(InventoryError::AuthenticationExpired { status: code }),
        _ => Err(InventoryError::RequestFailed { status: code }),
    }
}

/// Issues inventory requests against one configured endpoint.
#[derive(Debug, Clone)]
pub struct InventoryClient {
    endpoint: EndpointConfig,
}

impl InventoryClient {
    pub fn new(endpoint: EndpointConfig) -> Self {
        Self { endpoint }
    }

    /// Performs the GET and flattens the response. One attempt, no retries.
    ///
    /// Runs in the current thread.
    pub fn fetch(
        &self,
        query: &InventoryQuery,
        credential: &Credential,
    ) -> Result<InventoryTable, InventoryError> {
        let url = query.build_url(&self.endpoint)?;
        tracing::info!(
            postal_code = %query.postal_code,
            max_dealers = query.max_dealers,
            model_year = query.model_year,
            "requesting inventory"
        );

        let (code, body) = self.get(url.as_str(), credential)?;
        tracing::debug!(status = code, bytes = body.len(), "inventory response");
        if let Err(e) = classify_status(code) {
            tracing::warn!("inventory request rejected: {}", e);
            return Err(e);
        }

        let dealers = parse_response(&body)?;
        let dealer_count = dealers.len();
        let records = flatten(dealers, query.model_year);
        tracing::info!(
            dealers = dealer_count,
            records = records.len(),
            "inventory flattened"
        );
        Ok(InventoryTable::new(records))
    }

    fn get(&self, url: &str, credential: &Credential) -> Result<(u32, Vec<u8>), InventoryError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        // Empty string lets libcurl offer every encoding it was built with.
        easy.accept_encoding("")?;
        easy.connect_timeout(Duration::from_secs(self.endpoint.connect_timeout_secs))?;
        easy.timeout(Duration::from_secs(self.endpoint.timeout_secs))?;
        easy.useragent(&self.endpoint.user_agent)?;

        let mut list = List::new();
        for (name, value) in request_headers(&self.endpoint, credential) {
            list.append(&format!("{}: {}", name, value.trim()))?;
        }
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        assert!(classify_status(200).is_ok());
        assert!(classify_status(204).is_ok());
    }

    #[test]
    fn unauthorized_and_forbidden_are_auth_expired() {
        assert!(matches!(
            classify_status(401),
            Err(InventoryError::AuthenticationExpired { status: 401 })
        ));
        assert!(matches!(
            classify_status(403),
            Err(InventoryError::AuthenticationExpired { status: 403 })
        ));
    }

    #[test]
    fn other_statuses_are_request_failed() {
        for code in [301, 404, 429, 500, 503] {
            match classify_status(code) {
                Err(InventoryError::RequestFailed { status }) => assert_eq!(status, code),
                other => panic!("expected RequestFailed for {code}, got {other:?}"),
            }
        }
    }
}
