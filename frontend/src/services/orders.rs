//! HTTP service for the order intake API.

use gloo_net::http::Request;

use crate::config::orders_endpoint;
use crate::types::{ShipmentRequest, SubmitError, SubmitResult};

/// Transport for shipment requests.
///
/// Any 2xx counts as accepted; the response body is not read on success.
#[allow(async_fn_in_trait)]
pub trait OrderApi {
    async fn create_order(&self, request: &ShipmentRequest) -> SubmitResult<()>;
}

/// [`OrderApi`] backed by `fetch` via gloo-net.
#[derive(Clone, Debug)]
pub struct HttpOrderApi {
    endpoint: String,
}

impl HttpOrderApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: orders_endpoint(base_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl OrderApi for HttpOrderApi {
    async fn create_order(&self, request: &ShipmentRequest) -> SubmitResult<()> {
        let request = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| SubmitError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if !response.ok() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SubmitError::Rejected {
                status: response.status(),
                body,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_base_url() {
        let api = HttpOrderApi::new("https://api.cargo-express.com/");
        assert_eq!(api.endpoint(), "https://api.cargo-express.com/api/v1/orders/");
    }
}
