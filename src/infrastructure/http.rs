use crate::domain::errors::{AppError, FetchResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::price_registry::{PriceRecord, RecordRepository, RegionFilter};
use gloo::net::http::Request;

/// Query endpoint as exposed through the function host
pub const DEFAULT_ENDPOINT: &str = "/.netlify/functions/api/api/precios";

/// REST client for the price registration endpoint
#[derive(Debug, Clone)]
pub struct PreciosRestClient {
    endpoint: String,
}

impl Default for PreciosRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PreciosRestClient {
    pub fn new() -> Self {
        Self { endpoint: DEFAULT_ENDPOINT.to_string() }
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    /// Records URL carrying the non-empty region parameters
    pub fn records_url(&self, region: &RegionFilter) -> String {
        HttpUtils::build_url_with_params(&self.endpoint, &region.query_pairs())
    }
}

impl RecordRepository for PreciosRestClient {
    async fn fetch_records(&self, region: &RegionFilter) -> FetchResult<Vec<PriceRecord>> {
        let url = self.records_url(region);

        get_logger().info(
            LogComponent::Infrastructure("PreciosAPI"),
            &format!("📡 GET {}", url),
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to send request: {e:?}")))?;

        if !response.ok() {
            let error_msg =
                format!("HTTP error: {} - {}", response.status(), response.status_text());
            get_logger().error(LogComponent::Infrastructure("PreciosAPI"), &error_msg);
            return Err(AppError::Network(error_msg));
        }

        let records: Vec<PriceRecord> = response
            .json()
            .await
            .map_err(|e| AppError::Parse(format!("Failed to parse JSON: {e:?}")))?;

        get_logger().info(
            LogComponent::Infrastructure("PreciosAPI"),
            &format!("✅ {} records fetched", records.len()),
        );

        Ok(records)
    }
}

/// Utilities for HTTP requests
pub struct HttpUtils;

impl HttpUtils {
    /// Build a URL from ordered query pairs; values are encoded
    pub fn build_url_with_params(base_url: &str, params: &[(&str, &str)]) -> String {
        if params.is_empty() {
            return base_url.to_string();
        }

        let query_string: String = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, Self::url_encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", base_url, query_string)
    }

    /// Minimal URL encoding for the characters the registry values contain
    pub fn url_encode(input: &str) -> String {
        input
            .replace('%', "%25")
            .replace(' ', "%20")
            .replace('&', "%26")
            .replace('=', "%3D")
            .replace('?', "%3F")
            .replace('#', "%23")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_url_without_filters_is_bare() {
        let client = PreciosRestClient::new();
        let url = client.records_url(&RegionFilter::default());
        assert_eq!(url, "/.netlify/functions/api/api/precios");
    }

    #[test]
    fn records_url_carries_non_empty_region_params() {
        let client = PreciosRestClient::new();
        let region = RegionFilter::from_selections("LIMA", "", "MIRAFLORES");
        assert_eq!(
            client.records_url(&region),
            "/.netlify/functions/api/api/precios?departamento=LIMA&distrito=MIRAFLORES"
        );
    }

    #[test]
    fn url_encoding_covers_spaces_and_separators() {
        assert_eq!(HttpUtils::url_encode("LA LIBERTAD"), "LA%20LIBERTAD");
        assert_eq!(HttpUtils::url_encode("a&b=c"), "a%26b%3Dc");
    }
}
