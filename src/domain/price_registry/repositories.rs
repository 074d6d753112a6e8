use crate::domain::errors::FetchResult;
use crate::domain::price_registry::{PriceRecord, RegionFilter};

/// Interface for fetching price registrations from the query endpoint
///
/// Region narrowing happens server-side; the repository only carries the
/// filter over the wire.
pub trait RecordRepository {
    #[allow(async_fn_in_trait)]
    async fn fetch_records(&self, region: &RegionFilter) -> FetchResult<Vec<PriceRecord>>;
}
