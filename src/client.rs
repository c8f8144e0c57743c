use async_trait::async_trait;
use serde_json::Value;

use crate::error::Error;

#[async_trait]
pub trait Client {
    /// Raw JSON payload the API returns for one matchweek.
    async fn fetch_matches(&self, matchweek: u32) -> Result<Value, Error>;
}
