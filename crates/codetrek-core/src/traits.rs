use std::future::Future;

use crate::error::AppError;
use crate::models::{Provider, ProviderReport};

/// Fetches raw HTML content from a URL.
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, AppError>> + Send;
}

/// Turns one provider's raw profile document into statistics.
///
/// Extraction is best-effort and infallible: every field that cannot be read
/// keeps its documented default, so an unusable document yields the
/// provider's fallback record rather than an error.
pub trait StatsExtractor: Send + Sync + Clone {
    fn provider(&self) -> Provider;

    fn extract(&self, username: &str, document: &str) -> ProviderReport;
}

/// Keyed storage for records that live as long as the owning application.
pub trait KeyValueStore<V>: Send + Sync + Clone
where
    V: Clone + Send + Sync,
{
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<V>, AppError>> + Send;

    /// Insert or replace the value stored under `key`.
    fn put(&self, key: &str, value: V) -> impl Future<Output = Result<(), AppError>> + Send;

    /// Remove `key`, returning the value it held.
    fn delete(&self, key: &str) -> impl Future<Output = Result<Option<V>, AppError>> + Send;
}
