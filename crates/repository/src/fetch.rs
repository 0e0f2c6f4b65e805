//! Exhaustive, paginated parameter fetch.
//!
//! Responsibilities:
//! - Request every parameter at or below a path, recursively and decrypted.
//! - Follow continuation tokens until the store reports no more pages.
//!
//! Does NOT handle:
//! - Retries. A failed page fails the whole fetch.
//! - Deduplication or ordering; parameters are returned in page order.

use std::sync::Arc;
use std::time::Instant;

use paramstore_config::constants::DEFAULT_PAGE_SIZE;
use tracing::debug;

use crate::auth::CredentialSource;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::store::{PageRequest, Parameter, ParameterStore};

/// Fetches all parameters under a path from a [`ParameterStore`].
#[derive(Clone)]
pub struct ParameterFetcher {
    store: Arc<dyn ParameterStore>,
    page_size: i32,
    metrics: MetricsCollector,
}

impl std::fmt::Debug for ParameterFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParameterFetcher")
            .field("page_size", &self.page_size)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl ParameterFetcher {
    pub fn new(store: Arc<dyn ParameterStore>) -> Self {
        Self {
            store,
            page_size: DEFAULT_PAGE_SIZE,
            metrics: MetricsCollector::new(),
        }
    }

    /// Override the page size sent to the store (clamped to at least 1).
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = metrics;
        self
    }

    /// Fetch every parameter whose name starts with `path`.
    ///
    /// An empty result is not an error.
    ///
    /// # Errors
    /// The first failing page aborts the fetch with its error.
    pub async fn fetch_all(
        &self,
        path: &str,
        credentials: &CredentialSource,
    ) -> Result<Vec<Parameter>> {
        let start = Instant::now();
        let result = self.fetch_pages(path, credentials).await;

        self.metrics
            .record_fetch_duration(credentials.kind(), start.elapsed(), result.is_ok());
        if let Err(e) = &result {
            self.metrics.record_error(e);
        }
        result
    }

    async fn fetch_pages(
        &self,
        path: &str,
        credentials: &CredentialSource,
    ) -> Result<Vec<Parameter>> {
        let mut parameters = Vec::new();
        let mut next_token: Option<String> = None;
        let mut page = 0usize;

        loop {
            let request = PageRequest {
                path: path.to_string(),
                credentials: credentials.clone(),
                recursive: true,
                with_decryption: true,
                max_results: self.page_size,
                next_token: next_token.take(),
            };

            let response = self.store.get_parameters_by_path(request).await?;
            page += 1;
            self.metrics.record_page(response.parameters.len());
            debug!(
                path,
                page,
                count = response.parameters.len(),
                "Fetched parameter page"
            );

            parameters.extend(response.parameters);

            match response.next_token {
                Some(token) if !token.is_empty() => next_token = Some(token),
                _ => break,
            }
        }

        debug!(
            path,
            pages = page,
            total = parameters.len(),
            credential_source = credentials.kind(),
            "Fetched all parameters"
        );
        Ok(parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepositoryError;
    use crate::store::{MockParameterStore, ParameterPage};
    use mockall::Sequence;

    fn page(names: &[&str], next: Option<&str>) -> ParameterPage {
        ParameterPage {
            parameters: names.iter().map(|n| Parameter::new(*n, "v")).collect(),
            next_token: next.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_follows_next_token_until_absent() {
        let mut store = MockParameterStore::new();
        let mut seq = Sequence::new();

        store
            .expect_get_parameters_by_path()
            .withf(|r| r.next_token.is_none() && r.recursive && r.with_decryption)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(page(&["/app/default/a"], Some("t1"))));
        store
            .expect_get_parameters_by_path()
            .withf(|r| r.next_token.as_deref() == Some("t1"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(page(&["/app/default/b"], Some("t2"))));
        store
            .expect_get_parameters_by_path()
            .withf(|r| r.next_token.as_deref() == Some("t2"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(page(&["/app/default/c"], None)));

        let fetcher = ParameterFetcher::new(Arc::new(store));
        let params = fetcher
            .fetch_all("/app/default/", &CredentialSource::DefaultChain)
            .await
            .unwrap();

        let names: Vec<_> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["/app/default/a", "/app/default/b", "/app/default/c"]);
    }

    #[tokio::test]
    async fn test_empty_token_ends_pagination() {
        let mut store = MockParameterStore::new();
        store
            .expect_get_parameters_by_path()
            .times(1)
            .returning(|_| Ok(page(&["/app/default/a"], Some(""))));

        let fetcher = ParameterFetcher::new(Arc::new(store));
        let params = fetcher
            .fetch_all("/app/default/", &CredentialSource::DefaultChain)
            .await
            .unwrap();
        assert_eq!(params.len(), 1);
    }

    #[tokio::test]
    async fn test_no_matches_is_empty() {
        let mut store = MockParameterStore::new();
        store
            .expect_get_parameters_by_path()
            .times(1)
            .returning(|_| Ok(ParameterPage::default()));

        let fetcher = ParameterFetcher::new(Arc::new(store));
        let params = fetcher
            .fetch_all("/missing/default/", &CredentialSource::DefaultChain)
            .await
            .unwrap();
        assert!(params.is_empty());
    }

    #[tokio::test]
    async fn test_page_error_aborts_without_retry() {
        let mut store = MockParameterStore::new();
        let mut seq = Sequence::new();
        store
            .expect_get_parameters_by_path()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(page(&["/app/default/a"], Some("t1"))));
        store
            .expect_get_parameters_by_path()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|r| {
                Err(RepositoryError::StoreFetch {
                    path: r.path,
                    code: Some("ThrottlingException".to_string()),
                    message: "Rate exceeded".to_string(),
                })
            });

        let fetcher = ParameterFetcher::new(Arc::new(store));
        let err = fetcher
            .fetch_all("/app/default/", &CredentialSource::DefaultChain)
            .await
            .unwrap_err();
        assert!(err.is_throttling());
    }

    #[tokio::test]
    async fn test_sends_page_size_and_credentials() {
        let mut store = MockParameterStore::new();
        store
            .expect_get_parameters_by_path()
            .withf(|r| {
                r.max_results == 3
                    && r.path == "/app/dev/"
                    && matches!(&r.credentials, CredentialSource::LocalProfile(n) if n == "ops")
            })
            .times(1)
            .returning(|_| Ok(ParameterPage::default()));

        let fetcher = ParameterFetcher::new(Arc::new(store))
            .with_page_size(3)
            .with_metrics(MetricsCollector::disabled());
        fetcher
            .fetch_all("/app/dev/", &CredentialSource::LocalProfile("ops".to_string()))
            .await
            .unwrap();
    }

    #[test]
    fn test_page_size_is_clamped() {
        let fetcher = ParameterFetcher::new(Arc::new(MockParameterStore::new())).with_page_size(0);
        assert_eq!(fetcher.page_size, 1);
    }
}
