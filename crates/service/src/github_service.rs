//! Single-slot TTL cache in front of the GitHub repository fetch.
//!
//! The slot holds the last successful projection together with the instant
//! it was fetched. Replacement swaps the whole record, so a reader either
//! sees the previous value or the new one, never a mix. Two callers that
//! both find the slot stale may fetch redundantly; the second store wins and
//! both return valid data.

use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwapOption;
use tracing::debug;

use common::github::{GithubClient, GithubError, RepoMeta};

pub const CACHE_TTL: Duration = Duration::from_secs(600);

struct CachedRepo {
    fetched_at: Instant,
    meta: RepoMeta,
}

pub struct GithubCache {
    client: GithubClient,
    ttl: Duration,
    slot: ArcSwapOption<CachedRepo>,
}

impl GithubCache {
    pub fn new(client: GithubClient) -> Self {
        Self::with_ttl(client, CACHE_TTL)
    }

    /// Shorter TTLs are only interesting to tests.
    pub fn with_ttl(client: GithubClient, ttl: Duration) -> Self {
        Self {
            client,
            ttl,
            slot: ArcSwapOption::const_empty(),
        }
    }

    /// Cached projection if fresh, otherwise one upstream fetch by this
    /// caller. A failed fetch leaves the slot exactly as it was: a stale
    /// value stays around for the next successful fetch to supersede, and
    /// an empty slot keeps every request going upstream until one succeeds.
    pub async fn get(&self) -> Result<RepoMeta, GithubError> {
        if let Some(cached) = self.slot.load_full() {
            if cached.fetched_at.elapsed() < self.ttl {
                return Ok(cached.meta.clone());
            }
        }
        let meta = self.client.fetch_repo().await?;
        debug!(repo = %meta.full_name, "github cache refreshed");
        self.slot.store(Some(Arc::new(CachedRepo {
            fetched_at: Instant::now(),
            meta: meta.clone(),
        })));
        Ok(meta)
    }
}
