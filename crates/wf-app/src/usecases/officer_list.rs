//! Officer listing cache.
//!
//! Owned by the application root and handed to whoever needs the listing;
//! the onboarding wizard invalidates and refreshes it after a successful
//! creation.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info_span, warn, Instrument};

use wf_core::ids::AgencyId;
use wf_core::officer::OfficerSummary;
use wf_core::ports::OfficerListPort;

/// What a listing view renders: the last good data plus load state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OfficerListSnapshot {
    pub officers: Vec<OfficerSummary>,
    pub loading: bool,
    pub last_error: Option<String>,
}

#[derive(Default)]
struct Entry {
    officers: Vec<OfficerSummary>,
    fetched_at: Option<Instant>,
    loading: bool,
    last_error: Option<String>,
}

impl Entry {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.is_some_and(|at| at.elapsed() < ttl)
    }
}

pub struct OfficerListStore {
    port: Arc<dyn OfficerListPort>,
    ttl: Duration,
    entries: Mutex<HashMap<AgencyId, Entry>>,
    /// Serialises fetches so concurrent readers share one request.
    fetch_lock: Mutex<()>,
}

impl OfficerListStore {
    pub fn new(port: Arc<dyn OfficerListPort>, ttl: Duration) -> Self {
        Self {
            port,
            ttl,
            entries: Mutex::new(HashMap::new()),
            fetch_lock: Mutex::new(()),
        }
    }

    /// Cached listing when fresh, otherwise a fetch.
    pub async fn get(&self, agency: &AgencyId) -> anyhow::Result<Vec<OfficerSummary>> {
        if let Some(officers) = self.fresh(agency).await {
            return Ok(officers);
        }
        let _fetch = self.fetch_lock.lock().await;
        // Another caller may have fetched while we waited.
        if let Some(officers) = self.fresh(agency).await {
            return Ok(officers);
        }
        self.fetch(agency).await
    }

    /// Marks the agency's listing stale; the next `get` refetches.
    pub async fn invalidate(&self, agency: &AgencyId) {
        if let Some(entry) = self.entries.lock().await.get_mut(agency) {
            entry.fetched_at = None;
        }
        debug!(agency = %agency, "officer list invalidated");
    }

    pub async fn invalidate_all(&self) {
        for entry in self.entries.lock().await.values_mut() {
            entry.fetched_at = None;
        }
    }

    /// Fetch now, regardless of freshness.
    pub async fn refresh(&self, agency: &AgencyId) -> anyhow::Result<Vec<OfficerSummary>> {
        let _fetch = self.fetch_lock.lock().await;
        self.fetch(agency).await
    }

    pub async fn snapshot(&self, agency: &AgencyId) -> OfficerListSnapshot {
        match self.entries.lock().await.get(agency) {
            Some(entry) => OfficerListSnapshot {
                officers: entry.officers.clone(),
                loading: entry.loading,
                last_error: entry.last_error.clone(),
            },
            None => OfficerListSnapshot::default(),
        }
    }

    async fn fresh(&self, agency: &AgencyId) -> Option<Vec<OfficerSummary>> {
        self.entries
            .lock()
            .await
            .get(agency)
            .filter(|e| e.is_fresh(self.ttl))
            .map(|e| e.officers.clone())
    }

    async fn fetch(&self, agency: &AgencyId) -> anyhow::Result<Vec<OfficerSummary>> {
        self.entries
            .lock()
            .await
            .entry(agency.clone())
            .or_default()
            .loading = true;

        let span = info_span!("usecase.officer_list.fetch", agency = %agency);
        let result = self.port.list_officers(agency).instrument(span).await;

        let mut entries = self.entries.lock().await;
        let entry = entries.entry(agency.clone()).or_default();
        entry.loading = false;
        match result {
            Ok(officers) => {
                entry.officers = officers.clone();
                entry.fetched_at = Some(Instant::now());
                entry.last_error = None;
                Ok(officers)
            }
            Err(err) => {
                warn!(agency = %agency, error = %err, "officer list fetch failed");
                entry.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wf_core::ids::OfficerId;

    struct CountingList {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl OfficerListPort for CountingList {
        async fn list_officers(&self, _agency: &AgencyId) -> anyhow::Result<Vec<OfficerSummary>> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail {
                anyhow::bail!("listing unavailable");
            }
            Ok(vec![OfficerSummary {
                id: OfficerId::from(format!("OFF-{n}")),
                name: format!("Officer {n}"),
                phone: None,
                status: None,
                area_name: None,
            }])
        }
    }

    fn store(fail: bool) -> (Arc<CountingList>, OfficerListStore) {
        let port = Arc::new(CountingList {
            calls: AtomicUsize::new(0),
            fail,
        });
        let store = OfficerListStore::new(port.clone(), Duration::from_secs(300));
        (port, store)
    }

    #[tokio::test]
    async fn get_uses_cache_until_ttl_expires() {
        tokio::time::pause();
        let (port, store) = store(false);
        let agency = AgencyId::from("AG-1");

        store.get(&agency).await.unwrap();
        store.get(&agency).await.unwrap();
        assert_eq!(port.calls.load(Ordering::SeqCst), 1);

        tokio::time::advance(Duration::from_secs(301)).await;
        let officers = store.get(&agency).await.unwrap();
        assert_eq!(port.calls.load(Ordering::SeqCst), 2);
        assert_eq!(officers[0].id.as_str(), "OFF-2");
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let (port, store) = store(false);
        let agency = AgencyId::from("AG-1");

        store.get(&agency).await.unwrap();
        store.invalidate(&agency).await;
        store.get(&agency).await.unwrap();

        assert_eq!(port.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_fetch_is_recorded_in_snapshot() {
        let (_port, store) = store(true);
        let agency = AgencyId::from("AG-1");

        assert!(store.refresh(&agency).await.is_err());

        let snapshot = store.snapshot(&agency).await;
        assert!(!snapshot.loading);
        assert_eq!(snapshot.last_error.as_deref(), Some("listing unavailable"));
        assert!(snapshot.officers.is_empty());
    }

    #[tokio::test]
    async fn agencies_are_cached_separately() {
        let (port, store) = store(false);

        store.get(&AgencyId::from("AG-1")).await.unwrap();
        store.get(&AgencyId::from("AG-2")).await.unwrap();

        assert_eq!(port.calls.load(Ordering::SeqCst), 2);
    }
}
