//! Primary phone uniqueness check.
//!
//! Input is debounced; only a value that already passes the synchronous phone
//! rule reaches the lookup port. Every input starts a new generation and any
//! result from an older generation is dropped.

mod debouncer;

pub use debouncer::Debouncer;

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info_span, warn, Instrument};

use wf_core::ports::PhoneLookupPort;
use wf_core::validation::{rules, ValidationErrorKind};

/// Progress of the uniqueness check for the current primary phone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PhoneCheckStatus {
    /// Nothing to check (empty or not a valid phone yet).
    Idle,
    /// Waiting for the debounce delay.
    Pending,
    /// Lookup in flight.
    Checking,
    Available,
    Taken { owner_name: Option<String> },
    /// Lookup failed; advancing is still allowed.
    Unknown { reason: String },
}

impl PhoneCheckStatus {
    /// Error that keeps the contact step from advancing, if any.
    pub fn blocking_error(&self) -> Option<ValidationErrorKind> {
        match self {
            PhoneCheckStatus::Taken { owner_name } => Some(ValidationErrorKind::PhoneTaken {
                owner_name: owner_name.clone(),
            }),
            PhoneCheckStatus::Pending | PhoneCheckStatus::Checking => {
                Some(ValidationErrorKind::PhoneCheckPending)
            }
            _ => None,
        }
    }

    fn is_final(&self) -> bool {
        matches!(
            self,
            PhoneCheckStatus::Available | PhoneCheckStatus::Taken { .. }
        )
    }
}

struct Shared {
    lookup: Arc<dyn PhoneLookupPort>,
    generation: AtomicU64,
    /// Number the current generation is about.
    number: Mutex<Option<String>>,
    cache: Mutex<HashMap<String, PhoneCheckStatus>>,
    status: watch::Sender<PhoneCheckStatus>,
}

impl Shared {
    /// Publishes `status` if `generation` is still current. The check runs
    /// under the channel's write lock so a stale task cannot overwrite a
    /// newer status.
    fn publish(&self, generation: u64, status: PhoneCheckStatus) -> bool {
        self.status.send_if_modified(|current| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *current = status;
            true
        })
    }
}

/// Debounced uniqueness check for the primary phone field.
pub struct PhoneUniquenessChecker {
    shared: Arc<Shared>,
    delay: Duration,
    debouncer: Debouncer,
}

impl PhoneUniquenessChecker {
    pub fn new(lookup: Arc<dyn PhoneLookupPort>, delay: Duration) -> Self {
        let (status, _) = watch::channel(PhoneCheckStatus::Idle);
        Self {
            shared: Arc::new(Shared {
                lookup,
                generation: AtomicU64::new(0),
                number: Mutex::new(None),
                cache: Mutex::new(HashMap::new()),
                status,
            }),
            delay,
            debouncer: Debouncer::new(),
        }
    }

    /// Feed the latest field value. Restarts the debounce delay.
    pub fn on_input(&self, raw: &str) {
        let value = raw.trim().to_string();
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.debouncer.cancel();

        if !rules::is_valid_phone(&value) {
            self.set_number(None);
            self.shared.publish(generation, PhoneCheckStatus::Idle);
            return;
        }
        self.set_number(Some(value.clone()));

        let cached = self
            .shared
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&value)
            .cloned();
        if let Some(status) = cached {
            debug!("phone check served from cache");
            self.shared.publish(generation, status);
            return;
        }

        self.shared.publish(generation, PhoneCheckStatus::Pending);
        let shared = Arc::clone(&self.shared);
        let span = info_span!("usecase.phone_check.lookup", generation);
        self.debouncer.schedule(
            self.delay,
            async move {
                if !shared.publish(generation, PhoneCheckStatus::Checking) {
                    return;
                }
                let status = match shared.lookup.lookup(&value).await {
                    Ok(lookup) if lookup.exists => PhoneCheckStatus::Taken {
                        owner_name: lookup.name,
                    },
                    Ok(_) => PhoneCheckStatus::Available,
                    Err(err) => {
                        warn!(error = %err, "phone lookup failed");
                        PhoneCheckStatus::Unknown {
                            reason: err.to_string(),
                        }
                    }
                };
                if status.is_final() {
                    shared
                        .cache
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .insert(value, status.clone());
                }
                if !shared.publish(generation, status) {
                    debug!("discarding stale phone check result");
                }
            }
            .instrument(span),
        );
    }

    pub fn current(&self) -> PhoneCheckStatus {
        self.shared.status.borrow().clone()
    }

    /// Status for `number`; `Idle` when the checker is tracking another value.
    pub fn status_for(&self, number: &str) -> PhoneCheckStatus {
        let tracked = self
            .shared
            .number
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if tracked.as_deref() == Some(number.trim()) {
            self.current()
        } else {
            PhoneCheckStatus::Idle
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<PhoneCheckStatus> {
        self.shared.status.subscribe()
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Abort any scheduled or running lookup and reset to `Idle`.
    pub fn cancel(&self) {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.debouncer.cancel();
        self.set_number(None);
        self.shared.publish(generation, PhoneCheckStatus::Idle);
    }

    /// Let any running lookup finish but ignore its result.
    pub fn detach(&self) {
        self.shared.generation.fetch_add(1, Ordering::SeqCst);
    }

    fn set_number(&self, number: Option<String>) {
        *self
            .shared
            .number
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = number;
    }
}
