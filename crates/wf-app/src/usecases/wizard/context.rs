use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use wf_core::officer::FormState;
use wf_core::wizard::WizardState;

/// Shared wizard context: flow state, form and the dispatch lock.
///
/// ## Lock Ordering
/// When acquiring several locks, acquire `dispatch_lock` first, then `state`,
/// then `form`. Readers (`get_state`, `get_form`) never take `dispatch_lock`.
pub struct WizardContext {
    state: Mutex<WizardState>,
    form: Mutex<FormState>,
    /// Serializes dispatch calls so a transition and its actions run as one.
    dispatch_lock: Mutex<()>,
    /// Publishes every state change to observers.
    state_tx: watch::Sender<WizardState>,
}

impl WizardContext {
    pub fn new(initial_state: WizardState) -> Self {
        let (state_tx, _) = watch::channel(initial_state.clone());
        Self {
            state: Mutex::new(initial_state),
            form: Mutex::new(FormState::default()),
            dispatch_lock: Mutex::new(()),
            state_tx,
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub async fn get_state(&self) -> WizardState {
        self.state.lock().await.clone()
    }

    /// Should only be called with `dispatch_lock` held.
    pub async fn set_state(&self, state: WizardState) {
        let mut guard = self.state.lock().await;
        *guard = state.clone();
        self.state_tx.send_replace(state);
    }

    pub async fn get_form(&self) -> FormState {
        self.form.lock().await.clone()
    }

    pub async fn replace_form(&self, form: FormState) {
        *self.form.lock().await = form;
    }

    /// Runs `f` against the form under its lock.
    pub async fn with_form<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> R {
        let mut guard = self.form.lock().await;
        f(&mut guard)
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    pub fn subscribe(&self) -> watch::Receiver<WizardState> {
        self.state_tx.subscribe()
    }
}

impl Default for WizardContext {
    fn default() -> Self {
        Self::new(WizardState::editing(wf_core::wizard::WizardStep::FIRST))
    }
}
