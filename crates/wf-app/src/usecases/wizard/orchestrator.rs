//! Onboarding wizard orchestrator.
//!
//! This module coordinates the wizard state machine and its side effects.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, warn, Instrument};

use wf_core::directory::{Area, AreaManager};
use wf_core::draft::DraftSnapshot;
use wf_core::officer::{FormError, FormState};
use wf_core::ports::{ClockPort, DraftStoreError};
use wf_core::validation::{
    validate_step, Field, FieldError, StepFailure, ValidationContext, ValidationErrorKind,
    ValidationReport,
};
use wf_core::wizard::{
    WizardAction, WizardEvent, WizardMachine, WizardPolicy, WizardState, WizardStep,
};

use crate::usecases::draft::{ClearDraft, LoadDraft, SaveDraft};
use crate::usecases::officer_list::OfficerListStore;
use crate::usecases::phone_check::{PhoneCheckStatus, PhoneUniquenessChecker};
use crate::usecases::submit_officer::SubmitOfficer;
use crate::usecases::wizard::context::WizardContext;
use crate::usecases::wizard::settings::WizardSettings;

/// Errors produced by the wizard orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("draft storage failed: {0}")]
    Draft(#[from] DraftStoreError),
    #[error("form update rejected: {0}")]
    Form(#[from] FormError),
    #[error("form is not editable in state {0}")]
    NotEditable(&'static str),
    #[error("wizard is closed")]
    Closed,
}

fn state_name(state: &WizardState) -> &'static str {
    match state {
        WizardState::DraftPrompt { .. } => "draft_prompt",
        WizardState::Editing { .. } => "editing",
        WizardState::SaveProgressConfirm { .. } => "save_progress_confirm",
        WizardState::ConfirmDiscard { .. } => "confirm_discard",
        WizardState::Submitting => "submitting",
        WizardState::Success { .. } => "success",
        WizardState::Discarded => "discarded",
    }
}

/// Orchestrator that drives wizard state and side effects.
pub struct WizardOrchestrator {
    context: Arc<WizardContext>,
    settings: WizardSettings,
    policy: WizardPolicy,

    mounted: AtomicBool,
    closed: AtomicBool,
    leave_requested: AtomicBool,
    /// Draft found at mount, held until the operator resumes or discards it.
    pending_draft: Mutex<Option<DraftSnapshot>>,
    cancel: CancellationToken,

    save_draft: Arc<SaveDraft>,
    load_draft: Arc<LoadDraft>,
    clear_draft: Arc<ClearDraft>,
    submit_officer: Arc<SubmitOfficer>,
    phone_checker: PhoneUniquenessChecker,
    officer_list: Arc<OfficerListStore>,
    clock: Arc<dyn ClockPort>,
}

impl WizardOrchestrator {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        settings: WizardSettings,
        save_draft: Arc<SaveDraft>,
        load_draft: Arc<LoadDraft>,
        clear_draft: Arc<ClearDraft>,
        submit_officer: Arc<SubmitOfficer>,
        phone_checker: PhoneUniquenessChecker,
        officer_list: Arc<OfficerListStore>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let policy = WizardPolicy {
            autosave_on_advance: settings.autosave_on_advance,
        };
        Self {
            context: WizardContext::default().arc(),
            settings,
            policy,
            mounted: AtomicBool::new(false),
            closed: AtomicBool::new(false),
            leave_requested: AtomicBool::new(false),
            pending_draft: Mutex::new(None),
            cancel: CancellationToken::new(),
            save_draft,
            load_draft,
            clear_draft,
            submit_officer,
            phone_checker,
            officer_list,
            clock,
        }
    }

    /// Loads the stored draft, if any, and decides the initial state.
    /// Later calls return the current state without touching the store.
    pub async fn mount(&self) -> Result<WizardState, WizardError> {
        self.ensure_open()?;
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        if self.mounted.load(Ordering::SeqCst) {
            return Ok(self.context.get_state().await);
        }

        let state = match self.load_draft.execute().await? {
            Some(snapshot) => {
                let state = WizardState::DraftPrompt {
                    resume_step: snapshot.resume_step(),
                    saved_at: snapshot.metadata.saved_at,
                };
                *self.pending_draft.lock().await = Some(snapshot);
                state
            }
            None => WizardState::editing(WizardStep::FIRST),
        };
        info!(state = state_name(&state), "wizard mounted");
        self.context.set_state(state.clone()).await;
        self.mounted.store(true, Ordering::SeqCst);
        Ok(state)
    }

    pub async fn state(&self) -> WizardState {
        self.context.get_state().await
    }

    pub async fn form(&self) -> FormState {
        self.context.get_form().await
    }

    pub fn subscribe_state(&self) -> watch::Receiver<WizardState> {
        self.context.subscribe()
    }

    pub fn phone_status(&self) -> PhoneCheckStatus {
        self.phone_checker.current()
    }

    pub fn subscribe_phone_status(&self) -> watch::Receiver<PhoneCheckStatus> {
        self.phone_checker.subscribe()
    }

    pub fn settings(&self) -> &WizardSettings {
        &self.settings
    }

    /// Whether the flow ended and the shell should show the officer listing.
    pub fn should_leave(&self) -> bool {
        self.leave_requested.load(Ordering::SeqCst)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    // ---- form editing ----

    pub async fn edit(&self, f: impl FnOnce(&mut FormState)) -> Result<(), WizardError> {
        self.try_edit(|form| {
            f(form);
            Ok(())
        })
        .await
    }

    /// Applies a fallible edit. A change to the primary phone restarts the
    /// uniqueness check.
    ///
    /// Runs under the dispatch lock, so an edit issued while a transition is
    /// in flight waits for it and is then checked against the new state.
    pub async fn try_edit(
        &self,
        f: impl FnOnce(&mut FormState) -> Result<(), FormError>,
    ) -> Result<(), WizardError> {
        self.ensure_open()?;
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        self.ensure_editable().await?;
        let (before, after, result) = self
            .context
            .with_form(|form| {
                let before = form.contact_details.primary_phone.clone();
                let result = f(form);
                (before, form.contact_details.primary_phone.clone(), result)
            })
            .await;
        if before != after {
            self.phone_checker.on_input(&after);
        }
        result.map_err(WizardError::from)
    }

    /// Selects a duty area; returns whether the chosen manager was cleared.
    pub async fn select_area(&self, area: &Area) -> Result<bool, WizardError> {
        self.ensure_open()?;
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        self.ensure_editable().await?;
        let cleared = self
            .context
            .with_form(|form| form.employment_details.select_area(area))
            .await;
        if cleared {
            debug!(area = %area.id, "area manager cleared after area change");
        }
        Ok(cleared)
    }

    pub async fn select_manager(&self, manager: &AreaManager) -> Result<(), WizardError> {
        self.try_edit(|form| form.employment_details.select_manager(manager))
            .await
    }

    // ---- flow events ----

    pub async fn continue_draft(&self) -> Result<WizardState, WizardError> {
        self.dispatch(WizardEvent::ContinueDraft).await
    }

    pub async fn start_fresh(&self) -> Result<WizardState, WizardError> {
        self.dispatch(WizardEvent::StartFresh).await
    }

    pub async fn next(&self) -> Result<WizardState, WizardError> {
        self.dispatch(WizardEvent::Next {
            report: ValidationReport::default(),
        })
        .await
    }

    pub async fn previous(&self) -> Result<WizardState, WizardError> {
        self.dispatch(WizardEvent::Previous).await
    }

    pub async fn request_save_draft(&self) -> Result<WizardState, WizardError> {
        self.dispatch(WizardEvent::RequestSaveDraft).await
    }

    pub async fn confirm_save_draft(&self) -> Result<WizardState, WizardError> {
        self.dispatch(WizardEvent::ConfirmSaveDraft).await
    }

    pub async fn cancel_save_draft(&self) -> Result<WizardState, WizardError> {
        self.dispatch(WizardEvent::CancelSaveDraft).await
    }

    /// Validates every step and, when all pass, sends the creation request.
    /// Returns once the request resolved.
    pub async fn submit(&self) -> Result<WizardState, WizardError> {
        self.dispatch(WizardEvent::Submit { blocked: None }).await
    }

    pub async fn request_discard(&self) -> Result<WizardState, WizardError> {
        self.dispatch(WizardEvent::RequestDiscard).await
    }

    pub async fn confirm_discard(&self) -> Result<WizardState, WizardError> {
        self.dispatch(WizardEvent::ConfirmDiscard).await
    }

    pub async fn cancel_discard(&self) -> Result<WizardState, WizardError> {
        self.dispatch(WizardEvent::CancelDiscard).await
    }

    pub async fn dismiss_banner(&self) -> Result<WizardState, WizardError> {
        self.dispatch(WizardEvent::DismissBanner).await
    }

    /// Ends the wizard session. Depending on `cancel_inflight_on_close`,
    /// in-flight work is aborted or left to finish with its result ignored.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        if self.settings.cancel_inflight_on_close {
            self.cancel.cancel();
            self.phone_checker.cancel();
        } else {
            self.phone_checker.detach();
        }
        info!(
            cancel_inflight = self.settings.cancel_inflight_on_close,
            "wizard closed"
        );
    }

    // ---- internals ----

    fn ensure_open(&self) -> Result<(), WizardError> {
        if self.is_closed() {
            return Err(WizardError::Closed);
        }
        Ok(())
    }

    async fn ensure_editable(&self) -> Result<(), WizardError> {
        self.ensure_open()?;
        match self.context.get_state().await {
            WizardState::Editing { .. } => Ok(()),
            other => Err(WizardError::NotEditable(state_name(&other))),
        }
    }

    fn validation_context(&self) -> ValidationContext<'_> {
        ValidationContext {
            today: self.clock.today(),
            documents: &self.settings.documents,
        }
    }

    /// Uniqueness verdict for the primary phone. An unchecked valid number
    /// starts a check and counts as pending.
    fn phone_blocking_error(&self, phone: &str) -> Option<ValidationErrorKind> {
        match self.phone_checker.status_for(phone) {
            PhoneCheckStatus::Idle => {
                self.phone_checker.on_input(phone);
                Some(ValidationErrorKind::PhoneCheckPending)
            }
            status => status.blocking_error(),
        }
    }

    fn validate(&self, step: WizardStep, form: &FormState) -> ValidationReport {
        let mut report = validate_step(step, form, &self.validation_context());
        if step == WizardStep::Contact && !report.has_error(Field::PrimaryPhone) {
            if let Some(kind) = self.phone_blocking_error(&form.contact_details.primary_phone) {
                report.push(FieldError::new(Field::PrimaryPhone, kind));
            }
        }
        report
    }

    fn first_failure(&self, form: &FormState) -> Option<StepFailure> {
        WizardStep::ALL.iter().copied().find_map(|step| {
            let report = self.validate(step, form);
            (!report.is_ok()).then_some(StepFailure { step, report })
        })
    }

    /// Fills validation results into events that carry them.
    async fn capture_context(&self, event: WizardEvent) -> WizardEvent {
        match event {
            WizardEvent::Next { .. } => match self.context.get_state().await {
                WizardState::Editing { step, .. } => {
                    let form = self.context.get_form().await;
                    WizardEvent::Next {
                        report: self.validate(step, &form),
                    }
                }
                _ => event,
            },
            WizardEvent::Submit { .. } => {
                let form = self.context.get_form().await;
                WizardEvent::Submit {
                    blocked: self.first_failure(&form),
                }
            }
            other => other,
        }
    }

    async fn dispatch(&self, event: WizardEvent) -> Result<WizardState, WizardError> {
        self.ensure_open()?;
        // Acquire dispatch lock to serialize concurrent dispatch calls.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let event = self.capture_context(event).await;

        let span = info_span!("usecase.wizard.dispatch", event = event.name());
        async {
            let mut current = self.context.get_state().await;
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = state_name(&current);
                let event_name = event.name();
                let (next, actions) = WizardMachine::transition(current, event, &self.policy);
                info!(from, to = state_name(&next), event = event_name, "wizard state transition");
                self.context.set_state(next.clone()).await;
                current = next;
                let follow_up_events = self.execute_actions(actions).await?;
                pending_events.extend(follow_up_events);
            }

            Ok(current)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(
        &self,
        actions: Vec<WizardAction>,
    ) -> Result<Vec<WizardEvent>, WizardError> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "wizard executing action");
            match action {
                WizardAction::RestoreDraft => {
                    if let Some(snapshot) = self.pending_draft.lock().await.take() {
                        let phone = snapshot.form.contact_details.primary_phone.clone();
                        self.context.replace_form(snapshot.form).await;
                        self.phone_checker.on_input(&phone);
                    }
                }
                WizardAction::ResetForm => {
                    self.pending_draft.lock().await.take();
                    self.context.replace_form(FormState::default()).await;
                    self.phone_checker.cancel();
                }
                WizardAction::SaveDraft { step } => {
                    let form = self.context.get_form().await;
                    self.save_draft.execute(&form, step).await?;
                }
                WizardAction::ClearDraft => {
                    if let Err(err) = self.clear_draft.execute().await {
                        warn!(error = %err, "failed to clear draft");
                    }
                }
                WizardAction::SubmitOfficer => {
                    let form = self.context.get_form().await;
                    let result = self.submit_officer.execute(&form, &self.cancel).await;
                    if self.is_closed() {
                        info!("wizard closed during submission, ignoring result");
                        continue;
                    }
                    follow_up_events.push(match result {
                        Ok(response) => WizardEvent::SubmissionSucceeded {
                            officer_id: response.id,
                        },
                        Err(failure) => {
                            warn!(failure = %failure, "officer submission failed");
                            WizardEvent::SubmissionFailed { failure }
                        }
                    });
                }
                WizardAction::RefreshOfficerList => {
                    let agency = self.context.get_form().await.employment_details.agency_id;
                    match agency {
                        Some(agency) => {
                            self.officer_list.invalidate(&agency).await;
                            if let Err(err) = self.officer_list.refresh(&agency).await {
                                warn!(error = %err, "officer list refresh after creation failed");
                            }
                        }
                        None => self.officer_list.invalidate_all().await,
                    }
                }
                WizardAction::NavigateToListing => {
                    self.leave_requested.store(true, Ordering::SeqCst);
                }
            }
        }
        Ok(follow_up_events)
    }
}
