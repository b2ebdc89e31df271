//! Onboarding wizard state machine.
//!
//! Defines a pure state transition function for the officer onboarding flow.
//! Anything that needs I/O or the current form (validation, drafts, the
//! creation request) is either captured into the event by the caller or
//! returned as a [`WizardAction`] for the caller to execute.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::OfficerId;
use crate::submission::SubmissionFailure;
use crate::validation::{FieldError, StepFailure, ValidationReport};
use crate::wizard::WizardStep;

/// Wizard flow state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardState {
    /// A stored draft was found at mount; the user chooses to resume or
    /// start over.
    DraftPrompt {
        resume_step: WizardStep,
        saved_at: DateTime<Utc>,
    },
    /// Editing one step.
    Editing {
        step: WizardStep,
        errors: Vec<FieldError>,
        banner: Option<SubmissionFailure>,
    },
    /// "Save progress?" confirmation over a step.
    SaveProgressConfirm { step: WizardStep },
    /// "Discard this officer?" confirmation over a step.
    ConfirmDiscard { step: WizardStep },
    /// Creation request in flight.
    Submitting,
    /// Officer created.
    Success { officer_id: OfficerId },
    /// Input and draft dropped by the user.
    Discarded,
}

impl WizardState {
    pub fn editing(step: WizardStep) -> Self {
        WizardState::Editing {
            step,
            errors: Vec::new(),
            banner: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardState::Success { .. } | WizardState::Discarded)
    }

    /// Step visible behind the current state, if any.
    pub fn step(&self) -> Option<WizardStep> {
        match self {
            WizardState::Editing { step, .. }
            | WizardState::SaveProgressConfirm { step }
            | WizardState::ConfirmDiscard { step } => Some(*step),
            WizardState::Submitting => Some(WizardStep::LAST),
            _ => None,
        }
    }
}

/// Events that drive the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardEvent {
    /// Resume the stored draft.
    ContinueDraft,
    /// Ignore the stored draft and start with an empty form.
    StartFresh,
    /// Advance; carries the validation report of the current step.
    Next { report: ValidationReport },
    /// Go back one step without validation.
    Previous,
    /// Open the save-progress confirmation.
    RequestSaveDraft,
    ConfirmSaveDraft,
    CancelSaveDraft,
    /// Submit from the last step; carries the first failing step, if any.
    Submit { blocked: Option<StepFailure> },
    /// Creation request resolved (orchestrator callback).
    SubmissionSucceeded { officer_id: OfficerId },
    /// Creation request failed (orchestrator callback).
    SubmissionFailed { failure: SubmissionFailure },
    /// Open the discard confirmation.
    RequestDiscard,
    ConfirmDiscard,
    CancelDiscard,
    /// Hide the submission-failure banner.
    DismissBanner,
}

impl WizardEvent {
    /// Variant name, for logs that must not carry form contents.
    pub fn name(&self) -> &'static str {
        match self {
            WizardEvent::ContinueDraft => "continue_draft",
            WizardEvent::StartFresh => "start_fresh",
            WizardEvent::Next { .. } => "next",
            WizardEvent::Previous => "previous",
            WizardEvent::RequestSaveDraft => "request_save_draft",
            WizardEvent::ConfirmSaveDraft => "confirm_save_draft",
            WizardEvent::CancelSaveDraft => "cancel_save_draft",
            WizardEvent::Submit { .. } => "submit",
            WizardEvent::SubmissionSucceeded { .. } => "submission_succeeded",
            WizardEvent::SubmissionFailed { .. } => "submission_failed",
            WizardEvent::RequestDiscard => "request_discard",
            WizardEvent::ConfirmDiscard => "confirm_discard",
            WizardEvent::CancelDiscard => "cancel_discard",
            WizardEvent::DismissBanner => "dismiss_banner",
        }
    }
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardAction {
    /// Load the stored draft into the form.
    RestoreDraft,
    /// Replace the form with an empty one.
    ResetForm,
    /// Persist the form with `step` as the progress marker.
    SaveDraft { step: WizardStep },
    /// Remove the stored draft.
    ClearDraft,
    /// Map the form and send the creation request.
    SubmitOfficer,
    /// Invalidate and refetch the officer listing.
    RefreshOfficerList,
    /// Leave the wizard for the officer listing.
    NavigateToListing,
}

/// Behaviour switches that change transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardPolicy {
    /// Persist a draft on every successful "Next".
    pub autosave_on_advance: bool,
}

impl Default for WizardPolicy {
    fn default() -> Self {
        Self {
            autosave_on_advance: true,
        }
    }
}

/// Pure wizard state machine.
pub struct WizardMachine;

impl WizardMachine {
    pub fn transition(
        state: WizardState,
        event: WizardEvent,
        policy: &WizardPolicy,
    ) -> (WizardState, Vec<WizardAction>) {
        match (state, event) {
            (WizardState::DraftPrompt { resume_step, .. }, WizardEvent::ContinueDraft) => (
                WizardState::editing(resume_step),
                vec![WizardAction::RestoreDraft],
            ),
            (WizardState::DraftPrompt { .. }, WizardEvent::StartFresh) => (
                WizardState::editing(WizardStep::FIRST),
                vec![WizardAction::ResetForm, WizardAction::ClearDraft],
            ),
            (WizardState::Editing { step, banner, .. }, WizardEvent::Next { report }) => {
                if !report.is_ok() {
                    return (
                        WizardState::Editing {
                            step,
                            errors: report.into_errors(),
                            banner,
                        },
                        Vec::new(),
                    );
                }
                match step.next() {
                    Some(next) => {
                        let actions = if policy.autosave_on_advance {
                            vec![WizardAction::SaveDraft { step: next }]
                        } else {
                            Vec::new()
                        };
                        (WizardState::editing(next), actions)
                    }
                    None => (
                        WizardState::Editing {
                            step,
                            errors: Vec::new(),
                            banner,
                        },
                        Vec::new(),
                    ),
                }
            }
            (WizardState::Editing { step, .. }, WizardEvent::Previous) => {
                (WizardState::editing(step.previous().unwrap_or(step)), Vec::new())
            }
            (WizardState::Editing { step, .. }, WizardEvent::RequestSaveDraft) => {
                (WizardState::SaveProgressConfirm { step }, Vec::new())
            }
            (WizardState::SaveProgressConfirm { step }, WizardEvent::ConfirmSaveDraft) => (
                WizardState::editing(step),
                vec![WizardAction::SaveDraft { step }],
            ),
            (WizardState::SaveProgressConfirm { step }, WizardEvent::CancelSaveDraft) => {
                (WizardState::editing(step), Vec::new())
            }
            (
                WizardState::Editing {
                    step: WizardStep::Documents,
                    ..
                },
                WizardEvent::Submit { blocked },
            ) => match blocked {
                None => (WizardState::Submitting, vec![WizardAction::SubmitOfficer]),
                Some(failure) => (
                    WizardState::Editing {
                        step: failure.step,
                        errors: failure.report.into_errors(),
                        banner: None,
                    },
                    Vec::new(),
                ),
            },
            (WizardState::Submitting, WizardEvent::SubmissionSucceeded { officer_id }) => (
                WizardState::Success { officer_id },
                vec![
                    WizardAction::ClearDraft,
                    WizardAction::RefreshOfficerList,
                    WizardAction::ResetForm,
                    WizardAction::NavigateToListing,
                ],
            ),
            (WizardState::Submitting, WizardEvent::SubmissionFailed { failure }) => (
                WizardState::Editing {
                    step: WizardStep::LAST,
                    errors: Vec::new(),
                    banner: Some(failure),
                },
                Vec::new(),
            ),
            (WizardState::Editing { step, .. }, WizardEvent::RequestDiscard) => {
                (WizardState::ConfirmDiscard { step }, Vec::new())
            }
            (WizardState::ConfirmDiscard { .. }, WizardEvent::ConfirmDiscard) => (
                WizardState::Discarded,
                vec![
                    WizardAction::ResetForm,
                    WizardAction::ClearDraft,
                    WizardAction::NavigateToListing,
                ],
            ),
            (WizardState::ConfirmDiscard { step }, WizardEvent::CancelDiscard) => {
                (WizardState::editing(step), Vec::new())
            }
            (WizardState::Editing { step, errors, .. }, WizardEvent::DismissBanner) => (
                WizardState::Editing {
                    step,
                    errors,
                    banner: None,
                },
                Vec::new(),
            ),
            (state, _event) => (state, Vec::new()),
        }
    }
}
