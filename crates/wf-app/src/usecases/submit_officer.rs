use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{info, info_span, warn, Instrument};

use wf_core::officer::FormState;
use wf_core::ports::OfficerRegistrationPort;
use wf_core::submission::{
    CreateOfficerRequest, CreateOfficerResponse, SubmissionFailure, EXPECTED_USER_TYPE,
};

/// Use case for creating an officer from a validated form.
pub struct SubmitOfficer {
    registration: Arc<dyn OfficerRegistrationPort>,
    country_code: String,
}

impl SubmitOfficer {
    pub fn new(registration: Arc<dyn OfficerRegistrationPort>, country_code: impl Into<String>) -> Self {
        Self {
            registration,
            country_code: country_code.into(),
        }
    }

    /// Maps and sends the creation request.
    ///
    /// Resolves to `SubmissionFailure::Cancelled` as soon as `cancel` fires;
    /// the request future is dropped at that point.
    pub async fn execute(
        &self,
        form: &FormState,
        cancel: &CancellationToken,
    ) -> Result<CreateOfficerResponse, SubmissionFailure> {
        let photo = form
            .personal_details
            .profile_photo
            .clone()
            .ok_or_else(|| SubmissionFailure::InvalidForm("profile photo is missing".into()))?;
        let request = CreateOfficerRequest::from_form(form, &self.country_code)?;

        let span = info_span!(
            "usecase.submit_officer.execute",
            documents = request.document_verifications.len()
        );
        async {
            let response = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    info!("officer submission cancelled");
                    return Err(SubmissionFailure::Cancelled);
                }
                result = self.registration.create_officer(&request, &photo) => result?,
            };

            if !response.has_expected_user_type() {
                warn!(
                    officer_id = %response.id,
                    user_type = ?response.user_type,
                    expected = EXPECTED_USER_TYPE,
                    "created officer has unexpected user type"
                );
            }
            info!(officer_id = %response.id, status = ?response.status, "officer created");
            Ok(response)
        }
        .instrument(span)
        .await
    }
}
