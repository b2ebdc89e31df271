use async_trait::async_trait;

use crate::officer::PhotoRef;
use crate::submission::{CreateOfficerRequest, CreateOfficerResponse, SubmissionFailure};

/// Sends the officer creation request together with the profile photo.
#[async_trait]
pub trait OfficerRegistrationPort: Send + Sync {
    async fn create_officer(
        &self,
        request: &CreateOfficerRequest,
        photo: &PhotoRef,
    ) -> Result<CreateOfficerResponse, SubmissionFailure>;
}
