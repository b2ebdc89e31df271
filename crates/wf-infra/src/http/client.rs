use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info_span, warn, Instrument};

use wf_core::directory::{Area, AreaManager};
use wf_core::ids::AgencyId;
use wf_core::officer::{OfficerSummary, PhotoRef};
use wf_core::ports::{
    AssignmentDirectoryPort, OfficerListPort, OfficerRegistrationPort, PhoneLookup,
    PhoneLookupPort,
};
use wf_core::submission::{CreateOfficerRequest, CreateOfficerResponse, SubmissionFailure};

use crate::http::dto::{ListEnvelope, PhoneLookupDto};
use crate::http::error::{error_message, HttpClientError};

const PHOTO_PART: &str = "profilePhoto";

#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub auth_token: Option<String>,
}

impl HttpClientConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Self::DEFAULT_TIMEOUT,
            auth_token: None,
        }
    }
}

/// reqwest-backed client for every endpoint the onboarding flow talks to.
pub struct HttpConsoleClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl HttpConsoleClient {
    pub fn new(config: HttpClientConfig) -> Result<Self, HttpClientError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(HttpClientError::Config("base url is empty".into()));
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| HttpClientError::Config(e.to_string()))?;
        Ok(Self {
            client,
            base_url,
            auth_token: config.auth_token.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, HttpClientError> {
        let request = self.authorized(self.client.get(self.endpoint(path)).query(query));
        let response = request.send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, HttpClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = status.canonical_reason().unwrap_or("request failed");
            return Err(HttpClientError::Status {
                status: status.as_u16(),
                message: error_message(&body, reason),
            });
        }
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| HttpClientError::Decode {
            status: status.as_u16(),
            message: e.to_string(),
        })
    }

    /// Builds the creation form: the photo file part plus one JSON text part
    /// per request section.
    async fn build_form(
        request: &CreateOfficerRequest,
        photo: &PhotoRef,
    ) -> Result<Form, SubmissionFailure> {
        let bytes = tokio::fs::read(&photo.path).await.map_err(|e| {
            SubmissionFailure::PhotoUnreadable(format!("{}: {}", photo.path.display(), e))
        })?;
        let size_bytes = bytes.len();
        let part = Part::bytes(bytes)
            .file_name(photo.file_name.clone())
            .mime_str(&photo.content_type)
            .map_err(|e| {
                SubmissionFailure::PhotoUnreadable(format!(
                    "invalid content type {}: {}",
                    photo.content_type, e
                ))
            })?;
        debug!(size_bytes, file_name = %photo.file_name, "profile photo attached");

        let fields = request
            .to_multipart_fields()
            .map_err(|e| SubmissionFailure::InvalidForm(e.to_string()))?;
        let form = fields
            .into_iter()
            .fold(Form::new().part(PHOTO_PART, part), |form, (name, value)| {
                form.text(name, value)
            });
        Ok(form)
    }
}

#[async_trait]
impl OfficerRegistrationPort for HttpConsoleClient {
    async fn create_officer(
        &self,
        request: &CreateOfficerRequest,
        photo: &PhotoRef,
    ) -> Result<CreateOfficerResponse, SubmissionFailure> {
        let span = info_span!(
            "infra.http.create_officer",
            agency_id = %request.employment_details.agency_id,
        );
        async {
            let form = Self::build_form(request, photo).await?;
            let response = self
                .authorized(self.client.post(self.endpoint("guards")).multipart(form))
                .send()
                .await
                .map_err(HttpClientError::from)?;
            let created: CreateOfficerResponse = Self::decode(response).await.map_err(|e| {
                warn!(error = %e, "officer creation rejected");
                e
            })?;
            Ok(created)
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl PhoneLookupPort for HttpConsoleClient {
    async fn lookup(&self, number: &str) -> anyhow::Result<PhoneLookup> {
        let path = format!("guards/phone-lookup/{}", number.trim());
        let dto: PhoneLookupDto = self
            .get_json(&path, &[])
            .instrument(info_span!("infra.http.phone_lookup"))
            .await?;
        Ok(dto.into())
    }
}

#[async_trait]
impl AssignmentDirectoryPort for HttpConsoleClient {
    async fn list_areas(&self, agency: &AgencyId) -> anyhow::Result<Vec<Area>> {
        let areas: ListEnvelope<Area> = self
            .get_json("areas", &[("agencyId", agency.as_str())])
            .instrument(info_span!("infra.http.list_areas", agency = %agency))
            .await?;
        Ok(areas.into_vec())
    }

    async fn list_area_managers(&self, agency: &AgencyId) -> anyhow::Result<Vec<AreaManager>> {
        let managers: ListEnvelope<AreaManager> = self
            .get_json("area-managers", &[("agencyId", agency.as_str())])
            .instrument(info_span!("infra.http.list_area_managers", agency = %agency))
            .await?;
        Ok(managers.into_vec())
    }
}

#[async_trait]
impl OfficerListPort for HttpConsoleClient {
    async fn list_officers(&self, agency: &AgencyId) -> anyhow::Result<Vec<OfficerSummary>> {
        let officers: ListEnvelope<OfficerSummary> = self
            .get_json("guards", &[("agencyId", agency.as_str())])
            .instrument(info_span!("infra.http.list_officers", agency = %agency))
            .await?;
        Ok(officers.into_vec())
    }
}
