pub mod dto;

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use crate::error::AppError;
use crate::models::Enrollment;

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_token: String,
}

impl ApiConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let base_url = env::var("SKILLUP_API_URL")
            .map_err(|_| AppError::Config("SKILLUP_API_URL is not set".to_string()))?;
        let api_token = env::var("SKILLUP_API_TOKEN")
            .map_err(|_| AppError::Config("SKILLUP_API_TOKEN is not set".to_string()))?;

        Ok(Self {
            base_url,
            api_token,
        })
    }
}

/// The remote source of truth for the student's enrollments. The rest of
/// the crate only sees this seam; the HTTP client below is one
/// implementation of it.
#[async_trait]
pub trait EnrollmentSource: Send + Sync {
    async fn fetch_enrollments(&self) -> Result<Vec<Enrollment>, AppError>;
    async fn create_enrollment(&self, schedule_id: &str) -> Result<(), AppError>;
    async fn delete_enrollment(&self, enrollment_id: &str) -> Result<(), AppError>;
}

pub struct SkillUpHttpClient {
    client: Client,
    config: ApiConfig,
}

impl SkillUpHttpClient {
    pub fn new(config: ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl EnrollmentSource for SkillUpHttpClient {
    async fn fetch_enrollments(&self) -> Result<Vec<Enrollment>, AppError> {
        let response = self
            .client
            .get(self.url("/enrollments"))
            .header("Authorization", format!("Bearer {}", self.config.api_token))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Api(format!(
                "Fetching enrollments failed: {} {}",
                status, body
            )));
        }

        let body_text = response.text().await.unwrap_or_default();
        let records: Vec<serde_json::Value> = serde_json::from_str(&body_text)
            .map_err(|e| AppError::Parse(format!("Enrollment list is not a JSON array: {}", e)))?;

        // Decode record by record so one malformed entry does not take
        // the whole snapshot down with it.
        let mut enrollments = Vec::new();
        for record in records {
            match serde_json::from_value::<dto::EnrollmentDto>(record) {
                Ok(dto) => enrollments.push(dto.into()),
                Err(e) => {
                    warn!("Failed to parse enrollment record: {}", e);
                }
            }
        }

        Ok(enrollments)
    }

    async fn create_enrollment(&self, schedule_id: &str) -> Result<(), AppError> {
        let request_body = dto::EnrollRequest {
            schedule_id: schedule_id.to_string(),
        };

        let response = self
            .client
            .post(self.url("/enrollments"))
            .header("Authorization", format!("Bearer {}", self.config.api_token))
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Api(format!(
                "Enrolling in schedule {} failed: {} {}",
                schedule_id, status, body
            )));
        }

        Ok(())
    }

    async fn delete_enrollment(&self, enrollment_id: &str) -> Result<(), AppError> {
        let response = self
            .client
            .delete(self.url(&format!("/enrollments/{}", enrollment_id)))
            .header("Authorization", format!("Bearer {}", self.config.api_token))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Api(format!(
                "Unenrolling {} failed: {} {}",
                enrollment_id, status, body
            )));
        }

        Ok(())
    }
}

/// Source that reports no enrollments and accepts every mutation.
pub struct NoopEnrollmentSource;

#[async_trait]
impl EnrollmentSource for NoopEnrollmentSource {
    async fn fetch_enrollments(&self) -> Result<Vec<Enrollment>, AppError> {
        Ok(Vec::new())
    }

    async fn create_enrollment(&self, _schedule_id: &str) -> Result<(), AppError> {
        Ok(())
    }

    async fn delete_enrollment(&self, _enrollment_id: &str) -> Result<(), AppError> {
        Ok(())
    }
}
