pub mod dto;

use std::collections::HashMap;
use std::env;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::AppError;
use crate::models::{Course, ReviewStatus};

pub const DEFAULT_BASE_URL: &str = "https://fastapi-backend-um76.onrender.com";

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub base_url: String,
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn new_from_env() -> Self {
        let base_url = env::var("CATALOG_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }
}

/// Remote service holding the proposals.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Returns the whole collection keyed by course id.
    async fn fetch_courses(&self) -> Result<HashMap<String, Course>, AppError>;
    async fn update_course_status(
        &self,
        course_id: &str,
        status: ReviewStatus,
        observations: &str,
    ) -> Result<(), AppError>;
}

pub struct HttpCatalogClient {
    client: Client,
    config: CatalogConfig,
}

impl HttpCatalogClient {
    pub fn new(config: CatalogConfig) -> Result<Self, AppError> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }
}

/// Decodes the `/courses` payload. The body must be a JSON object; entries that do not
/// decode are dropped with a warning so one bad record does not hide the rest. Each
/// course's `id` is set to its key.
pub fn parse_course_map(body: &str) -> Result<HashMap<String, Course>, AppError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let serde_json::Value::Object(entries) = value else {
        return Err(AppError::Fetch("Invalid data format received from the server".to_string()));
    };

    let mut courses = HashMap::with_capacity(entries.len());
    for (key, entry) in entries {
        match serde_json::from_value::<Course>(entry) {
            Ok(mut course) => {
                // The collection key is the course identity; a diverging record id is ignored.
                if course.id != key {
                    if !course.id.trim().is_empty() {
                        tracing::debug!("Course {} carries id {:?}, using the key", key, course.id);
                    }
                    course.id = key.clone();
                }
                courses.insert(key, course);
            }
            Err(e) => {
                tracing::warn!("Failed to parse course {}: {}", key, e);
            }
        }
    }
    Ok(courses)
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch_courses(&self) -> Result<HashMap<String, Course>, AppError> {
        let url = format!("{}/courses", self.config.base_url);

        let response = self.client
            .get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Fetch(format!("HTTP error! status: {}", status)));
        }

        let body_text = response.text().await?;
        let courses = parse_course_map(&body_text)?;
        tracing::debug!("Fetched {} courses from {}", courses.len(), url);
        Ok(courses)
    }

    async fn update_course_status(
        &self,
        course_id: &str,
        status: ReviewStatus,
        observations: &str,
    ) -> Result<(), AppError> {
        let url = format!("{}/update-course-status", self.config.base_url);
        let request_body = dto::UpdateCourseStatusRequest {
            course_id: course_id.to_string(),
            status: status.label().to_string(),
            observations: observations.to_string(),
        };

        let response = self.client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Update(format!(
                "Failed to update course status on the server: {}",
                status
            )));
        }

        Ok(())
    }
}

pub struct NoopCatalogClient;

#[async_trait]
impl CatalogClient for NoopCatalogClient {
    async fn fetch_courses(&self) -> Result<HashMap<String, Course>, AppError> {
        Ok(HashMap::new())
    }

    async fn update_course_status(
        &self,
        _course_id: &str,
        _status: ReviewStatus,
        _observations: &str,
    ) -> Result<(), AppError> {
        Ok(())
    }
}
