use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::{info, warn};

use crate::catalog::CatalogClient;
use crate::error::{AppError, FETCH_FAILED_MESSAGE, UPDATE_FAILED_MESSAGE};
use crate::models::{Course, ReviewStatus};

#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreState {
    pub courses: HashMap<String, Course>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub selected_course: Option<String>,
    /// Set once the first fetch has settled, whatever its outcome.
    pub has_loaded: bool,
    pub loaded_at: Option<DateTime<Utc>>,
}

/// Result of looking a course up for the detail page.
#[derive(Debug, Clone, PartialEq)]
pub enum CourseLookup {
    Loading,
    Found(Course),
    NotFound,
}

/// A speculative status write that has not been confirmed by the catalog yet.
///
/// `previous` is whatever sat under `course_id` when the write was made. If another
/// update for the same course was still in flight at that moment, this is that
/// update's speculative value, and reverting restores it rather than the last
/// confirmed state.
#[must_use = "a pending update must be committed or reverted"]
#[derive(Debug, Clone)]
pub struct PendingUpdate {
    pub course_id: String,
    pub previous: Option<Course>,
}

/// Owns the fetched collection. `fetch_courses` and the status update are the only
/// writers; everything else reads through `read()` or the cloning accessors.
pub struct CourseStore {
    client: Arc<dyn CatalogClient>,
    state: RwLock<StoreState>,
}

impl CourseStore {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self {
            client,
            state: RwLock::new(StoreState::default()),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().await
    }

    pub async fn snapshot(&self) -> StoreState {
        self.state.read().await.clone()
    }

    pub async fn course(&self, id: &str) -> Option<Course> {
        self.state.read().await.courses.get(id).cloned()
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    /// Replaces the whole collection with a fresh copy from the catalog.
    ///
    /// On failure the previous collection stays and `error` is set. Overlapping calls are
    /// not serialized: whichever response lands last wins.
    pub async fn fetch_courses(&self) {
        {
            let mut state = self.state.write().await;
            state.is_loading = true;
            state.error = None;
        }

        let outcome = self.client.fetch_courses().await;

        let mut state = self.state.write().await;
        state.is_loading = false;
        state.has_loaded = true;
        match outcome {
            Ok(courses) => {
                info!("Loaded {} courses", courses.len());
                state.courses = courses;
                state.loaded_at = Some(Utc::now());
            }
            Err(e) => {
                warn!("Error loading courses: {}", e);
                state.error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Snapshots the current record and writes the new status and observations over it.
    /// The write is visible to readers as soon as this returns.
    ///
    /// An unknown id gets a fresh record carrying only the review fields.
    pub async fn begin_status_update(
        &self,
        course_id: &str,
        status: ReviewStatus,
        observations: &str,
    ) -> PendingUpdate {
        let mut state = self.state.write().await;
        let previous = state.courses.get(course_id).cloned();

        let mut updated = previous.clone().unwrap_or_else(|| Course {
            id: course_id.to_string(),
            ..Course::default()
        });
        updated.status = status;
        updated.committee_notes = observations.to_string();
        state.courses.insert(course_id.to_string(), updated);
        state.error = None;

        PendingUpdate {
            course_id: course_id.to_string(),
            previous,
        }
    }

    /// Keeps the speculative value. The catalog response is not consulted.
    pub fn commit(&self, pending: PendingUpdate) {
        tracing::debug!("Status update for {} confirmed", pending.course_id);
    }

    /// Puts the snapshot back and records `message` as the shared error.
    pub async fn revert(&self, pending: PendingUpdate, message: &str) {
        let mut state = self.state.write().await;
        match pending.previous {
            Some(course) => {
                state.courses.insert(pending.course_id, course);
            }
            None => {
                state.courses.remove(&pending.course_id);
            }
        }
        state.error = Some(message.to_string());
    }

    /// Optimistic status update: speculative write, catalog call, then commit or revert.
    pub async fn update_course_status(
        &self,
        course_id: &str,
        status: ReviewStatus,
        observations: &str,
    ) -> Result<(), AppError> {
        let pending = self.begin_status_update(course_id, status, observations).await;

        match self.client.update_course_status(course_id, status, observations).await {
            Ok(()) => {
                self.commit(pending);
                info!("Course {} marked as {}", course_id, status);
                Ok(())
            }
            Err(e) => {
                warn!("Error updating course status for {}: {}", course_id, e);
                self.revert(pending, UPDATE_FAILED_MESSAGE).await;
                Err(match e {
                    AppError::Update(msg) => AppError::Update(msg),
                    other => AppError::Update(other.to_string()),
                })
            }
        }
    }

    pub async fn lookup(&self, id: &str) -> CourseLookup {
        let state = self.state.read().await;
        if let Some(course) = state.courses.get(id) {
            return CourseLookup::Found(course.clone());
        }
        if state.is_loading || !state.has_loaded {
            CourseLookup::Loading
        } else {
            CourseLookup::NotFound
        }
    }

    pub async fn set_selected_course(&self, course_id: Option<String>) {
        self.state.write().await.selected_course = course_id;
    }

    pub async fn selected_course(&self) -> Option<Course> {
        let state = self.state.read().await;
        state
            .selected_course
            .as_ref()
            .and_then(|id| state.courses.get(id))
            .cloned()
    }
}
