use std::time::Duration;

use serde::Serialize;

use crate::error::{AppError, MISSING_STATUS_MESSAGE, SUBMIT_FAILED_MESSAGE};
use crate::models::{Course, ReviewStatus};
use crate::store::CourseStore;

/// How long the success notice stays up before the form closes itself.
pub const SUCCESS_INDICATOR: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewPhase {
    Closed,
    Selecting,
    Submitting,
    Succeeded,
}

/// Status review form for a single course.
///
/// Failures leave the attempted values in the form; whatever the store rolled back
/// on its own collection is not mirrored here.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewSession {
    course_id: String,
    phase: ReviewPhase,
    selected: Option<ReviewStatus>,
    observations: String,
    error: Option<String>,
}

/// Values captured when a submission starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub course_id: String,
    pub status: ReviewStatus,
    pub observations: String,
}

impl ReviewSession {
    pub fn open(course: &Course) -> Self {
        let selected = match course.status {
            ReviewStatus::Pending => None,
            status => Some(status),
        };
        Self {
            course_id: course.id.clone(),
            phase: ReviewPhase::Selecting,
            selected,
            observations: course.committee_notes.clone(),
            error: None,
        }
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn phase(&self) -> ReviewPhase {
        self.phase
    }

    pub fn selected(&self) -> Option<ReviewStatus> {
        self.selected
    }

    pub fn observations(&self) -> &str {
        &self.observations
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn is_editable(&self) -> bool {
        self.phase == ReviewPhase::Selecting
    }

    /// Picking `Pending` clears the selection; it is not an option in the form.
    pub fn select(&mut self, status: ReviewStatus) {
        if !self.is_editable() {
            return;
        }
        self.selected = match status {
            ReviewStatus::Pending => None,
            status => Some(status),
        };
    }

    pub fn set_observations(&mut self, observations: impl Into<String>) {
        if self.is_editable() {
            self.observations = observations.into();
        }
    }

    /// Validates and locks the form. Without a status nothing leaves the form.
    pub fn begin_submit(&mut self) -> Result<Submission, AppError> {
        if !self.is_editable() {
            return Err(AppError::BadRequest(format!(
                "Review for {} is not accepting input",
                self.course_id
            )));
        }
        let Some(status) = self.selected else {
            self.error = Some(MISSING_STATUS_MESSAGE.to_string());
            return Err(AppError::Validation(MISSING_STATUS_MESSAGE.to_string()));
        };

        self.phase = ReviewPhase::Submitting;
        self.error = None;
        Ok(Submission {
            course_id: self.course_id.clone(),
            status,
            observations: self.observations.clone(),
        })
    }

    pub fn finish_submit(&mut self, outcome: &Result<(), AppError>) {
        match outcome {
            Ok(()) => {
                self.phase = ReviewPhase::Succeeded;
            }
            Err(e) => {
                tracing::warn!("Error submitting analysis for {}: {}", self.course_id, e);
                self.phase = ReviewPhase::Selecting;
                self.error = Some(SUBMIT_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub async fn submit(&mut self, store: &CourseStore) -> Result<(), AppError> {
        let submission = self.begin_submit()?;
        let outcome = store
            .update_course_status(&submission.course_id, submission.status, &submission.observations)
            .await;
        self.finish_submit(&outcome);
        outcome
    }

    /// Keeps the success notice up for `SUCCESS_INDICATOR`, then closes.
    pub async fn dismiss_after_success(&mut self) {
        if self.phase != ReviewPhase::Succeeded {
            return;
        }
        tokio::time::sleep(SUCCESS_INDICATOR).await;
        self.phase = ReviewPhase::Closed;
    }

    /// Cancel. Refused while a submission is in flight.
    pub fn close(&mut self) -> bool {
        if self.phase == ReviewPhase::Submitting {
            return false;
        }
        self.phase = ReviewPhase::Closed;
        true
    }
}
