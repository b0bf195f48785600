use serde::{Deserialize, Serialize};

/// Body of `POST /update-course-status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseStatusRequest {
    pub course_id: String,
    pub status: String,
    pub observations: String,
}
