use std::sync::Arc;

use crate::store::CourseStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CourseStore>,
}
