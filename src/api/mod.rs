use axum::Json;
use axum::extract::{Path, Query};
use axum::routing::post;
use axum::{Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::filters::{CourseQuery, coordinator_options};
use crate::models::ReviewStatus;
use crate::review::{ReviewPhase, ReviewSession};
use crate::state::AppState;
use crate::store::CourseLookup;
use crate::views::*;

/// Raw query pairs so `coordinator` can repeat: `?q=intro&coordinator=Ana&coordinator=Rui`.
type QueryPairs = Vec<(String, String)>;

fn course_query(pairs: QueryPairs) -> CourseQuery {
    let mut query = CourseQuery::default();
    for (key, value) in pairs {
        match key.as_str() {
            "q" => query.term = value,
            "coordinator" if !value.is_empty() => query.coordinators.insert(value),
            _ => {}
        }
    }
    query
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub observations: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub phase: ReviewPhase,
    pub course: CourseDetailView,
}

#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    pub course_id: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/courses", get(list_courses))
        .route("/courses/search", get(search_courses))
        .route("/courses/{id}", get(course_detail))
        .route("/courses/{id}/review", post(review_course))
        .route("/coordinators", get(list_coordinators))
        .route("/coordinators/courses", get(coordinator_directory))
        .route("/dashboard", get(dashboard))
        .route("/refresh", post(refresh))
        .route("/selection", get(get_selection).put(set_selection))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthView> {
    let snapshot = state.store.read().await;
    Json(HealthView::from_state(&snapshot))
}

async fn list_courses(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Json<CourseListView> {
    let query = course_query(pairs);
    let snapshot = state.store.read().await;
    Json(CourseListView::build(&snapshot, &query))
}

async fn search_courses(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Json<SearchView> {
    let query = course_query(pairs);
    let snapshot = state.store.read().await;
    Json(SearchView::build(&snapshot, &query))
}

async fn course_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CourseDetailView>, AppError> {
    match state.store.lookup(&id).await {
        CourseLookup::Found(course) => Ok(Json(CourseDetailView::from(&course))),
        CourseLookup::Loading => Err(AppError::Loading),
        CourseLookup::NotFound => Err(AppError::NotFound(id)),
    }
}

async fn review_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<ReviewResponse>, AppError> {
    let course = match state.store.lookup(&id).await {
        CourseLookup::Found(course) => course,
        CourseLookup::Loading => return Err(AppError::Loading),
        CourseLookup::NotFound => return Err(AppError::NotFound(id)),
    };

    let mut session = ReviewSession::open(&course);
    if let Some(raw) = req.status.as_deref() {
        let status = ReviewStatus::parse(raw)
            .ok_or_else(|| AppError::BadRequest(format!("Status inválido: {}", raw)))?;
        session.select(status);
    }
    if let Some(observations) = req.observations {
        session.set_observations(observations);
    }

    session.submit(&state.store).await?;

    let course = state.store.course(&id).await.ok_or(AppError::InternalServerError)?;
    Ok(Json(ReviewResponse {
        phase: session.phase(),
        course: CourseDetailView::from(&course),
    }))
}

async fn list_coordinators(State(state): State<AppState>) -> Json<Vec<String>> {
    let snapshot = state.store.read().await;
    Json(coordinator_options(&snapshot.courses))
}

async fn coordinator_directory(State(state): State<AppState>) -> Json<CoordinatorDirectoryView> {
    let snapshot = state.store.read().await;
    Json(CoordinatorDirectoryView::build(&snapshot))
}

async fn dashboard(State(state): State<AppState>) -> Json<DashboardView> {
    let snapshot = state.store.read().await;
    Json(DashboardView::build(&snapshot))
}

async fn refresh(State(state): State<AppState>) -> Result<Json<HealthView>, AppError> {
    state.store.fetch_courses().await;
    let snapshot = state.store.read().await;
    if let Some(message) = &snapshot.error {
        return Err(AppError::Fetch(message.clone()));
    }
    Ok(Json(HealthView::from_state(&snapshot)))
}

async fn get_selection(State(state): State<AppState>) -> Json<Option<CourseSummaryView>> {
    let selected = state.store.selected_course().await;
    Json(selected.as_ref().map(CourseSummaryView::from))
}

async fn set_selection(
    State(state): State<AppState>,
    Json(req): Json<SelectionRequest>,
) -> Result<Json<Option<CourseSummaryView>>, AppError> {
    if let Some(id) = &req.course_id {
        if state.store.course(id).await.is_none() {
            return Err(AppError::NotFound(id.clone()));
        }
    }
    state.store.set_selected_course(req.course_id).await;
    let selected = state.store.selected_course().await;
    Ok(Json(selected.as_ref().map(CourseSummaryView::from)))
}
