//! Read models for the dashboard pages, derived from a `StoreState` snapshot.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::filters::{
    self, CoordinatorCount, CourseQuery, SummaryStats, coordinator_course_counts,
    coordinator_options, filter_courses, group_by_coordinator,
};
use crate::models::{Competitor, Coordinator, Course, Discipline, ReviewStatus};
use crate::names::{format_coordinator_name, initials};
use crate::store::StoreState;

pub const DASHBOARD_TOP_COORDINATORS: usize = 10;
const NO_BIOGRAPHY: &str = "Nenhuma biografia disponível.";

#[derive(Debug, Clone, Serialize)]
pub struct HealthView {
    pub loaded: bool,
    pub is_loading: bool,
    pub course_count: usize,
    pub error: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl HealthView {
    pub fn from_state(state: &StoreState) -> Self {
        Self {
            loaded: state.has_loaded,
            is_loading: state.is_loading,
            course_count: state.courses.len(),
            error: state.error.clone(),
            loaded_at: state.loaded_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseSummaryView {
    pub id: String,
    pub name: String,
    pub requesting_coordinator: String,
    pub status: ReviewStatus,
}

impl From<&Course> for CourseSummaryView {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            name: course.name.clone(),
            requesting_coordinator: course.requester_bucket().to_string(),
            status: course.status,
        }
    }
}

/// Proposal list page: headline cards plus the matching courses sorted by name.
#[derive(Debug, Clone, Serialize)]
pub struct CourseListView {
    pub stats: SummaryStats,
    pub total_found: usize,
    pub filters_applied: bool,
    pub courses: Vec<CourseSummaryView>,
}

impl CourseListView {
    pub fn build(state: &StoreState, query: &CourseQuery) -> Self {
        let mut matching = filter_courses(&state.courses, query);
        filters::sort_by_name(&mut matching);
        Self {
            stats: SummaryStats::compute(&matching, &state.courses),
            total_found: matching.len(),
            filters_applied: query.is_active(),
            courses: matching.into_iter().map(CourseSummaryView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseGroupView {
    pub coordinator: String,
    pub courses: Vec<CourseSummaryView>,
}

/// Search dropdown: grouped matches, the coordinator filter options and the current selection.
#[derive(Debug, Clone, Serialize)]
pub struct SearchView {
    pub term: String,
    pub selected_coordinators: Vec<String>,
    pub coordinator_options: Vec<String>,
    pub total_courses: usize,
    pub groups: Vec<CourseGroupView>,
}

impl SearchView {
    pub fn build(state: &StoreState, query: &CourseQuery) -> Self {
        let matching = filter_courses(&state.courses, query);
        let groups: Vec<CourseGroupView> = group_by_coordinator(&matching)
            .into_iter()
            .map(|group| CourseGroupView {
                coordinator: group.coordinator,
                courses: group.courses.into_iter().map(CourseSummaryView::from).collect(),
            })
            .collect();

        Self {
            term: query.term.clone(),
            selected_coordinators: query.coordinators.as_slice().to_vec(),
            coordinator_options: coordinator_options(&state.courses),
            total_courses: matching.len(),
            groups,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoordinatorView {
    pub name: String,
    pub display_name: String,
    pub initials: String,
    pub biography: String,
    pub is_coordinator: bool,
}

impl From<&Coordinator> for CoordinatorView {
    fn from(coordinator: &Coordinator) -> Self {
        Self {
            name: coordinator.name.clone(),
            display_name: format_coordinator_name(&coordinator.name),
            initials: initials(&coordinator.name),
            biography: coordinator.biography.clone(),
            is_coordinator: coordinator.is_coordinator,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseDetailView {
    pub id: String,
    pub name: String,
    pub requesting_coordinator: String,
    pub status: ReviewStatus,
    pub presentation: String,
    pub audience: String,
    pub committee_notes: String,
    pub coordinators: Vec<CoordinatorView>,
    pub disciplines: Vec<Discipline>,
    pub total_workload: f64,
    pub workload_hours: Option<f64>,
    pub competitors: Vec<Competitor>,
    pub performance: String,
    pub video_url: Option<String>,
}

impl From<&Course> for CourseDetailView {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            name: course.name.clone(),
            requesting_coordinator: course.requester_bucket().to_string(),
            status: course.status,
            presentation: course.presentation.clone(),
            audience: course.audience.clone(),
            committee_notes: course.committee_notes.clone(),
            coordinators: course.coordinators.iter().map(CoordinatorView::from).collect(),
            disciplines: course.disciplines.clone(),
            total_workload: course.total_workload(),
            workload_hours: course.workload_hours,
            competitors: course.competitors.clone(),
            performance: course.performance.clone(),
            video_url: course.video_url.clone().filter(|url| !url.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CoordinatorProfileView {
    pub name: String,
    pub initials: String,
    pub biography: String,
    pub role: &'static str,
    pub courses: Vec<CourseSummaryView>,
}

/// Courses-by-coordinator page, with a profile taken from the first listed coordinator.
#[derive(Debug, Clone, Serialize)]
pub struct CoordinatorDirectoryView {
    pub total_courses: usize,
    pub coordinators: Vec<CoordinatorProfileView>,
}

impl CoordinatorDirectoryView {
    pub fn build(state: &StoreState) -> Self {
        let all: Vec<&Course> = state.courses.values().collect();
        let coordinators = group_by_coordinator(&all)
            .into_iter()
            .map(|group| {
                let lead = group.courses.iter().find_map(|c| c.coordinators.first());
                let biography = lead
                    .map(|c| c.biography.trim())
                    .filter(|bio| !bio.is_empty())
                    .unwrap_or(NO_BIOGRAPHY)
                    .to_string();
                let is_coordinator = lead.is_some_and(|c| c.is_coordinator);

                CoordinatorProfileView {
                    initials: initials(&group.coordinator),
                    name: group.coordinator,
                    biography,
                    role: if is_coordinator { "Coordenador Ativo" } else { "Proponente" },
                    courses: group.courses.into_iter().map(CourseSummaryView::from).collect(),
                }
            })
            .collect();

        Self {
            total_courses: all.len(),
            coordinators,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub stats: SummaryStats,
    pub coordinator_counts: Vec<CoordinatorCount>,
}

impl DashboardView {
    pub fn build(state: &StoreState) -> Self {
        let all: Vec<&Course> = state.courses.values().collect();
        Self {
            stats: SummaryStats::compute(&all, &state.courses),
            coordinator_counts: coordinator_course_counts(&state.courses, DASHBOARD_TOP_COORDINATORS),
        }
    }
}
