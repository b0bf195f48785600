use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::collate::compare_pt_br;
use crate::models::{Course, ReviewStatus};

/// Search box text plus the coordinator multi-select.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CourseQuery {
    pub term: String,
    pub coordinators: CoordinatorSelection,
}

impl CourseQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            coordinators: CoordinatorSelection::default(),
        }
    }

    pub fn with_coordinators<I, S>(mut self, coordinators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in coordinators {
            self.coordinators.insert(name);
        }
        self
    }

    pub fn is_active(&self) -> bool {
        !self.term.is_empty() || !self.coordinators.is_empty()
    }

    pub fn matches(&self, course: &Course) -> bool {
        matches_term(course, &self.term) && self.coordinators.allows(course)
    }
}

/// Selected coordinators, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CoordinatorSelection {
    selected: Vec<String>,
}

impl CoordinatorSelection {
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.selected.iter().any(|s| s == name)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.selected
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.contains(&name) {
            self.selected.push(name);
        }
    }

    /// Adds the coordinator if absent, removes it otherwise.
    pub fn toggle(&mut self, name: &str) {
        if self.contains(name) {
            self.selected.retain(|s| s != name);
        } else {
            self.selected.push(name.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn select_all(&mut self, options: &[String]) {
        self.selected = options.to_vec();
    }

    /// Empty selection lets every course through.
    pub fn allows(&self, course: &Course) -> bool {
        self.selected.is_empty() || self.contains(&course.requesting_coordinator)
    }
}

/// Case-insensitive substring match over name, requester, status label and discipline names.
pub fn matches_term(course: &Course, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    let hit = |haystack: &str| haystack.to_lowercase().contains(&needle);

    hit(&course.name)
        || hit(&course.requesting_coordinator)
        || hit(course.status.label())
        || course.disciplines.iter().any(|d| hit(&d.name))
}

/// Courses passing the query, in unspecified order.
pub fn filter_courses<'a>(
    courses: &'a HashMap<String, Course>,
    query: &CourseQuery,
) -> Vec<&'a Course> {
    courses.values().filter(|c| query.matches(c)).collect()
}

pub fn sort_by_name(courses: &mut [&Course]) {
    courses.sort_by(|a, b| compare_pt_br(&a.name, &b.name).then_with(|| a.id.cmp(&b.id)));
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseGroup<'a> {
    pub coordinator: String,
    pub courses: Vec<&'a Course>,
}

/// Partitions by requesting coordinator. Groups and their members are ordered by name.
pub fn group_by_coordinator<'a>(courses: &[&'a Course]) -> Vec<CourseGroup<'a>> {
    let mut buckets: HashMap<&str, Vec<&'a Course>> = HashMap::new();
    for &course in courses {
        buckets.entry(course.requester_bucket()).or_default().push(course);
    }

    let mut groups: Vec<CourseGroup<'a>> = buckets
        .into_iter()
        .map(|(coordinator, mut members)| {
            sort_by_name(&mut members);
            CourseGroup {
                coordinator: coordinator.to_string(),
                courses: members,
            }
        })
        .collect();
    groups.sort_by(|a, b| compare_pt_br(&a.coordinator, &b.coordinator));
    groups
}

/// Every non-empty requesting coordinator in the full collection.
///
/// Always computed from the unfiltered collection so a selection that matches nothing
/// can still be seen and undone.
pub fn coordinator_options(courses: &HashMap<String, Course>) -> Vec<String> {
    let unique: BTreeSet<&str> = courses
        .values()
        .filter(|c| c.has_requester())
        .map(|c| c.requesting_coordinator.as_str())
        .collect();
    let mut options: Vec<String> = unique.into_iter().map(str::to_string).collect();
    options.sort_by(|a, b| compare_pt_br(a, b));
    options
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryStats {
    pub total: usize,
    pub approved: usize,
    pub rejected: usize,
    /// Stand By plus courses without a review.
    pub pending: usize,
    /// Taken from the whole collection, not the filtered subset.
    pub unique_coordinators: usize,
}

impl SummaryStats {
    pub fn compute(filtered: &[&Course], all: &HashMap<String, Course>) -> Self {
        let mut stats = SummaryStats {
            total: filtered.len(),
            unique_coordinators: coordinator_options(all).len(),
            ..SummaryStats::default()
        };
        for course in filtered {
            match course.status {
                ReviewStatus::Approved => stats.approved += 1,
                ReviewStatus::Rejected => stats.rejected += 1,
                ReviewStatus::StandBy | ReviewStatus::Pending => stats.pending += 1,
            }
        }
        stats
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoordinatorCount {
    pub name: String,
    pub count: usize,
}

/// Courses per requesting coordinator, busiest first, at most `limit` entries.
pub fn coordinator_course_counts(
    courses: &HashMap<String, Course>,
    limit: usize,
) -> Vec<CoordinatorCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for course in courses.values() {
        *counts.entry(course.requester_bucket()).or_default() += 1;
    }

    let mut ranked: Vec<CoordinatorCount> = counts
        .into_iter()
        .map(|(name, count)| CoordinatorCount {
            name: name.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| compare_pt_br(&a.name, &b.name)));
    ranked.truncate(limit);
    ranked
}
