mod common;

use std::collections::HashMap;

use common::{course, sample_courses};
use course_review::filters::*;
use course_review::models::{Course, NO_COORDINATOR, ReviewStatus};

fn collection(courses: Vec<Course>) -> HashMap<String, Course> {
    courses.into_iter().map(|c| (c.id.clone(), c)).collect()
}

fn ids(courses: &[&Course]) -> Vec<String> {
    let mut ids: Vec<String> = courses.iter().map(|c| c.id.clone()).collect();
    ids.sort();
    ids
}

#[test]
fn single_course_scenario() {
    let courses = collection(vec![course("c1", "Intro to X", "Ana Silva", ReviewStatus::Pending)]);

    assert_eq!(ids(&filter_courses(&courses, &CourseQuery::new("intro"))), vec!["c1"]);
    assert!(filter_courses(&courses, &CourseQuery::new("reprovado")).is_empty());

    let ana = CourseQuery::default().with_coordinators(["Ana Silva"]);
    assert_eq!(ids(&filter_courses(&courses, &ana)), vec!["c1"]);

    let other = CourseQuery::default().with_coordinators(["Outro Nome"]);
    assert!(filter_courses(&courses, &other).is_empty());
}

#[test]
fn text_filter_covers_all_searchable_fields() {
    let courses = collection(sample_courses());

    // discipline name
    assert_eq!(ids(&filter_courses(&courses, &CourseQuery::new("fundamentos"))), vec!["c1"]);
    // requester, case-insensitive
    assert_eq!(ids(&filter_courses(&courses, &CourseQuery::new("BRUNO"))), vec!["c2", "c3"]);
    // status label
    assert_eq!(ids(&filter_courses(&courses, &CourseQuery::new("stand"))), vec!["c4"]);
    // empty term matches everything
    assert_eq!(filter_courses(&courses, &CourseQuery::new("")).len(), courses.len());
}

#[test]
fn missing_and_empty_status_read_as_pending() {
    let from_wire: Course = serde_json::from_value(serde_json::json!({
        "id": "a", "nome": "A", "coordenadorSolicitante": "Ana", "status": ""
    }))
    .expect("decode empty status");
    let absent: Course = serde_json::from_value(serde_json::json!({
        "id": "b", "nome": "B", "coordenadorSolicitante": "Ana"
    }))
    .expect("decode absent status");

    assert_eq!(from_wire.status, ReviewStatus::Pending);
    assert_eq!(absent.status, ReviewStatus::Pending);

    let courses = collection(vec![from_wire, absent]);
    assert_eq!(ids(&filter_courses(&courses, &CourseQuery::new("pendente"))), vec!["a", "b"]);

    let all: Vec<&Course> = courses.values().collect();
    let stats = SummaryStats::compute(&all, &courses);
    assert_eq!(stats.pending, 2);
}

#[test]
fn text_filter_is_idempotent_subset() {
    let courses = collection(sample_courses());
    for term in ["a", "bruno", "xyz", "", "ética"] {
        let query = CourseQuery::new(term);
        let once: HashMap<String, Course> = filter_courses(&courses, &query)
            .into_iter()
            .map(|c| (c.id.clone(), c.clone()))
            .collect();
        assert!(once.keys().all(|id| courses.contains_key(id)));

        let twice = filter_courses(&once, &query);
        assert_eq!(twice.len(), once.len(), "term {:?}", term);
    }
}

#[test]
fn filters_compose_with_and() {
    let courses = collection(sample_courses());
    let query = CourseQuery::new("zebra").with_coordinators(["Bruno Costa"]);
    assert_eq!(ids(&filter_courses(&courses, &query)), vec!["c2"]);

    let query = CourseQuery::new("zebra").with_coordinators(["Ana Silva"]);
    assert!(filter_courses(&courses, &query).is_empty());
}

#[test]
fn grouping_sorts_groups_and_members() {
    let courses = collection(sample_courses());
    let all: Vec<&Course> = courses.values().collect();
    let groups = group_by_coordinator(&all);

    let names: Vec<&str> = groups.iter().map(|g| g.coordinator.as_str()).collect();
    assert_eq!(names, vec!["Álvaro Dias", "Ana Silva", "Bruno Costa", NO_COORDINATOR]);

    let bruno = groups
        .iter()
        .find(|g| g.coordinator == "Bruno Costa")
        .expect("bruno group");
    let members: Vec<&str> = bruno.courses.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(members, vec!["Abacate", "Zebra"]);

    let flattened: Vec<&Course> = groups.iter().flat_map(|g| g.courses.iter().copied()).collect();
    assert_eq!(ids(&flattened), ids(&all));
}

#[test]
fn coordinator_options_ignore_filter_state() {
    let courses = collection(sample_courses());
    let options = coordinator_options(&courses);
    assert_eq!(options, vec!["Álvaro Dias", "Ana Silva", "Bruno Costa"]);

    let mut selection = CoordinatorSelection::default();
    selection.toggle("Ana Silva");
    let query = CourseQuery {
        term: "zebra".to_string(),
        coordinators: selection,
    };
    assert!(filter_courses(&courses, &query).is_empty());
    assert!(coordinator_options(&courses).contains(&"Ana Silva".to_string()));
}

#[test]
fn coordinator_selection_toggles() {
    let options = vec!["Ana".to_string(), "Bruno".to_string()];
    let mut selection = CoordinatorSelection::default();

    selection.toggle("Ana");
    assert_eq!(selection.as_slice(), ["Ana".to_string()]);
    selection.toggle("Ana");
    assert!(selection.is_empty());

    selection.select_all(&options);
    assert_eq!(selection.as_slice(), options.as_slice());
    selection.clear();
    assert!(selection.is_empty());
}

#[test]
fn summary_stats_use_filtered_counts_and_full_coordinators() {
    let courses = collection(sample_courses());
    let filtered = filter_courses(&courses, &CourseQuery::default().with_coordinators(["Bruno Costa"]));
    let stats = SummaryStats::compute(&filtered, &courses);

    assert_eq!(
        stats,
        SummaryStats {
            total: 2,
            approved: 1,
            rejected: 1,
            pending: 0,
            unique_coordinators: 3,
        }
    );
}

#[test]
fn coordinator_counts_rank_busiest_first() {
    let courses = collection(sample_courses());
    let counts = coordinator_course_counts(&courses, 2);

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].name, "Bruno Costa");
    assert_eq!(counts[0].count, 2);
    assert_eq!(counts[1].name, "Álvaro Dias");
}

#[test]
fn workload_is_summed_on_read() {
    let c1 = sample_courses().remove(0);
    assert_eq!(c1.total_workload(), 60.0);
    assert_eq!(c1.workload_hours, None);
}
