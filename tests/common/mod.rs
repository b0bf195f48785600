#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use course_review::catalog::CatalogClient;
use course_review::error::AppError;
use course_review::models::{Course, Discipline, ReviewStatus};

/// In-memory catalog whose failures and timing are driven by the test.
pub struct ScriptedCatalog {
    pub courses: Mutex<HashMap<String, Course>>,
    pub fail_fetch: AtomicBool,
    pub fail_update: AtomicBool,
    pub fetch_calls: AtomicUsize,
    pub updates: Mutex<Vec<(String, ReviewStatus, String)>>,
    /// When set, each update waits for one permit before answering.
    pub update_gate: Option<Semaphore>,
}

impl ScriptedCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses: Mutex::new(courses.into_iter().map(|c| (c.id.clone(), c)).collect()),
            fail_fetch: AtomicBool::new(false),
            fail_update: AtomicBool::new(false),
            fetch_calls: AtomicUsize::new(0),
            updates: Mutex::new(Vec::new()),
            update_gate: None,
        }
    }

    pub fn gated(courses: Vec<Course>) -> Self {
        Self {
            update_gate: Some(Semaphore::new(0)),
            ..Self::new(courses)
        }
    }

    pub fn release_update(&self) {
        if let Some(gate) = &self.update_gate {
            gate.add_permits(1);
        }
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_update(&self, fail: bool) {
        self.fail_update.store(fail, Ordering::SeqCst);
    }

    pub fn update_count(&self) -> usize {
        self.updates.lock().expect("updates lock").len()
    }
}

#[async_trait]
impl CatalogClient for ScriptedCatalog {
    async fn fetch_courses(&self) -> Result<HashMap<String, Course>, AppError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(AppError::Fetch("HTTP error! status: 500".to_string()));
        }
        Ok(self.courses.lock().expect("courses lock").clone())
    }

    async fn update_course_status(
        &self,
        course_id: &str,
        status: ReviewStatus,
        observations: &str,
    ) -> Result<(), AppError> {
        self.updates
            .lock()
            .expect("updates lock")
            .push((course_id.to_string(), status, observations.to_string()));

        if let Some(gate) = &self.update_gate {
            gate.acquire().await.expect("gate closed").forget();
        }

        if self.fail_update.load(Ordering::SeqCst) {
            return Err(AppError::Update("status: 500".to_string()));
        }
        Ok(())
    }
}

pub fn course(id: &str, name: &str, coordinator: &str, status: ReviewStatus) -> Course {
    Course {
        id: id.to_string(),
        name: name.to_string(),
        requesting_coordinator: coordinator.to_string(),
        status,
        ..Course::default()
    }
}

pub fn with_disciplines(mut course: Course, disciplines: &[(&str, f64)]) -> Course {
    course.disciplines = disciplines
        .iter()
        .map(|(name, workload)| Discipline {
            name: name.to_string(),
            workload: *workload,
        })
        .collect();
    course
}

pub fn sample_courses() -> Vec<Course> {
    vec![
        with_disciplines(
            course("c1", "Intro to X", "Ana Silva", ReviewStatus::Pending),
            &[("Fundamentos", 40.0), ("Prática", 20.0)],
        ),
        course("c2", "Zebra", "Bruno Costa", ReviewStatus::Approved),
        course("c3", "Abacate", "Bruno Costa", ReviewStatus::Rejected),
        course("c4", "Ética Aplicada", "Álvaro Dias", ReviewStatus::StandBy),
        course("c5", "Sem Dono", "", ReviewStatus::Pending),
    ]
}
