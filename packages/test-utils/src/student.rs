//! Mock student service for testing student and university resolution
//!
//! Provides a [`MockStudentService`] backed by an in-memory directory so that
//! writes (create, update, delete) are visible to subsequent reads.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{any, method, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use crate::fixtures::{StudentFixture, UniversityFixture};
use crate::{json_body, path_segment, query_value};

#[derive(Debug, Default)]
struct StudentDirectory {
    universities: Vec<UniversityFixture>,
    students: Vec<StudentFixture>,
    lookup_delay: Option<Duration>,
    next_id: i64,
}

impl StudentDirectory {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn student_json(&self, pred: impl Fn(&StudentFixture) -> bool) -> Value {
        Value::Array(
            self.students
                .iter()
                .filter(|&s| pred(s))
                .map(StudentFixture::to_json)
                .collect(),
        )
    }

    fn university_json(&self, pred: impl Fn(&UniversityFixture) -> bool) -> Value {
        Value::Array(
            self.universities
                .iter()
                .filter(|&u| pred(u))
                .map(UniversityFixture::to_json)
                .collect(),
        )
    }

    /// Build a student from a camelCase write body
    fn student_from_body(&self, id: i64, body: &Value) -> Option<StudentFixture> {
        let university_id = body["university"]["id"].as_i64()?;
        let university = self
            .universities
            .iter()
            .find(|u| u.id == university_id)?
            .clone();

        Some(StudentFixture {
            id,
            first_name: body["firstName"].as_str()?.to_string(),
            last_name: body["lastName"].as_str()?.to_string(),
            email: body["email"].as_str()?.to_string(),
            university,
        })
    }

    fn university_from_body(id: i64, body: &Value) -> Option<UniversityFixture> {
        Some(UniversityFixture {
            id,
            name: body["name"].as_str()?.to_string(),
            location: body["location"].as_str().unwrap_or_default().to_string(),
        })
    }
}

/// Mock student service for testing student and university resolution
///
/// This struct wraps a [`wiremock::MockServer`] whose routes read and write a
/// shared in-memory directory, mirroring the Spring student service's REST API.
///
/// # Example
///
/// ```rust,ignore
/// use campus_test_utils::{MockStudentService, StudentFixture, UniversityFixture};
///
/// #[tokio::test]
/// async fn test_students() {
///     let ensa = UniversityFixture::new(1, "ENSA", "Tetouan");
///     let service = MockStudentService::start().await;
///     service.add_university(ensa.clone());
///     service.add_student(StudentFixture::new(10, "Alice", &ensa));
///
///     // Configure your StudentClient with service.url()
/// }
/// ```
pub struct MockStudentService {
    server: MockServer,
    directory: Arc<RwLock<StudentDirectory>>,
}

impl MockStudentService {
    /// Start a new mock student service with an empty directory
    pub async fn start() -> Self {
        let service = Self {
            server: MockServer::start().await,
            directory: Arc::new(RwLock::new(StudentDirectory {
                next_id: 1000,
                ..Default::default()
            })),
        };
        service.mount_routes().await;
        service
    }

    /// Start a mock student service pre-populated with records
    pub async fn with_records(
        universities: Vec<UniversityFixture>,
        students: Vec<StudentFixture>,
    ) -> Self {
        let service = Self::start().await;
        for university in universities {
            service.add_university(university);
        }
        for student in students {
            service.add_student(student);
        }
        service
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    pub fn add_university(&self, university: UniversityFixture) {
        self.write().universities.push(university);
    }

    pub fn add_student(&self, student: StudentFixture) {
        self.write().students.push(student);
    }

    /// Remove a student as if deleted out of band; returns whether it existed
    pub fn remove_student(&self, id: i64) -> bool {
        let mut directory = self.write();
        let before = directory.students.len();
        directory.students.retain(|s| s.id != id);
        directory.students.len() != before
    }

    /// Ids of the students currently in the directory
    pub fn student_ids(&self) -> Vec<i64> {
        self.read().students.iter().map(|s| s.id).collect()
    }

    /// Delay every `GET /api/students/{id}` response by `delay`
    pub fn set_lookup_delay(&self, delay: Duration) {
        self.write().lookup_delay = Some(delay);
    }

    /// Make lookups of one student fail with `status_code`
    pub async fn mock_student_lookup_failure(&self, id: i64, status_code: u16) {
        Mock::given(method("GET"))
            .and(path_regex(format!("^/api/students/{}$", id)))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "error": "lookup failed"
            })))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Make the student listing of one university fail with `status_code`
    pub async fn mock_university_students_failure(&self, university_id: i64, status_code: u16) {
        Mock::given(method("GET"))
            .and(path_regex(format!(
                "^/api/students/university/{}$",
                university_id
            )))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "error": "listing failed"
            })))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Make every route answer 503
    pub async fn mock_unavailable(&self) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({
                "error": "Service Unavailable"
            })))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Number of received requests whose path starts with `prefix`
    pub async fn request_count(&self, prefix: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path().starts_with(prefix))
            .count()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, StudentDirectory> {
        self.directory.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, StudentDirectory> {
        self.directory.write().unwrap_or_else(|e| e.into_inner())
    }

    async fn route<F>(&self, verb: &str, pattern: &str, handler: F)
    where
        F: Fn(&mut StudentDirectory, &Request) -> ResponseTemplate + Send + Sync + 'static,
    {
        let directory = self.directory.clone();
        Mock::given(method(verb))
            .and(path_regex(pattern))
            .respond_with(move |request: &Request| {
                let mut directory = directory.write().unwrap_or_else(|e| e.into_inner());
                handler(&mut directory, request)
            })
            .mount(&self.server)
            .await;
    }

    async fn mount_routes(&self) {
        // ========== Students ==========

        self.route("GET", r"^/api/students$", |dir, _| {
            ResponseTemplate::new(200).set_body_json(dir.student_json(|_| true))
        })
        .await;

        self.route("GET", r"^/api/students/search$", |dir, request| {
            let keyword = query_value(request, "keyword").unwrap_or_default();
            ResponseTemplate::new(200).set_body_json(dir.student_json(|s| s.matches_keyword(&keyword)))
        })
        .await;

        self.route("GET", r"^/api/students/email/[^/]+$", |dir, request| {
            let email = path_segment(request, 3).unwrap_or_default().replace("%40", "@");
            match dir.students.iter().find(|s| s.email == email) {
                Some(student) => ResponseTemplate::new(200).set_body_json(student.to_json()),
                None => ResponseTemplate::new(404),
            }
        })
        .await;

        self.route("GET", r"^/api/students/university/\d+$", |dir, request| {
            let university_id = path_id(request, 3);
            ResponseTemplate::new(200)
                .set_body_json(dir.student_json(|s| Some(s.university.id) == university_id))
        })
        .await;

        self.route("GET", r"^/api/students/\d+$", |dir, request| {
            let id = path_id(request, 2);
            let template = match dir.students.iter().find(|s| Some(s.id) == id) {
                Some(student) => ResponseTemplate::new(200).set_body_json(student.to_json()),
                None => ResponseTemplate::new(404),
            };
            match dir.lookup_delay {
                Some(delay) => template.set_delay(delay),
                None => template,
            }
        })
        .await;

        self.route("POST", r"^/api/students$", |dir, request| {
            let id = dir.allocate_id();
            match json_body(request).and_then(|body| dir.student_from_body(id, &body)) {
                Some(student) => {
                    let body = student.to_json();
                    dir.students.push(student);
                    ResponseTemplate::new(201).set_body_json(body)
                }
                None => ResponseTemplate::new(400),
            }
        })
        .await;

        self.route("PUT", r"^/api/students/\d+$", |dir, request| {
            let Some(id) = path_id(request, 2) else {
                return ResponseTemplate::new(404);
            };
            let Some(index) = dir.students.iter().position(|s| s.id == id) else {
                return ResponseTemplate::new(404);
            };
            match json_body(request).and_then(|body| dir.student_from_body(id, &body)) {
                Some(student) => {
                    let body = student.to_json();
                    dir.students[index] = student;
                    ResponseTemplate::new(200).set_body_json(body)
                }
                None => ResponseTemplate::new(404),
            }
        })
        .await;

        self.route("DELETE", r"^/api/students/\d+$", |dir, request| {
            let id = path_id(request, 2);
            let before = dir.students.len();
            dir.students.retain(|s| Some(s.id) != id);
            if dir.students.len() == before {
                ResponseTemplate::new(404)
            } else {
                ResponseTemplate::new(204)
            }
        })
        .await;

        // ========== Universities ==========

        self.route("GET", r"^/api/universities$", |dir, _| {
            ResponseTemplate::new(200).set_body_json(dir.university_json(|_| true))
        })
        .await;

        self.route("GET", r"^/api/universities/search$", |dir, request| {
            let name = query_value(request, "name").unwrap_or_default().to_lowercase();
            ResponseTemplate::new(200)
                .set_body_json(dir.university_json(|u| u.name.to_lowercase().contains(&name)))
        })
        .await;

        self.route("GET", r"^/api/universities/location/[^/]+$", |dir, request| {
            let location = path_segment(request, 3).unwrap_or_default().replace("%20", " ");
            ResponseTemplate::new(200)
                .set_body_json(dir.university_json(|u| u.location.eq_ignore_ascii_case(&location)))
        })
        .await;

        self.route("GET", r"^/api/universities/\d+$", |dir, request| {
            let id = path_id(request, 2);
            match dir.universities.iter().find(|u| Some(u.id) == id) {
                Some(university) => ResponseTemplate::new(200).set_body_json(university.to_json()),
                None => ResponseTemplate::new(404),
            }
        })
        .await;

        self.route("POST", r"^/api/universities$", |dir, request| {
            let id = dir.allocate_id();
            match json_body(request).and_then(|body| StudentDirectory::university_from_body(id, &body)) {
                Some(university) => {
                    let body = university.to_json();
                    dir.universities.push(university);
                    ResponseTemplate::new(201).set_body_json(body)
                }
                None => ResponseTemplate::new(400),
            }
        })
        .await;

        self.route("PUT", r"^/api/universities/\d+$", |dir, request| {
            let Some(id) = path_id(request, 2) else {
                return ResponseTemplate::new(404);
            };
            let Some(index) = dir.universities.iter().position(|u| u.id == id) else {
                return ResponseTemplate::new(404);
            };
            match json_body(request).and_then(|body| StudentDirectory::university_from_body(id, &body)) {
                Some(university) => {
                    let body = university.to_json();
                    dir.universities[index] = university;
                    ResponseTemplate::new(200).set_body_json(body)
                }
                None => ResponseTemplate::new(404),
            }
        })
        .await;

        self.route("DELETE", r"^/api/universities/\d+$", |dir, request| {
            let id = path_id(request, 2);
            let before = dir.universities.len();
            dir.universities.retain(|u| Some(u.id) != id);
            if dir.universities.len() == before {
                ResponseTemplate::new(404)
            } else {
                ResponseTemplate::new(204)
            }
        })
        .await;
    }
}

fn path_id(request: &Request, index: usize) -> Option<i64> {
    path_segment(request, index).and_then(|s| s.parse().ok())
}
