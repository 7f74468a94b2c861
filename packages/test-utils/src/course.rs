//! Mock course service for testing course and enrollment resolution
//!
//! Provides a [`MockCourseService`] with in-memory courses and enrollments.
//! Enroll and unenroll change the roster seen by later reads.

use std::sync::{Arc, RwLock};

use serde_json::{json, Value};
use wiremock::matchers::{any, method, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use crate::fixtures::{CourseFixture, EnrollmentFixture};
use crate::{json_body, path_segment, query_value};

#[derive(Debug, Default)]
struct CourseCatalog {
    courses: Vec<CourseFixture>,
    enrollments: Vec<EnrollmentFixture>,
    next_id: i64,
}

impl CourseCatalog {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn course_index(&self, request: &Request) -> Option<usize> {
        let id: i64 = path_segment(request, 2)?.parse().ok()?;
        self.courses.iter().position(|c| c.id == id)
    }

    fn course_from_body(id: i64, body: &Value) -> Option<CourseFixture> {
        Some(CourseFixture {
            id,
            name: body["name"].as_str()?.to_string(),
            instructor: body["instructor"].as_str()?.to_string(),
            category: body["category"].as_str()?.to_string(),
            schedule: body["schedule"].as_str()?.to_string(),
        })
    }

    fn enrollments_json(&self, pred: impl Fn(&EnrollmentFixture) -> bool) -> Value {
        Value::Array(
            self.enrollments
                .iter()
                .filter(|&e| pred(e))
                .map(EnrollmentFixture::to_json)
                .collect(),
        )
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn error_body(status_code: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status_code).set_body_json(json!({ "error": message }))
}

/// Read `student_id` from a JSON body, accepting a number or numeric string
fn body_student_id(request: &Request) -> Option<i64> {
    let body = json_body(request)?;
    match &body["student_id"] {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Mock course service for testing course and enrollment resolution
///
/// Routes mirror the Django course service, trailing slashes included.
///
/// # Example
///
/// ```rust,ignore
/// use campus_test_utils::{CourseFixture, MockCourseService};
///
/// #[tokio::test]
/// async fn test_roster() {
///     let service = MockCourseService::start().await;
///     service.add_course(CourseFixture::new(1, "Algorithms", "Knuth", "CS"));
///     service.enroll(1, 10);
///
///     // Configure your CourseClient with service.url()
/// }
/// ```
pub struct MockCourseService {
    server: MockServer,
    catalog: Arc<RwLock<CourseCatalog>>,
}

impl MockCourseService {
    /// Start a new mock course service with an empty catalog
    pub async fn start() -> Self {
        let service = Self {
            server: MockServer::start().await,
            catalog: Arc::new(RwLock::new(CourseCatalog {
                next_id: 1000,
                ..Default::default()
            })),
        };
        service.mount_routes().await;
        service
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    pub fn add_course(&self, course: CourseFixture) {
        self.write().courses.push(course);
    }

    /// Record an enrollment directly, bypassing the enroll route
    pub fn enroll(&self, course_id: i64, student_id: i64) {
        let mut catalog = self.write();
        let id = catalog.allocate_id();
        catalog
            .enrollments
            .push(EnrollmentFixture::new(id, student_id, course_id));
    }

    /// Student ids currently enrolled in `course_id`
    pub fn roster(&self, course_id: i64) -> Vec<i64> {
        self.read()
            .enrollments
            .iter()
            .filter(|e| e.course_id == course_id)
            .map(|e| e.student_id)
            .collect()
    }

    /// Make the roster of one course fail with `status_code`
    pub async fn mock_roster_failure(&self, course_id: i64, status_code: u16) {
        Mock::given(method("GET"))
            .and(path_regex(format!("^/api/courses/{}/students/$", course_id)))
            .respond_with(error_body(status_code, "roster unavailable"))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Make every route answer 503
    pub async fn mock_unavailable(&self) {
        Mock::given(any())
            .respond_with(error_body(503, "Service Unavailable"))
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

    fn read(&self) -> std::sync::RwLockReadGuard<'_, CourseCatalog> {
        self.catalog.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, CourseCatalog> {
        self.catalog.write().unwrap_or_else(|e| e.into_inner())
    }

    async fn route<F>(&self, verb: &str, pattern: &str, handler: F)
    where
        F: Fn(&mut CourseCatalog, &Request) -> ResponseTemplate + Send + Sync + 'static,
    {
        let catalog = self.catalog.clone();
        Mock::given(method(verb))
            .and(path_regex(pattern))
            .respond_with(move |request: &Request| {
                let mut catalog = catalog.write().unwrap_or_else(|e| e.into_inner());
                handler(&mut catalog, request)
            })
            .mount(&self.server)
            .await;
    }

    async fn mount_routes(&self) {
        // ========== Courses ==========

        self.route("GET", r"^/api/courses/$", |catalog, request| {
            let filters = [
                ("name", query_value(request, "name")),
                ("instructor", query_value(request, "instructor")),
                ("category", query_value(request, "category")),
                ("search", query_value(request, "search")),
            ];
            let courses: Vec<Value> = catalog
                .courses
                .iter()
                .filter(|c| {
                    filters.iter().all(|(key, value)| match (*key, value) {
                        (_, None) => true,
                        ("name", Some(v)) => contains_ignore_case(&c.name, v),
                        ("instructor", Some(v)) => contains_ignore_case(&c.instructor, v),
                        ("category", Some(v)) => contains_ignore_case(&c.category, v),
                        (_, Some(v)) => {
                            contains_ignore_case(&c.name, v)
                                || contains_ignore_case(&c.instructor, v)
                                || contains_ignore_case(&c.category, v)
                        }
                    })
                })
                .map(CourseFixture::to_json)
                .collect();
            ResponseTemplate::new(200).set_body_json(Value::Array(courses))
        })
        .await;

        self.route("GET", r"^/api/courses/\d+/$", |catalog, request| {
            match catalog.course_index(request) {
                Some(index) => ResponseTemplate::new(200).set_body_json(catalog.courses[index].to_json()),
                None => error_body(404, "Course not found"),
            }
        })
        .await;

        self.route("POST", r"^/api/courses/$", |catalog, request| {
            let id = catalog.allocate_id();
            match json_body(request).and_then(|body| CourseCatalog::course_from_body(id, &body)) {
                Some(course) => {
                    let body = course.to_json();
                    catalog.courses.push(course);
                    ResponseTemplate::new(201).set_body_json(body)
                }
                None => error_body(400, "invalid course"),
            }
        })
        .await;

        self.route("PUT", r"^/api/courses/\d+/$", |catalog, request| {
            let Some(index) = catalog.course_index(request) else {
                return error_body(404, "Course not found");
            };
            let id = catalog.courses[index].id;
            match json_body(request).and_then(|body| CourseCatalog::course_from_body(id, &body)) {
                Some(course) => {
                    let body = course.to_json();
                    catalog.courses[index] = course;
                    ResponseTemplate::new(200).set_body_json(body)
                }
                None => error_body(400, "invalid course"),
            }
        })
        .await;

        self.route("DELETE", r"^/api/courses/\d+/$", |catalog, request| {
            let Some(index) = catalog.course_index(request) else {
                return error_body(404, "Course not found");
            };
            let course = catalog.courses.remove(index);
            catalog.enrollments.retain(|e| e.course_id != course.id);
            ResponseTemplate::new(204)
        })
        .await;

        // ========== Enrollments ==========

        self.route("GET", r"^/api/courses/\d+/students/$", |catalog, request| {
            let Some(index) = catalog.course_index(request) else {
                return error_body(404, "Course not found");
            };
            let course = &catalog.courses[index];
            let enrollments = catalog.enrollments_json(|e| e.course_id == course.id);
            ResponseTemplate::new(200).set_body_json(json!({
                "course_id": course.id,
                "course_name": course.name,
                "enrolled_students_count": enrollments.as_array().map_or(0, Vec::len),
                "enrollments": enrollments,
            }))
        })
        .await;

        self.route("POST", r"^/api/courses/\d+/enroll/$", |catalog, request| {
            let Some(index) = catalog.course_index(request) else {
                return error_body(404, "Course not found");
            };
            let Some(student_id) = body_student_id(request) else {
                return error_body(400, "student_id is required");
            };
            let course_id = catalog.courses[index].id;
            if catalog
                .enrollments
                .iter()
                .any(|e| e.course_id == course_id && e.student_id == student_id)
            {
                return error_body(400, "Student is already enrolled in this course");
            }

            let id = catalog.allocate_id();
            let enrollment = EnrollmentFixture::new(id, student_id, course_id);
            let body = json!({
                "message": "Student enrolled successfully",
                "enrollment": enrollment.to_json(),
            });
            catalog.enrollments.push(enrollment);
            ResponseTemplate::new(201).set_body_json(body)
        })
        .await;

        self.route("DELETE", r"^/api/courses/\d+/unenroll/$", |catalog, request| {
            let Some(index) = catalog.course_index(request) else {
                return error_body(404, "Course not found");
            };
            let Some(student_id) = body_student_id(request) else {
                return error_body(400, "student_id is required");
            };
            let course_id = catalog.courses[index].id;
            let before = catalog.enrollments.len();
            catalog
                .enrollments
                .retain(|e| !(e.course_id == course_id && e.student_id == student_id));
            if catalog.enrollments.len() == before {
                error_body(404, "Student is not enrolled in this course")
            } else {
                ResponseTemplate::new(200).set_body_json(json!({
                    "message": "Student unenrolled successfully"
                }))
            }
        })
        .await;

        self.route("GET", r"^/api/enrollments/$", |catalog, request| {
            let student_id = query_value(request, "student_id").and_then(|s| s.parse::<i64>().ok());
            ResponseTemplate::new(200).set_body_json(
                catalog.enrollments_json(|e| student_id.map_or(true, |id| e.student_id == id)),
            )
        })
        .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn service_with_course() -> MockCourseService {
        let service = MockCourseService::start().await;
        service.add_course(CourseFixture::new(1, "Algorithms", "Knuth", "Computer Science"));
        service
    }

    #[tokio::test]
    async fn test_enroll_then_unenroll() {
        let service = service_with_course().await;
        let http = reqwest::Client::new();

        let enrolled = http
            .post(format!("{}/api/courses/1/enroll/", service.url()))
            .json(&json!({"student_id": 10}))
            .send()
            .await
            .unwrap();
        assert_eq!(enrolled.status(), 201);
        assert_eq!(service.roster(1), vec![10]);

        let duplicate = http
            .post(format!("{}/api/courses/1/enroll/", service.url()))
            .json(&json!({"student_id": 10}))
            .send()
            .await
            .unwrap();
        assert_eq!(duplicate.status(), 400);

        let removed = http
            .delete(format!("{}/api/courses/1/unenroll/", service.url()))
            .json(&json!({"student_id": 10}))
            .send()
            .await
            .unwrap();
        assert_eq!(removed.status(), 200);
        assert!(service.roster(1).is_empty());
    }

    #[tokio::test]
    async fn test_filters_are_case_insensitive() {
        let service = service_with_course().await;
        service.add_course(CourseFixture::new(2, "Poetry", "Keats", "Literature"));

        let body: Value = reqwest::get(format!("{}/api/courses/?category=computer", service.url()))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "Algorithms");
    }

    #[tokio::test]
    async fn test_roster_failure_only_affects_one_course() {
        let service = service_with_course().await;
        service.add_course(CourseFixture::new(2, "Poetry", "Keats", "Literature"));
        service.mock_roster_failure(1, 500).await;

        let failing = reqwest::get(format!("{}/api/courses/1/students/", service.url()))
            .await
            .unwrap();
        assert_eq!(failing.status(), 500);

        let healthy = reqwest::get(format!("{}/api/courses/2/students/", service.url()))
            .await
            .unwrap();
        assert_eq!(healthy.status(), 200);
    }
}
