//! Integration tests for GraphQL queries and cross-service field resolution
//!
//! Every test runs real GraphQL documents against a schema whose clients talk
//! to wiremock upstreams.

mod common;

use std::time::{Duration, Instant};

use campus_test_utils::{CourseFixture, StudentFixture};
use common::{ensa, ids, response_json, TestGateway};
use serde_json::json;

// =============================================================================
// Root Lookups
// =============================================================================

#[tokio::test]
async fn test_student_lookup_embeds_university_without_extra_call() {
    let gateway = TestGateway::seeded().await;

    let data = gateway
        .data(r#"{ student(id: "10") { firstName lastName university { id name location } } }"#)
        .await;

    assert_eq!(
        data["student"],
        json!({
            "firstName": "Alice",
            "lastName": "Doe",
            "university": { "id": "1", "name": "ENSA", "location": "Tetouan" }
        })
    );
    assert_eq!(gateway.students.request_count("/api/universities").await, 0);
}

#[tokio::test]
async fn test_missing_student_is_null() {
    let gateway = TestGateway::seeded().await;

    let data = gateway.data(r#"{ student(id: "999") { id } }"#).await;

    assert!(data["student"].is_null());
}

#[tokio::test]
async fn test_student_by_email() {
    let gateway = TestGateway::seeded().await;

    let data = gateway
        .data(r#"{ studentByEmail(email: "bob@campus.test") { id firstName } }"#)
        .await;

    assert_eq!(data["studentByEmail"], json!({ "id": "11", "firstName": "Bob" }));
}

#[tokio::test]
async fn test_invalid_id_is_rejected_as_user_input() {
    let gateway = TestGateway::seeded().await;

    let response = gateway.execute(r#"{ course(id: "abc") { id } }"#).await;

    assert_eq!(response.errors.len(), 1);
    let error = &response.errors[0];
    assert_eq!(error.message, "invalid course ID: abc");
    let extensions = error.extensions.as_ref().expect("extensions are set");
    assert_eq!(
        extensions.get("code"),
        Some(&async_graphql::Value::from("BAD_USER_INPUT"))
    );
}

#[tokio::test]
async fn test_course_filters() {
    let gateway = TestGateway::seeded().await;
    gateway
        .courses
        .add_course(CourseFixture::new(3, "Painting", "Turner", "Arts"));

    let data = gateway
        .data(
            r#"{
                byCategory: coursesByCategory(category: "cs") { id }
                byInstructor: coursesByInstructor(instructor: "turner") { name }
                search: searchCourses(keyword: "data") { id }
            }"#,
        )
        .await;

    assert_eq!(ids(&data["byCategory"]), vec!["1", "2"]);
    assert_eq!(data["byInstructor"], json!([{ "name": "Painting" }]));
    assert_eq!(ids(&data["search"]), vec!["2"]);
}

#[tokio::test]
async fn test_universities_by_location() {
    let gateway = TestGateway::seeded().await;

    let data = gateway
        .data(r#"{ universitiesByLocation(location: "Tetouan") { name } }"#)
        .await;

    assert_eq!(data["universitiesByLocation"], json!([{ "name": "ENSA" }]));
}

// =============================================================================
// Field Resolvers
// =============================================================================

#[tokio::test]
async fn test_course_students_resolves_enrolled_student() {
    let gateway = TestGateway::seeded().await;

    let data = gateway
        .data(r#"{ courseWithStudents(id: "1") { name students { id firstName } } }"#)
        .await;

    assert_eq!(
        data["courseWithStudents"],
        json!({
            "name": "Algorithms",
            "students": [{ "id": "10", "firstName": "Alice" }]
        })
    );
}

#[tokio::test]
async fn test_unresolvable_student_is_dropped_from_roster() {
    let gateway = TestGateway::seeded().await;
    gateway.courses.enroll(1, 999);
    gateway.courses.enroll(1, 11);

    let data = gateway
        .data(r#"{ course(id: "1") { students { id } } }"#)
        .await;

    assert_eq!(gateway.courses.roster(1).len(), 3);
    assert_eq!(ids(&data["course"]["students"]), vec!["10", "11"]);
}

#[tokio::test]
async fn test_failed_student_lookup_is_dropped_from_roster() {
    let gateway = TestGateway::seeded().await;
    gateway.courses.enroll(1, 11);
    gateway.students.mock_student_lookup_failure(10, 500).await;

    let data = gateway
        .data(r#"{ course(id: "1") { students { id } } }"#)
        .await;

    assert_eq!(ids(&data["course"]["students"]), vec!["11"]);
}

#[tokio::test]
async fn test_roster_lookups_run_concurrently() {
    let gateway = TestGateway::start().await;
    let ensa = ensa();
    gateway.students.add_university(ensa.clone());
    gateway
        .courses
        .add_course(CourseFixture::new(7, "Crowded", "Lamport", "CS"));
    for id in 20..25 {
        gateway
            .students
            .add_student(StudentFixture::new(id, &format!("Student{id}"), &ensa));
        gateway.courses.enroll(7, id);
    }

    let delay = Duration::from_millis(300);
    gateway.students.set_lookup_delay(delay);

    let started = Instant::now();
    let data = gateway
        .data(r#"{ course(id: "7") { students { id } } }"#)
        .await;
    let elapsed = started.elapsed();

    assert_eq!(
        ids(&data["course"]["students"]),
        vec!["20", "21", "22", "23", "24"]
    );
    assert!(
        elapsed < delay * 3,
        "five lookups took {elapsed:?}, expected close to {delay:?}"
    );
}

#[tokio::test]
async fn test_roster_failure_keeps_other_course_fields() {
    let gateway = TestGateway::seeded().await;
    gateway.courses.mock_roster_failure(1, 500).await;

    let response = gateway
        .execute(r#"{ course(id: "1") { name instructor students { id } } }"#)
        .await;

    assert!(response.errors.is_empty());
    assert_eq!(
        response_json(response)["course"],
        json!({ "name": "Algorithms", "instructor": "Knuth", "students": [] })
    );
}

#[tokio::test]
async fn test_student_courses() {
    let gateway = TestGateway::seeded().await;
    gateway.courses.enroll(2, 10);
    gateway.courses.enroll(404, 10);

    let data = gateway
        .data(r#"{ studentWithCourses(id: "10") { firstName courses { name } } }"#)
        .await;

    assert_eq!(
        data["studentWithCourses"],
        json!({
            "firstName": "Alice",
            "courses": [{ "name": "Algorithms" }, { "name": "Databases" }]
        })
    );
}

#[tokio::test]
async fn test_university_students() {
    let gateway = TestGateway::seeded().await;

    let data = gateway
        .data(r#"{ university(id: "1") { name students { firstName } } }"#)
        .await;

    assert_eq!(
        data["university"],
        json!({
            "name": "ENSA",
            "students": [{ "firstName": "Alice" }, { "firstName": "Bob" }]
        })
    );
}

#[tokio::test]
async fn test_enrollment_course_is_null_when_missing() {
    let gateway = TestGateway::seeded().await;
    gateway.courses.enroll(404, 11);

    let data = gateway
        .data(r#"{ enrollmentsByStudent(studentId: "11") { courseId course { name } } }"#)
        .await;

    assert_eq!(
        data["enrollmentsByStudent"],
        json!([{ "courseId": "404", "course": null }])
    );
}

// =============================================================================
// Degradation
// =============================================================================

#[tokio::test]
async fn test_listings_degrade_to_empty_when_service_is_down() {
    let gateway = TestGateway::seeded().await;
    gateway.students.mock_unavailable().await;
    gateway.courses.mock_unavailable().await;

    let response = gateway
        .execute(
            r#"{
                students { id }
                universities { id }
                courses { id }
                enrollments { id }
                student(id: "10") { id }
            }"#,
        )
        .await;

    assert!(response.errors.is_empty());
    assert_eq!(
        response_json(response),
        json!({
            "students": [],
            "universities": [],
            "courses": [],
            "enrollments": [],
            "student": null
        })
    );
}

#[tokio::test]
async fn test_student_courses_degrade_when_course_service_down() {
    let gateway = TestGateway::seeded().await;
    gateway.courses.mock_unavailable().await;

    let response = gateway
        .execute(r#"{ student(id: "10") { firstName courses { id } university { name } } }"#)
        .await;

    assert!(response.errors.is_empty());
    assert_eq!(
        response_json(response)["student"],
        json!({
            "firstName": "Alice",
            "courses": [],
            "university": { "name": "ENSA" }
        })
    );
}

#[tokio::test]
async fn test_university_students_degrade_when_student_listing_fails() {
    let gateway = TestGateway::seeded().await;
    gateway.students.mock_university_students_failure(1, 500).await;

    let response = gateway
        .execute(r#"{ university(id: "1") { name location students { id } } }"#)
        .await;

    assert!(response.errors.is_empty());
    assert_eq!(
        response_json(response)["university"],
        json!({ "name": "ENSA", "location": "Tetouan", "students": [] })
    );
    assert_eq!(
        gateway.students.request_count("/api/students/university/1").await,
        1
    );
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn test_enroll_then_unenroll_updates_roster() {
    let gateway = TestGateway::seeded().await;
    let roster = r#"{ course(id: "1") { students { id } } }"#;

    let enrolled = gateway
        .data(r#"mutation { enrollStudent(courseId: "1", studentId: "11") { studentId courseId } }"#)
        .await;
    assert_eq!(
        enrolled["enrollStudent"],
        json!({ "studentId": "11", "courseId": "1" })
    );

    let data = gateway.data(roster).await;
    assert_eq!(ids(&data["course"]["students"]), vec!["10", "11"]);

    let unenrolled = gateway
        .data(r#"mutation { unenrollStudent(courseId: "1", studentId: "11") }"#)
        .await;
    assert_eq!(unenrolled["unenrollStudent"], json!(true));

    let data = gateway.data(roster).await;
    assert_eq!(ids(&data["course"]["students"]), vec!["10"]);
}

#[tokio::test]
async fn test_deleted_student_disappears_from_roster() {
    let gateway = TestGateway::seeded().await;
    let roster = r#"{ course(id: "1") { name students { id firstName } } }"#;

    let data = gateway.data(roster).await;
    assert_eq!(
        data["course"],
        json!({
            "name": "Algorithms",
            "students": [{ "id": "10", "firstName": "Alice" }]
        })
    );

    let deleted = gateway
        .data(r#"mutation { deleteStudent(id: "10") }"#)
        .await;
    assert_eq!(deleted["deleteStudent"], json!(true));

    let data = gateway.data(roster).await;
    assert_eq!(data["course"]["students"], json!([]));
    assert_eq!(gateway.courses.roster(1), vec![10]);
}

// =============================================================================
// Chatbot
// =============================================================================

#[tokio::test]
async fn test_translate() {
    let gateway = TestGateway::start().await;
    gateway.chatbot.mock_translate_success("Bonjour").await;

    let data = gateway
        .data(r#"{ translate(text: "Hello") { translatedText sourceLanguage targetLanguageName } }"#)
        .await;

    assert_eq!(
        data["translate"],
        json!({
            "translatedText": "Bonjour",
            "sourceLanguage": "en_XX",
            "targetLanguageName": "French"
        })
    );
}

#[tokio::test]
async fn test_translate_failure_is_generic() {
    let gateway = TestGateway::start().await;
    gateway
        .chatbot
        .mock_translate_failure(500, "CUDA out of memory")
        .await;

    let response = gateway
        .execute(r#"{ translate(text: "Hello") { translatedText } }"#)
        .await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "Failed to translate text");
    assert!(!format!("{:?}", response.errors).contains("CUDA"));
}

#[tokio::test]
async fn test_summarize() {
    let gateway = TestGateway::start().await;
    gateway
        .chatbot
        .mock_summarize_success("Distributed systems are hard.")
        .await;

    let data = gateway
        .data(r#"{ summarize(text: "A long text about distributed systems.", maxLength: 60) { summary summaryWordCount } }"#)
        .await;

    assert_eq!(
        data["summarize"],
        json!({ "summary": "Distributed systems are hard.", "summaryWordCount": 4 })
    );
}

#[tokio::test]
async fn test_supported_languages_are_ordered_by_code() {
    let gateway = TestGateway::start().await;
    gateway
        .chatbot
        .mock_languages(&[("fr_XX", "French"), ("ar_AR", "Arabic"), ("en_XX", "English")])
        .await;

    let data = gateway
        .data("{ supportedLanguages { count languages { code name } } }")
        .await;

    assert_eq!(data["supportedLanguages"]["count"], json!(3));
    assert_eq!(
        data["supportedLanguages"]["languages"],
        json!([
            { "code": "ar_AR", "name": "Arabic" },
            { "code": "en_XX", "name": "English" },
            { "code": "fr_XX", "name": "French" }
        ])
    );
}
