//! Record fixtures shaped like the upstream services' JSON

use serde_json::{json, Value};

/// Fixture for a university record (student service, camelCase)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniversityFixture {
    pub id: i64,
    pub name: String,
    pub location: String,
}

impl UniversityFixture {
    pub fn new(id: i64, name: &str, location: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            location: location.to_string(),
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "location": self.location,
        })
    }
}

/// Fixture for a student record with its university embedded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFixture {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub university: UniversityFixture,
}

impl StudentFixture {
    /// Create a student named `first_name` at `university`
    ///
    /// The last name defaults to "Doe" and the email is derived from the first
    /// name.
    pub fn new(id: i64, first_name: &str, university: &UniversityFixture) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            email: format!("{}@campus.test", first_name.to_lowercase()),
            university: university.clone(),
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "firstName": self.first_name,
            "lastName": self.last_name,
            "email": self.email,
            "university": self.university.to_json(),
        })
    }

    /// Whether a keyword search on the student service would return this student
    pub(crate) fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.first_name.to_lowercase().contains(&keyword)
            || self.last_name.to_lowercase().contains(&keyword)
            || self.university.name.to_lowercase().contains(&keyword)
            || self.id.to_string() == keyword
    }
}

/// Fixture for a course record (course service, snake_case)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseFixture {
    pub id: i64,
    pub name: String,
    pub instructor: String,
    pub category: String,
    pub schedule: String,
}

impl CourseFixture {
    pub fn new(id: i64, name: &str, instructor: &str, category: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            instructor: instructor.to_string(),
            category: category.to_string(),
            schedule: "Mon 09:00-11:00".to_string(),
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "instructor": self.instructor,
            "category": self.category,
            "schedule": self.schedule,
            "created_at": "2024-09-01T08:00:00Z",
            "updated_at": "2024-09-01T08:00:00Z",
        })
    }
}

/// Fixture for an enrollment join record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentFixture {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
}

impl EnrollmentFixture {
    pub fn new(id: i64, student_id: i64, course_id: i64) -> Self {
        Self {
            id,
            student_id,
            course_id,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "student_id": self.student_id,
            "course": self.course_id,
            "enrolled_at": "2024-09-02T10:00:00Z",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_json_embeds_university() {
        let ensa = UniversityFixture::new(1, "ENSA", "Tetouan");
        let alice = StudentFixture::new(10, "Alice", &ensa);
        let json = alice.to_json();

        assert_eq!(json["firstName"], "Alice");
        assert_eq!(json["email"], "alice@campus.test");
        assert_eq!(json["university"]["id"], 1);
    }

    #[test]
    fn test_keyword_matching() {
        let ensa = UniversityFixture::new(1, "ENSA", "Tetouan");
        let alice = StudentFixture::new(10, "Alice", &ensa);

        assert!(alice.matches_keyword("ali"));
        assert!(alice.matches_keyword("ensa"));
        assert!(alice.matches_keyword("10"));
        assert!(!alice.matches_keyword("bob"));
    }

    #[test]
    fn test_enrollment_json_uses_course_key() {
        let json = EnrollmentFixture::new(1, 10, 2).to_json();
        assert_eq!(json["course"], 2);
        assert_eq!(json["student_id"], 10);
    }
}
