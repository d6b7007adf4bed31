//! Student entity: an end user enrolling in tests and domains.

use chrono::{DateTime, Utc};

/// A student as read by the API.
///
/// Verification codes and the credential column live only in the schema;
/// read paths select the public columns below, so sensitive fields cannot
/// appear in any response body.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile_number: Option<String>,
    pub bio: Option<String>,
    pub branch: Option<String>,
    pub registration_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Contact projection used by the batch student lookup.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StudentContact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_student_construction() {
        let student = Student {
            id: 7,
            name: "Asha Rao".to_string(),
            email: "asha@university.example".to_string(),
            mobile_number: None,
            bio: None,
            branch: Some("CSE".to_string()),
            registration_number: Some("21BCE0042".to_string()),
            created_at: Utc::now(),
        };

        assert_eq!(student.id, 7);
        assert_eq!(student.branch.as_deref(), Some("CSE"));
    }
}
