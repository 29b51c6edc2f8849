use chrono::{DateTime, Utc};
use lms_core::entities::Student;
use lms_core::enums::StudentStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct StudentRow {
    id: i64,
    name: String,
    email: String,
    status: StudentStatus,
    courses: usize,
    joined: Option<String>,
}

impl From<&Student> for StudentRow {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id,
            name: student.full_name(),
            email: student.email.clone(),
            status: student.status,
            courses: student.student_courses.len(),
            joined: student.created_at.as_ref().map(format_date),
        }
    }
}

fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

pub async fn run(
    search: Option<&str>,
    status: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let status = status
        .map(|raw| parse_enum::<StudentStatus>(raw, "status"))
        .transpose()?;

    let mut students = ctx.client.list_students().await?;
    if let Some(status) = status {
        students.retain(|student| student.status == status);
    }
    if let Some(needle) = search.map(str::trim).filter(|n| !n.is_empty()) {
        students.retain(|student| student.matches(needle));
    }
    truncate(&mut students, limit);

    let rows = students.iter().map(StudentRow::from).collect::<Vec<_>>();
    output(&rows, flags.format)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn row_counts_enrollments_and_formats_join_date() {
        let student = Student {
            id: 4,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: String::new(),
            status: StudentStatus::Active,
            created_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()),
            updated_at: None,
            student_courses: vec![Default::default(), Default::default()],
        };
        let row = StudentRow::from(&student);
        assert_eq!(row.name, "Ada Lovelace");
        assert_eq!(row.courses, 2);
        assert_eq!(row.joined.as_deref(), Some("2024-05-01"));
    }
}
