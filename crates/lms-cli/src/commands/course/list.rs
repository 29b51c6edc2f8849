use lms_core::entities::Course;
use lms_core::enums::CourseStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CourseRow {
    id: i64,
    course_id: String,
    title: String,
    status: CourseStatus,
    cost: f64,
    duration: f64,
    certificates: usize,
}

impl From<Course> for CourseRow {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            certificates: course.certificates.len(),
            course_id: course.course_id,
            title: course.title,
            status: course.status,
            cost: course.cost,
            duration: course.duration,
        }
    }
}

pub async fn run(
    status: Option<&str>,
    search: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_session()?;
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let status = status
        .map(|raw| parse_enum::<CourseStatus>(raw, "status"))
        .transpose()?;

    let mut courses = filter_courses(ctx.client.list_courses().await?, status, search);
    truncate(&mut courses, limit);

    let rows = courses.into_iter().map(CourseRow::from).collect::<Vec<_>>();
    output(&rows, flags.format)
}

fn filter_courses(
    mut courses: Vec<Course>,
    status: Option<CourseStatus>,
    search: Option<&str>,
) -> Vec<Course> {
    if let Some(status) = status {
        courses.retain(|course| course.status == status);
    }
    if let Some(needle) = search.map(str::trim).filter(|n| !n.is_empty()) {
        let needle = needle.to_lowercase();
        courses.retain(|course| {
            course.title.to_lowercase().contains(&needle)
                || course.course_id.to_lowercase().contains(&needle)
        });
    }
    courses
}
