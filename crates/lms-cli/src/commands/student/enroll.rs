use anyhow::Context;
use lms_core::entities::{Course, Student};
use lms_core::errors::CoreError;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    student_id: i64,
    course_id: i64,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (students, courses) =
        tokio::try_join!(ctx.client.list_students(), ctx.client.list_courses())?;

    let student = students
        .iter()
        .find(|s| s.id == student_id)
        .ok_or_else(|| not_found("student", student_id))?;
    let course = courses
        .iter()
        .find(|c| c.id == course_id)
        .ok_or_else(|| not_found("course", course_id))?;
    check_enrollment(student, course)?;

    let response = ctx
        .client
        .enroll_student(student_id, course_id)
        .await
        .with_context(|| {
            format!(
                "failed to enroll {} in {}",
                student.full_name(),
                course.course_id
            )
        })?;
    output(&response, flags.format)
}

fn not_found(entity_type: &str, id: i64) -> CoreError {
    CoreError::NotFound {
        entity_type: entity_type.to_string(),
        id: id.to_string(),
    }
}

/// Only active courses take enrollments, and each student at most once.
fn check_enrollment(student: &Student, course: &Course) -> anyhow::Result<()> {
    if !course.is_active() {
        anyhow::bail!(
            "course {} is {}; only active courses accept enrollments",
            course.course_id,
            course.status
        );
    }
    if student.is_enrolled_in(course.id) {
        anyhow::bail!(
            "{} is already enrolled in {}",
            student.full_name(),
            course.course_id
        );
    }
    Ok(())
}
