//! Wizard, staging and editor behavior without any backend.

mod common;

use common::{filled_course, save_simple_exam, wizard_at_exams};
use lms_core::drafts::{OptionDraft, QuestionDraft};
use lms_core::enums::WizardStep;
use lms_core::validation::{self, FieldViolation};
use lms_wizard::{CourseWizard, CoursePlan, EditorError, StagedExam, StagingError, WizardError};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn option(text: &str, is_correct: bool) -> OptionDraft {
    OptionDraft {
        option_text: text.into(),
        is_correct,
    }
}

#[test]
fn zero_cost_keeps_wizard_on_first_step() {
    let mut wizard = CourseWizard::new();
    *wizard.course_mut() = filled_course();
    wizard.course_mut().cost = 0.0;

    let err = wizard.advance().unwrap_err();

    assert!(matches!(
        err,
        WizardError::StepRejected { ref violations, .. }
            if violations == &vec![FieldViolation::NotPositive { field: "cost" }]
    ));
    assert_eq!(wizard.step(), WizardStep::CourseDetails);
}

#[test]
fn two_correct_options_fail_validation() {
    let question = QuestionDraft {
        question_text: "Which are primes?".into(),
        marks: 1,
        options: vec![option("2", true), option("3", true), option("4", false)],
    };

    let validity = validation::validate_question(&question);

    assert!(!validity.has_one_correct);
    assert!(!validity.is_valid);
    assert!(validity.has_text && validity.has_marks && validity.has_enough_options);
}

#[rstest]
#[case::valid("Q", 1, &[("a", true), ("b", false)], true)]
#[case::blank_text("   ", 1, &[("a", true), ("b", false)], false)]
#[case::zero_marks("Q", 0, &[("a", true), ("b", false)], false)]
#[case::one_option("Q", 1, &[("a", true)], false)]
#[case::no_correct("Q", 1, &[("a", false), ("b", false)], false)]
#[case::empty_option("Q", 1, &[("a", true), (" ", false)], false)]
fn validity_is_the_and_of_its_checks(
    #[case] text: &str,
    #[case] marks: i64,
    #[case] options: &[(&str, bool)],
    #[case] expected: bool,
) {
    let question = QuestionDraft {
        question_text: text.into(),
        marks,
        options: options.iter().map(|(t, c)| option(t, *c)).collect(),
    };
    let v = validation::validate_question(&question);
    assert_eq!(v.is_valid, expected);
    assert_eq!(
        v.is_valid,
        v.has_text
            && v.has_marks
            && v.has_enough_options
            && v.has_one_correct
            && v.has_no_empty_options
    );
}

#[test]
fn editing_allows_invalid_states_until_save() {
    let mut wizard = wizard_at_exams();
    let exam = wizard.add_draft_exam();
    let staging = wizard.staging_mut();
    staging.set_exam_name(exam, "Quiz").unwrap();
    let question = staging.add_question(exam).unwrap();
    staging.add_option(exam, question).unwrap();
    staging.set_question_text(exam, question, "Half done").unwrap();

    assert!(!staging.validate_question(exam, question).unwrap().is_valid);
    let err = staging.save_exam(exam).unwrap_err();
    assert!(matches!(err, StagingError::InvalidExam(ref v) if v.len() == 1));
    assert_eq!(staging.in_progress_count(), 1);
    assert_eq!(staging.saved_count(), 0);
}

#[test]
fn saved_and_in_progress_views_partition_exams() {
    let mut wizard = wizard_at_exams();
    save_simple_exam(&mut wizard, "A");
    save_simple_exam(&mut wizard, "B");
    wizard.add_draft_exam();

    let staging = wizard.staging_mut();
    staging.edit_saved_exam(0).unwrap();
    assert_eq!(staging.saved_count(), 1);
    assert_eq!(staging.in_progress_count(), 2);
    assert_eq!(staging.in_progress_exam(1).unwrap().draft().name, "A");

    staging.save_exam(1).unwrap();
    let saved: Vec<_> = staging.saved().map(|e| e.name.as_str()).collect();
    assert_eq!(saved, vec!["B", "A"]);
    assert_eq!(staging.exams().len(), 3);
    assert!(
        staging
            .exams()
            .iter()
            .filter(|e| matches!(e, StagedExam::InProgress(_)))
            .count()
            == 1
    );
}

#[test]
fn removing_options_from_a_two_option_question_is_a_no_op() {
    let mut wizard = wizard_at_exams();
    let exam = wizard.add_draft_exam();
    let staging = wizard.staging_mut();
    let question = staging.add_question(exam).unwrap();
    staging.add_option(exam, question).unwrap();
    let before = staging.clone();

    for index in 0..2 {
        assert!(matches!(
            staging.remove_option(exam, question, index),
            Err(EditorError::TooFewOptions { count: 2, .. })
        ));
    }
    assert_eq!(*staging, before);
}

#[test]
fn deleting_the_only_saved_exam_blocks_the_exam_step() {
    let mut wizard = wizard_at_exams();
    save_simple_exam(&mut wizard, "Only");
    assert!(wizard.step_violations(WizardStep::ExamDetails).is_empty());

    wizard.staging_mut().request_delete_saved(0).unwrap();
    wizard.staging_mut().confirm_delete().unwrap();

    assert_eq!(wizard.step_violations(WizardStep::ExamDetails).len(), 1);
}

#[test]
fn plan_file_replays_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("course.json");
    std::fs::write(
        &path,
        r#"{
            "course": {"course_id": "PY101", "title": "Python", "description": "Intro",
                       "status": "inactive", "cost": 20, "duration": 6},
            "certificate": {"cert_id": "PY-1", "cert_name": "Python Cert"},
            "exams": [{
                "name": "Quiz",
                "pass_mark": 50,
                "questions": [{
                    "text": "2 + 2?",
                    "marks": 3,
                    "options": [{"text": "4", "correct": true}, {"text": "5"}]
                }]
            }]
        }"#,
    )
    .unwrap();

    let replay = CoursePlan::from_path(&path).unwrap().replay(true).unwrap();

    assert!(replay.report.all_saved());
    let exam = replay.wizard.staging().saved_exam(0).unwrap();
    assert_eq!(exam.pass_mark, 50);
    assert_eq!(exam.duration, 60);
    assert_eq!(exam.total_marks(), 3);
    assert_eq!(replay.wizard.step(), WizardStep::ExamDetails);
}

#[test]
fn missing_plan_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CoursePlan::from_path(&dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().starts_with("failed to read plan"));
}
