//! Status enums and wizard steps.
//!
//! All enums use lowercase/snake_case serialization. `WizardStep` provides
//! `next()`/`previous()` for the three-step course wizard; the wizard itself
//! decides whether a transition is allowed.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// CourseStatus
// ---------------------------------------------------------------------------

/// Publication status of a course.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    #[default]
    Active,
    Inactive,
}

impl CourseStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(CoreError::InvalidValue {
                field: "status".into(),
                value: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// StudentStatus
// ---------------------------------------------------------------------------

/// Account status of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StudentStatus {
    Active,
    Inactive,
}

impl StudentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(CoreError::InvalidValue {
                field: "status".into(),
                value: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Pass/fail outcome of a graded submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Pass,
    Fail,
    /// Submission has not been scored yet.
    Pending,
}

impl Outcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WizardStep
// ---------------------------------------------------------------------------

/// Step of the course-creation wizard.
///
/// ```text
/// course_details → certificate_details → exam_details
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    CourseDetails,
    CertificateDetails,
    ExamDetails,
}

impl WizardStep {
    /// One-based step number as shown to the user.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::CourseDetails => 1,
            Self::CertificateDetails => 2,
            Self::ExamDetails => 3,
        }
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::CourseDetails => Some(Self::CertificateDetails),
            Self::CertificateDetails => Some(Self::ExamDetails),
            Self::ExamDetails => None,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::CourseDetails => None,
            Self::CertificateDetails => Some(Self::CourseDetails),
            Self::ExamDetails => Some(Self::CertificateDetails),
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::CourseDetails => "Basic Details",
            Self::CertificateDetails => "Certificate Details",
            Self::ExamDetails => "Exam Details",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CourseDetails => "course_details",
            Self::CertificateDetails => "certificate_details",
            Self::ExamDetails => "exam_details",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.number(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("active", CourseStatus::Active)]
    #[case("Inactive", CourseStatus::Inactive)]
    #[case(" ACTIVE ", CourseStatus::Active)]
    fn course_status_parses_case_insensitively(
        #[case] input: &str,
        #[case] expected: CourseStatus,
    ) {
        assert_eq!(input.parse::<CourseStatus>().unwrap(), expected);
    }

    #[test]
    fn course_status_rejects_unknown() {
        let err = "archived".parse::<CourseStatus>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidValue { .. }));
    }

    #[test]
    fn course_status_serializes_lowercase() {
        let json = serde_json::to_string(&CourseStatus::Inactive).unwrap();
        assert_eq!(json, "\"inactive\"");
    }

    #[test]
    fn wizard_steps_chain_forward_and_back() {
        let mut step = WizardStep::default();
        assert_eq!(step.number(), 1);
        assert!(step.previous().is_none());

        step = step.next().unwrap();
        step = step.next().unwrap();
        assert_eq!(step, WizardStep::ExamDetails);
        assert!(step.next().is_none());
        assert_eq!(step.previous(), Some(WizardStep::CertificateDetails));
    }

    #[test]
    fn wizard_step_display_includes_number_and_title() {
        assert_eq!(
            WizardStep::CertificateDetails.to_string(),
            "step 2 (Certificate Details)"
        );
    }
}
