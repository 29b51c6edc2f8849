use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::requests::CreateCertificateRequest;
use crate::validation::{self, FieldViolation};

const fn default_pass_mark() -> i64 {
    70
}

const fn default_time_limit() -> i64 {
    60
}

/// Certification fields collected on step 2 of the wizard.
///
/// `pass_mark` and `time_limit` are the defaults copied into every exam at
/// the moment the exam is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CertificateDraft {
    pub cert_id: String,
    pub cert_name: String,
    /// Minimum percentage score, 1–100.
    #[serde(default = "default_pass_mark")]
    pub pass_mark: i64,
    /// Time limit in minutes.
    #[serde(default = "default_time_limit")]
    pub time_limit: i64,
}

impl Default for CertificateDraft {
    fn default() -> Self {
        Self {
            cert_id: String::new(),
            cert_name: String::new(),
            pass_mark: default_pass_mark(),
            time_limit: default_time_limit(),
        }
    }
}

impl CertificateDraft {
    #[must_use]
    pub fn violations(&self) -> Vec<FieldViolation> {
        validation::validate_certificate(self)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }

    /// Wire shape for `POST /certificates`, bound to a created course.
    #[must_use]
    pub fn to_request(&self, course_id: i64) -> CreateCertificateRequest {
        CreateCertificateRequest {
            cert_id: self.cert_id.trim().to_string(),
            cert_name: self.cert_name.trim().to_string(),
            course_id,
        }
    }
}
