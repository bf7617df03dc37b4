use crate::{Country, Labels};
use metrics::counter;

const VALIDATIONS: &str = "national_id.validations";
const EXTRACTIONS: &str = "national_id.extractions";
const UNSUPPORTED_COUNTRY: &str = "national_id.unsupported_country";

const COUNTRY: &str = "country";
const STATUS: &str = "status";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationStatus {
    Valid,
    Invalid,
    InvalidLength,
}

impl ValidationStatus {
    fn as_str(&self) -> &'static str {
        match self {
            ValidationStatus::Valid => "valid",
            ValidationStatus::Invalid => "invalid",
            ValidationStatus::InvalidLength => "invalid_length",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtractionStatus {
    Success,
    InvalidId,
    InvalidLength,
}

impl ExtractionStatus {
    fn as_str(&self) -> &'static str {
        match self {
            ExtractionStatus::Success => "success",
            ExtractionStatus::InvalidId => "invalid_id",
            ExtractionStatus::InvalidLength => "invalid_length",
        }
    }
}

pub struct RegistryMetrics {
    labels: Labels,
}

impl RegistryMetrics {
    pub fn new(labels: &Labels) -> Self {
        RegistryMetrics {
            labels: labels.clone(),
        }
    }

    pub fn record_validation(&self, country: Country, status: ValidationStatus) {
        counter!(
            VALIDATIONS,
            self.labels
                .clone_with_labels(&[(COUNTRY, country.code()), (STATUS, status.as_str())])
        )
        .increment(1);
    }

    pub fn record_extraction(&self, country: Country, status: ExtractionStatus) {
        counter!(
            EXTRACTIONS,
            self.labels
                .clone_with_labels(&[(COUNTRY, country.code()), (STATUS, status.as_str())])
        )
        .increment(1);
    }

    pub fn record_unsupported_country(&self) {
        counter!(UNSUPPORTED_COUNTRY, self.labels.clone()).increment(1);
    }
}
