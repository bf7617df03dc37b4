use thiserror::Error;

/// Raised when an identifier does not have the fixed length of its national scheme.
///
/// This is the only validation failure that is surfaced as an error. Every other
/// structural or checksum failure is reported as `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvalidLengthError {
    id_name: String,
    expected: usize,
    actual: usize,
    message: String,
}

impl InvalidLengthError {
    pub fn new(id_name: impl Into<String>, expected: usize, actual: usize) -> Self {
        let id_name = id_name.into();
        let message =
            format!("{id_name} must be {expected} characters long, got {actual} characters");
        Self {
            id_name,
            expected,
            actual,
            message,
        }
    }

    /// Re-label the error for the country that was originally asked for, keeping the
    /// underlying message after the given context.
    pub fn rewrap(self, id_name: impl Into<String>, context: &str) -> Self {
        Self {
            id_name: id_name.into(),
            expected: self.expected,
            actual: self.actual,
            message: format!("{context}, {}", self.message),
        }
    }

    pub fn id_name(&self) -> &str {
        &self.id_name
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    pub fn actual(&self) -> usize {
        self.actual
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error(transparent)]
    InvalidLength(#[from] InvalidLengthError),

    /// The identifier failed re-validation or one of its decoded fields is out of range
    #[error("{0}")]
    InvalidId(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Country code `{0}` is not supported")]
    UnsupportedCountry(String),

    #[error(transparent)]
    InvalidLength(InvalidLengthError),

    #[error("{0}")]
    InvalidId(String),
}

impl From<InvalidLengthError> for RegistryError {
    fn from(err: InvalidLengthError) -> Self {
        RegistryError::InvalidLength(err)
    }
}

impl From<ExtractError> for RegistryError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::InvalidLength(err) => RegistryError::InvalidLength(err),
            ExtractError::InvalidId(message) => RegistryError::InvalidId(message),
        }
    }
}
