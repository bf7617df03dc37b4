use crate::country::yugoslavia::SuccessorState;
use crate::country::{CitizenInformationExtractor, IdValidator};
use crate::{CitizenRecord, ExtractError, InvalidLengthError};

pub struct MontenegroIdValidator;
pub struct MontenegroCitizenInformationExtractor;

const MONTENEGRO: SuccessorState = SuccessorState {
    id_name: "Montenegro JMBG",
    length_context: "The Montenegrin JMBG must have 13 digits",
    invalid_id_message: "Provided JMBG is invalid",
};

impl IdValidator for MontenegroIdValidator {
    fn validate(&self, id: &str) -> Result<bool, InvalidLengthError> {
        MONTENEGRO.validate(id)
    }
}

impl CitizenInformationExtractor for MontenegroCitizenInformationExtractor {
    fn extract(&self, id: &str) -> Result<CitizenRecord, ExtractError> {
        MONTENEGRO.extract(id)
    }
}
