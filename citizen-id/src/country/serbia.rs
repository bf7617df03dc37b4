use crate::country::yugoslavia::SuccessorState;
use crate::country::{CitizenInformationExtractor, IdValidator};
use crate::{CitizenRecord, ExtractError, InvalidLengthError};

pub struct SerbiaIdValidator;
pub struct SerbiaCitizenInformationExtractor;

const SERBIA: SuccessorState = SuccessorState {
    id_name: "Serbia JMBG",
    length_context: "The Serbian JMBG must have 13 digits",
    invalid_id_message: "Provided JMBG is invalid",
};

impl IdValidator for SerbiaIdValidator {
    fn validate(&self, id: &str) -> Result<bool, InvalidLengthError> {
        SERBIA.validate(id)
    }
}

impl CitizenInformationExtractor for SerbiaCitizenInformationExtractor {
    fn extract(&self, id: &str) -> Result<CitizenRecord, ExtractError> {
        SERBIA.extract(id)
    }
}
