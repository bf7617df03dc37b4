use crate::country::yugoslavia::SuccessorState;
use crate::country::{CitizenInformationExtractor, IdValidator};
use crate::{CitizenRecord, ExtractError, InvalidLengthError};

pub struct SloveniaIdValidator;
pub struct SloveniaCitizenInformationExtractor;

const SLOVENIA: SuccessorState = SuccessorState {
    id_name: "Slovenia EMŠO",
    length_context: "The Slovenian EMŠO must have 13 digits",
    invalid_id_message: "Provided EMŠO is invalid",
};

impl IdValidator for SloveniaIdValidator {
    fn validate(&self, id: &str) -> Result<bool, InvalidLengthError> {
        SLOVENIA.validate(id)
    }
}

impl CitizenInformationExtractor for SloveniaCitizenInformationExtractor {
    fn extract(&self, id: &str) -> Result<CitizenRecord, ExtractError> {
        SLOVENIA.extract(id)
    }
}
