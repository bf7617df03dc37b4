use crate::country::yugoslavia::SuccessorState;
use crate::country::{CitizenInformationExtractor, IdValidator};
use crate::{CitizenRecord, ExtractError, InvalidLengthError};

pub struct NorthMacedoniaIdValidator;
pub struct NorthMacedoniaCitizenInformationExtractor;

const NORTH_MACEDONIA: SuccessorState = SuccessorState {
    id_name: "North Macedonia UMCN",
    length_context: "The Macedonian UMCN must have 13 digits",
    invalid_id_message: "Provided UMCN is invalid",
};

impl IdValidator for NorthMacedoniaIdValidator {
    fn validate(&self, id: &str) -> Result<bool, InvalidLengthError> {
        NORTH_MACEDONIA.validate(id)
    }
}

impl CitizenInformationExtractor for NorthMacedoniaCitizenInformationExtractor {
    fn extract(&self, id: &str) -> Result<CitizenRecord, ExtractError> {
        NORTH_MACEDONIA.extract(id)
    }
}
