use crate::country::yugoslavia::SuccessorState;
use crate::country::{CitizenInformationExtractor, IdValidator};
use crate::{CitizenRecord, ExtractError, InvalidLengthError};

pub struct BosniaIdValidator;
pub struct BosniaCitizenInformationExtractor;

const BOSNIA: SuccessorState = SuccessorState {
    id_name: "Bosnia and Herzegovina JMBG",
    length_context: "The Bosnian JMBG must have 13 digits",
    invalid_id_message: "Provided JMBG is invalid",
};

impl IdValidator for BosniaIdValidator {
    fn validate(&self, id: &str) -> Result<bool, InvalidLengthError> {
        BOSNIA.validate(id)
    }
}

impl CitizenInformationExtractor for BosniaCitizenInformationExtractor {
    fn extract(&self, id: &str) -> Result<CitizenRecord, ExtractError> {
        BOSNIA.extract(id)
    }
}
