mod bosnia;
mod mexico;
mod montenegro;
mod north_macedonia;
mod serbia;
mod slovenia;
mod yugoslavia;

pub use crate::country::bosnia::{BosniaCitizenInformationExtractor, BosniaIdValidator};
pub use crate::country::mexico::{MexicoCitizenInformationExtractor, MexicoIdValidator};
pub use crate::country::montenegro::{
    MontenegroCitizenInformationExtractor, MontenegroIdValidator,
};
pub use crate::country::north_macedonia::{
    NorthMacedoniaCitizenInformationExtractor, NorthMacedoniaIdValidator,
};
pub use crate::country::serbia::{SerbiaCitizenInformationExtractor, SerbiaIdValidator};
pub use crate::country::slovenia::{SloveniaCitizenInformationExtractor, SloveniaIdValidator};
pub use crate::country::yugoslavia::{
    YugoslaviaCitizenInformationExtractor, YugoslaviaIdValidator,
};

use crate::{CitizenRecord, ExtractError, InvalidLengthError};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Structural and checksum check of a national identification number.
pub trait IdValidator: Send + Sync {
    /// Returns `Ok(false)` for any malformed identifier. The only error is a length that
    /// does not match the national scheme.
    fn validate(&self, id: &str) -> Result<bool, InvalidLengthError>;
}

/// Decodes the demographic fields embedded in a national identification number.
pub trait CitizenInformationExtractor: Send + Sync {
    fn extract(&self, id: &str) -> Result<CitizenRecord, ExtractError>;
}

/// Supported countries, identified by their ISO 3166-1 alpha-2 code.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Country {
    #[serde(rename = "BA")]
    #[strum(serialize = "BA")]
    BosniaAndHerzegovina,
    #[serde(rename = "ME")]
    #[strum(serialize = "ME")]
    Montenegro,
    #[serde(rename = "MK")]
    #[strum(serialize = "MK")]
    NorthMacedonia,
    #[serde(rename = "MX")]
    #[strum(serialize = "MX")]
    Mexico,
    #[serde(rename = "RS")]
    #[strum(serialize = "RS")]
    Serbia,
    #[serde(rename = "SI")]
    #[strum(serialize = "SI")]
    Slovenia,
}

impl Country {
    pub fn code(&self) -> &'static str {
        (*self).into()
    }
}

impl IdValidator for Country {
    fn validate(&self, id: &str) -> Result<bool, InvalidLengthError> {
        match self {
            Country::BosniaAndHerzegovina => BosniaIdValidator.validate(id),
            Country::Montenegro => MontenegroIdValidator.validate(id),
            Country::NorthMacedonia => NorthMacedoniaIdValidator.validate(id),
            Country::Mexico => MexicoIdValidator.validate(id),
            Country::Serbia => SerbiaIdValidator.validate(id),
            Country::Slovenia => SloveniaIdValidator.validate(id),
        }
    }
}

impl CitizenInformationExtractor for Country {
    fn extract(&self, id: &str) -> Result<CitizenRecord, ExtractError> {
        match self {
            Country::BosniaAndHerzegovina => BosniaCitizenInformationExtractor.extract(id),
            Country::Montenegro => MontenegroCitizenInformationExtractor.extract(id),
            Country::NorthMacedonia => NorthMacedoniaCitizenInformationExtractor.extract(id),
            Country::Mexico => MexicoCitizenInformationExtractor.extract(id),
            Country::Serbia => SerbiaCitizenInformationExtractor.extract(id),
            Country::Slovenia => SloveniaCitizenInformationExtractor.extract(id),
        }
    }
}
