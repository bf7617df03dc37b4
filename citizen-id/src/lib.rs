// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod citizen;
mod country;
mod error;
mod observability;
mod registry;

// This is the public API of the citizen-id core library
pub use citizen::{CitizenRecord, Gender};
pub use country::{
    BosniaCitizenInformationExtractor, BosniaIdValidator, CitizenInformationExtractor, Country,
    IdValidator, MexicoCitizenInformationExtractor, MexicoIdValidator,
    MontenegroCitizenInformationExtractor, MontenegroIdValidator,
    NorthMacedoniaCitizenInformationExtractor, NorthMacedoniaIdValidator,
    SerbiaCitizenInformationExtractor, SerbiaIdValidator, SloveniaCitizenInformationExtractor,
    SloveniaIdValidator, YugoslaviaCitizenInformationExtractor, YugoslaviaIdValidator,
};
pub use error::{ExtractError, InvalidLengthError, RegistryError};
pub use observability::labels::{Labels, NO_LABEL};
pub use registry::config::RegistryConfig;
pub use registry::NationalIdRegistry;

#[cfg(any(feature = "testing", feature = "bench"))]
pub use crate::checksum::{mod10_check_digit, mod11_check_digit, weighted_checksum};
