//! The Unique Master Citizen Number shared by the former Yugoslav republics.
//!
//! `DDMMYYYRRBBBK` where:
//! - `DDMMYYY` is the date of birth, with the thousands digit of the year dropped
//! - `RR` is the registration region
//! - `BBB` is a sequence number, 000-499 for men and 500-999 for women
//! - `K` is the check digit
//!
//! https://en.wikipedia.org/wiki/Unique_Master_Citizen_Number

use crate::checksum::{digit_weighted_sum, mod11_check_digit, parse_digits};
use crate::country::{CitizenInformationExtractor, IdValidator};
use crate::{CitizenRecord, ExtractError, Gender, InvalidLengthError};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use std::collections::HashMap;

pub struct YugoslaviaIdValidator;
pub struct YugoslaviaCitizenInformationExtractor;

const UMCN_NAME: &str = "UMCN";
const UMCN_LENGTH: usize = 13;
const WEIGHT_FACTORS: [u32; 12] = [7, 6, 5, 4, 3, 2, 7, 6, 5, 4, 3, 2];
const FEMALE_SEQUENCE_START: u32 = 500;
// Three digit years from 800 belong to the previous millennium.
const PREVIOUS_MILLENNIUM_START: u32 = 800;

const BOSNIA: &str = "Bosnia and Herzegovina";
const MONTENEGRO: &str = "Montenegro";
const CROATIA: &str = "Croatia";
const MACEDONIA: &str = "Macedonia";
const SLOVENIA: &str = "Slovenia";
const CENTRAL_SERBIA: &str = "Central Serbia";
const VOJVODINA: &str = "Serbian province of Vojvodina";
const KOSOVO: &str = "Serbian province of Kosovo and Metohija";

const REGIONS: &[(u32, &str, Option<&str>)] = &[
    (1, "foreigners in Bosnia and Herzegovina", None),
    (2, "foreigners in Montenegro", None),
    (3, "foreigners in Croatia", None),
    (4, "foreigners in Macedonia", None),
    (5, "foreigners in Slovenia", None),
    (6, "foreigners in Central Serbia", None),
    (7, "foreigners in Serbian province of Vojvodina", None),
    (8, "foreigners in Serbian province of Kosovo and Metohija", None),
    (9, "naturalized citizens which had no republican citizenship", None),
    (10, "Banja Luka", Some(BOSNIA)),
    (11, "Bihać", Some(BOSNIA)),
    (12, "Doboj", Some(BOSNIA)),
    (13, "Goražde", Some(BOSNIA)),
    (14, "Livno", Some(BOSNIA)),
    (15, "Mostar", Some(BOSNIA)),
    (16, "Prijedor", Some(BOSNIA)),
    (17, "Sarajevo", Some(BOSNIA)),
    (18, "Tuzla", Some(BOSNIA)),
    (19, "Zenica", Some(BOSNIA)),
    (21, "Podgorica, Danilovgrad, Kolašin", Some(MONTENEGRO)),
    (22, "Bar, Ulcinj", Some(MONTENEGRO)),
    (23, "Budva, Kotor, Tivat", Some(MONTENEGRO)),
    (24, "Herceg Novi", Some(MONTENEGRO)),
    (25, "Cetinje", Some(MONTENEGRO)),
    (26, "Nikšić, Plužine, Šavnik", Some(MONTENEGRO)),
    (27, "Berane, Rožaje, Plav, Andrijevica", Some(MONTENEGRO)),
    (28, "Bijelo Polje, Mojkovac", Some(MONTENEGRO)),
    (29, "Pljevlja, Žabljak", Some(MONTENEGRO)),
    (30, "Osijek, Slavonia region", Some(CROATIA)),
    (
        31,
        "Bjelovar, Virovitica, Koprivnica, Pakrac, Podravina region",
        Some(CROATIA),
    ),
    (32, "Varaždin, Međimurje region", Some(CROATIA)),
    (33, "Zagreb", Some(CROATIA)),
    (34, "Karlovac, Kordun region", Some(CROATIA)),
    (35, "Gospić, Lika region", Some(CROATIA)),
    (
        36,
        "Rijeka, Pula, Gorski kotar, Istria and Croatian Littoral regions",
        Some(CROATIA),
    ),
    (37, "Sisak, Banovina region", Some(CROATIA)),
    (
        38,
        "Split, Zadar, Šibenik, Dubrovnik, Dalmatia region",
        Some(CROATIA),
    ),
    (39, "Hrvatsko Zagorje and mixed", Some(CROATIA)),
    (41, "Bitola", Some(MACEDONIA)),
    (42, "Kumanovo", Some(MACEDONIA)),
    (43, "Ohrid", Some(MACEDONIA)),
    (44, "Prilep", Some(MACEDONIA)),
    (45, "Skopje", Some(MACEDONIA)),
    (46, "Strumica", Some(MACEDONIA)),
    (47, "Tetovo", Some(MACEDONIA)),
    (48, "Veles", Some(MACEDONIA)),
    (49, "Štip", Some(MACEDONIA)),
    (50, "Slovenia", None),
    (
        71,
        "Belgrade region (City of Belgrade)",
        Some(CENTRAL_SERBIA),
    ),
    (
        72,
        "Šumadija and Pomoravlje regions (Šumadija District and Pomoravlje District)",
        Some(CENTRAL_SERBIA),
    ),
    (
        73,
        "Niš region (Nišava District, Pirot District and Toplica District)",
        Some(CENTRAL_SERBIA),
    ),
    (
        74,
        "Southern Morava region (Jablanica District and Pčinja District)",
        Some(CENTRAL_SERBIA),
    ),
    (
        75,
        "Zaječar region (Zaječar District and Bor District)",
        Some(CENTRAL_SERBIA),
    ),
    (
        76,
        "Podunavlje region (Podunavlje District and Braničevo District)",
        Some(CENTRAL_SERBIA),
    ),
    (
        77,
        "Podrinje and Kolubara regions (Mačva District and Kolubara District)",
        Some(CENTRAL_SERBIA),
    ),
    (
        78,
        "Kraljevo region (Raška District, Moravica District and Rasina District)",
        Some(CENTRAL_SERBIA),
    ),
    (79, "Užice region (Zlatibor District)", Some(CENTRAL_SERBIA)),
    (80, "Novi Sad region (South Bačka District)", Some(VOJVODINA)),
    (81, "Sombor region (West Bačka District)", Some(VOJVODINA)),
    (82, "Subotica region (North Bačka District)", Some(VOJVODINA)),
    (84, "Kikinda region (North Banat District)", Some(VOJVODINA)),
    (85, "Zrenjanin region (Central Banat District)", Some(VOJVODINA)),
    (86, "Pančevo region (South Banat District)", Some(VOJVODINA)),
    (87, "Vršac region (part of South Banat District)", Some(VOJVODINA)),
    (88, "Ruma region (part of Syrmia District)", Some(VOJVODINA)),
    (
        89,
        "Sremska Mitrovica region (part of Syrmia District)",
        Some(VOJVODINA),
    ),
    (91, "Priština region (Kosovo District)", Some(KOSOVO)),
    (
        92,
        "Kosovska Mitrovica region (Kosovska Mitrovica District)",
        Some(KOSOVO),
    ),
    (93, "Peć region (Peć District)", Some(KOSOVO)),
    (94, "Đakovica region (part of Peć District)", Some(KOSOVO)),
    (95, "Prizren region (Prizren District)", Some(KOSOVO)),
    (96, "Gnjilane region (Kosovo Pomoravlje District)", Some(KOSOVO)),
];

lazy_static! {
    static ref PLACES_OF_BIRTH: HashMap<u32, String> = REGIONS
        .iter()
        .map(|(code, place, republic)| {
            let name = match republic {
                Some(republic) => format!("{place} - {republic}"),
                None => place.to_string(),
            };
            (*code, name)
        })
        .collect();
}

fn check_length(id: &str) -> Result<(), InvalidLengthError> {
    let length = id.chars().count();
    if length != UMCN_LENGTH {
        return Err(InvalidLengthError::new(UMCN_NAME, UMCN_LENGTH, length));
    }
    Ok(())
}

fn decode_year(year: u32) -> i32 {
    if year >= PREVIOUS_MILLENNIUM_START {
        1000 + year as i32
    } else {
        2000 + year as i32
    }
}

fn decode_date_of_birth(id: &str) -> Option<NaiveDate> {
    let day = parse_digits(id.get(0..2)?)?;
    let month = parse_digits(id.get(2..4)?)?;
    let year = parse_digits(id.get(4..7)?)?;
    NaiveDate::from_ymd_opt(decode_year(year), month, day)
}

fn decode_place_of_birth(id: &str) -> Option<String> {
    let region = parse_digits(id.get(7..9)?)?;
    PLACES_OF_BIRTH.get(&region).cloned()
}

fn decode_gender(id: &str) -> Option<Gender> {
    let sequence = parse_digits(id.get(9..12)?)?;
    if sequence < FEMALE_SEQUENCE_START {
        Some(Gender::Male)
    } else {
        Some(Gender::Female)
    }
}

fn is_valid_checksum(id: &str) -> bool {
    let Some(check_digit) = id.get(12..13).and_then(parse_digits) else {
        return false;
    };
    digit_weighted_sum(id, &WEIGHT_FACTORS)
        .is_some_and(|sum| mod11_check_digit(sum) == check_digit)
}

impl IdValidator for YugoslaviaIdValidator {
    fn validate(&self, id: &str) -> Result<bool, InvalidLengthError> {
        check_length(id)?;

        if !id.chars().all(|c| c.is_ascii_digit()) {
            return Ok(false);
        }

        Ok(decode_date_of_birth(id).is_some() && is_valid_checksum(id))
    }
}

impl CitizenInformationExtractor for YugoslaviaCitizenInformationExtractor {
    fn extract(&self, id: &str) -> Result<CitizenRecord, ExtractError> {
        if !YugoslaviaIdValidator.validate(id)? {
            return Err(ExtractError::InvalidId(format!("{UMCN_NAME} is invalid")));
        }

        let date_of_birth = decode_date_of_birth(id).ok_or_else(|| {
            ExtractError::InvalidId(format!("{UMCN_NAME} has an invalid date of birth"))
        })?;
        let place_of_birth = decode_place_of_birth(id).ok_or_else(|| {
            ExtractError::InvalidId(format!("{UMCN_NAME} has an unknown region code"))
        })?;
        let gender = decode_gender(id).ok_or_else(|| {
            ExtractError::InvalidId(format!("{UMCN_NAME} has an invalid sequence number"))
        })?;

        Ok(CitizenRecord::new(gender, date_of_birth, Some(place_of_birth)))
    }
}

/// A successor state issuing UMCNs. It runs the shared rules and reports length errors
/// under its own name.
pub(crate) struct SuccessorState {
    pub id_name: &'static str,
    pub length_context: &'static str,
    pub invalid_id_message: &'static str,
}

impl SuccessorState {
    fn rewrap(&self, err: InvalidLengthError) -> InvalidLengthError {
        err.rewrap(self.id_name, self.length_context)
    }

    pub fn validate(&self, id: &str) -> Result<bool, InvalidLengthError> {
        YugoslaviaIdValidator
            .validate(id)
            .map_err(|err| self.rewrap(err))
    }

    pub fn extract(&self, id: &str) -> Result<CitizenRecord, ExtractError> {
        if !self.validate(id)? {
            return Err(ExtractError::InvalidId(self.invalid_id_message.to_string()));
        }

        YugoslaviaCitizenInformationExtractor
            .extract(id)
            .map_err(|err| match err {
                ExtractError::InvalidLength(err) => ExtractError::InvalidLength(self.rewrap(err)),
                err => err,
            })
    }
}
