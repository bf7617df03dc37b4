use crate::checksum::{
    is_alphabetic, is_consonant, is_digit, is_vowel, mod10_check_digit, parse_digits,
    weighted_checksum,
};
use crate::country::{CitizenInformationExtractor, IdValidator};
use crate::{CitizenRecord, ExtractError, Gender, InvalidLengthError};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use std::collections::HashMap;

pub struct MexicoIdValidator;
pub struct MexicoCitizenInformationExtractor;

const CURP_NAME: &str = "Mexico CURP";
const CURP_LENGTH: usize = 18;
// `&` stands where the national alphabet has `Ñ`, between N and O.
const CURP_ALPHABET: &str = "0123456789ABCDEFGHIJKLMN&OPQRSTUVWXYZ";
const CURP_FIRST_WEIGHT: u32 = 18;

lazy_static! {
    static ref STATES: HashMap<&'static str, &'static str> = HashMap::from([
        ("AS", "Aguascalientes"),
        ("BC", "Baja California"),
        ("BS", "Baja California Sur"),
        ("CC", "Campeche"),
        ("CL", "Coahuila"),
        ("CM", "Colima"),
        ("CS", "Chiapas"),
        ("CH", "Chihuahua"),
        ("DF", "Mexico City"),
        ("DG", "Durango"),
        ("GT", "Guanajuato"),
        ("GR", "Guerrero"),
        ("HG", "Hidalgo"),
        ("JC", "Jalisco"),
        ("MC", "State of Mexico"),
        ("MN", "Michoacán"),
        ("MS", "Morelos"),
        ("NT", "Nayarit"),
        ("NL", "Nuevo León"),
        ("OC", "Oaxaca"),
        ("PL", "Puebla"),
        ("QT", "Querétaro"),
        ("QR", "Quintana Roo"),
        ("SP", "San Luis Potosí"),
        ("SL", "Sinaloa"),
        ("SR", "Sonora"),
        ("TC", "Tabasco"),
        ("TS", "Tamaulipas"),
        ("TL", "Tlaxcala"),
        ("VZ", "Veracruz"),
        ("YN", "Yucatán"),
        ("ZS", "Zacatecas"),
        ("NE", "Born abroad"),
    ]);
}

/// Checks the length and returns the uppercased CURP, or `None` if it holds non ASCII
/// characters (which no CURP position accepts).
fn sanitize(id: &str) -> Result<Option<String>, InvalidLengthError> {
    let length = id.chars().count();
    if length != CURP_LENGTH {
        return Err(InvalidLengthError::new(CURP_NAME, CURP_LENGTH, length));
    }
    if !id.is_ascii() {
        return Ok(None);
    }
    Ok(Some(id.to_ascii_uppercase()))
}

#[inline]
fn char_at(id: &str, idx: usize) -> char {
    id.as_bytes()[idx] as char
}

fn is_valid_names(names: &str) -> bool {
    // Only the second letter has to be a vowel.
    names.chars().all(is_alphabetic) && names.chars().nth(1).is_some_and(is_vowel)
}

fn is_valid_birthdate(birthdate: &str) -> bool {
    birthdate.chars().all(is_digit)
}

fn decode_gender(gender: char) -> Option<Gender> {
    match gender {
        'H' => Some(Gender::Male),
        'M' => Some(Gender::Female),
        _ => None,
    }
}

fn is_valid_state(state: &str) -> bool {
    state.chars().all(is_alphabetic) && STATES.contains_key(state)
}

fn is_valid_consonants(consonants: &str) -> bool {
    consonants.chars().all(is_consonant)
}

fn is_valid_checksum(id: &str) -> bool {
    let Some(check_digit) = char_at(id, CURP_LENGTH - 1).to_digit(10) else {
        return false;
    };
    weighted_checksum(&id[..CURP_LENGTH - 1], CURP_ALPHABET, CURP_FIRST_WEIGHT)
        .is_some_and(|sum| mod10_check_digit(sum) == check_digit)
}

/// `YYMMDD` at positions 4 to 9. The homonym differentiator at position 16 is a digit for
/// people born before 2000 and a letter afterwards.
fn decode_date_of_birth(id: &str) -> Option<NaiveDate> {
    let year = parse_digits(&id[4..6])? as i32;
    let month = parse_digits(&id[6..8])?;
    let day = parse_digits(&id[8..10])?;

    let differentiator = char_at(id, 16);
    let century = if is_digit(differentiator) {
        1900
    } else if is_alphabetic(differentiator) {
        2000
    } else {
        return None;
    };

    NaiveDate::from_ymd_opt(century + year, month, day)
}

impl IdValidator for MexicoIdValidator {
    fn validate(&self, id: &str) -> Result<bool, InvalidLengthError> {
        let Some(id) = sanitize(id)? else {
            return Ok(false);
        };

        Ok(is_valid_names(&id[0..3])
            && is_valid_birthdate(&id[4..9])
            && decode_gender(char_at(&id, 10)).is_some()
            && is_valid_state(&id[11..13])
            && is_valid_consonants(&id[13..16])
            && is_valid_checksum(&id))
    }
}

impl CitizenInformationExtractor for MexicoCitizenInformationExtractor {
    fn extract(&self, id: &str) -> Result<CitizenRecord, ExtractError> {
        if !MexicoIdValidator.validate(id)? {
            return Err(ExtractError::InvalidId("Provided CURP is invalid".to_string()));
        }
        let id = id.to_ascii_uppercase();

        let date_of_birth = decode_date_of_birth(&id).ok_or_else(|| {
            ExtractError::InvalidId("Provided CURP has an invalid date of birth".to_string())
        })?;
        let gender = decode_gender(char_at(&id, 10))
            .ok_or_else(|| ExtractError::InvalidId("Provided CURP is invalid".to_string()))?;
        let place_of_birth = STATES.get(&id[11..13]).map(|state| state.to_string());

        Ok(CitizenRecord::new(gender, date_of_birth, place_of_birth))
    }
}
