use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Demographic data decoded from a national identification number.
///
/// Records only come out of an extractor and are never modified afterwards. The age is
/// not stored: it depends on the day it is asked for.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CitizenRecord {
    gender: Gender,
    date_of_birth: NaiveDate,
    place_of_birth: Option<String>,
}

impl CitizenRecord {
    pub(crate) fn new(
        gender: Gender,
        date_of_birth: NaiveDate,
        place_of_birth: Option<String>,
    ) -> Self {
        Self {
            gender,
            date_of_birth,
            place_of_birth,
        }
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn place_of_birth(&self) -> Option<&str> {
        self.place_of_birth.as_deref()
    }

    /// Age in whole years as of today, in the local timezone.
    pub fn age(&self) -> u32 {
        self.age_at(Local::now().date_naive())
    }

    /// Age in whole years as of `reference`.
    ///
    /// A date of birth after `reference` yields the distance in whole years instead.
    pub fn age_at(&self, reference: NaiveDate) -> u32 {
        let (from, to) = if self.date_of_birth <= reference {
            (self.date_of_birth, reference)
        } else {
            (reference, self.date_of_birth)
        };
        let mut years = to.year() - from.year();
        if (to.month(), to.day()) < (from.month(), from.day()) {
            years -= 1;
        }
        years as u32
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_test::{assert_tokens, Token};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record(date_of_birth: NaiveDate) -> CitizenRecord {
        CitizenRecord::new(
            Gender::Female,
            date_of_birth,
            Some("Slovenia".to_string()),
        )
    }

    #[test]
    fn should_count_whole_years() {
        let citizen = record(date(1992, 9, 12));
        assert_eq!(citizen.age_at(date(1992, 9, 12)), 0);
        assert_eq!(citizen.age_at(date(2024, 9, 11)), 31);
        assert_eq!(citizen.age_at(date(2024, 9, 12)), 32);
        assert_eq!(citizen.age_at(date(2024, 12, 1)), 32);
    }

    #[test]
    fn should_handle_leap_day_births() {
        let citizen = record(date(2000, 2, 29));
        assert_eq!(citizen.age_at(date(2023, 2, 28)), 22);
        assert_eq!(citizen.age_at(date(2023, 3, 1)), 23);
        assert_eq!(citizen.age_at(date(2024, 2, 29)), 24);
    }

    #[test]
    fn should_report_distance_for_future_birth_dates() {
        let citizen = record(date(2100, 1, 1));
        assert_eq!(citizen.age_at(date(2026, 10, 19)), 73);
        assert_eq!(citizen.age_at(date(2099, 12, 31)), 0);
    }

    #[test]
    fn should_compute_age_against_today() {
        let today = Local::now().date_naive();
        let citizen = record(date(1951, 10, 1));
        assert_eq!(citizen.age(), citizen.age_at(today));
    }

    #[test]
    fn should_expose_fields() {
        let citizen = record(date(1939, 1, 20));
        assert_eq!(citizen.gender(), Gender::Female);
        assert_eq!(citizen.date_of_birth(), date(1939, 1, 20));
        assert_eq!(citizen.place_of_birth(), Some("Slovenia"));
    }

    #[test]
    fn should_serialize_gender_in_lowercase() {
        assert_tokens(
            &Gender::Male,
            &[Token::UnitVariant {
                name: "Gender",
                variant: "male",
            }],
        );
        assert_eq!(Gender::Female.to_string(), "female");
    }

    #[test]
    fn should_serialize_record() {
        let json = serde_json::to_value(record(date(1939, 1, 20))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "gender": "female",
                "date_of_birth": "1939-01-20",
                "place_of_birth": "Slovenia",
            })
        );
    }
}
