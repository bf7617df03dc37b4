pub mod config;
pub mod metrics;

use crate::registry::config::RegistryConfig;
use crate::registry::metrics::{ExtractionStatus, RegistryMetrics, ValidationStatus};
use crate::{
    CitizenInformationExtractor, CitizenRecord, Country, ExtractError, IdValidator, RegistryError,
};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Resolves country codes to their validator and extractor.
///
/// The registry holds no mutable state and can be shared between threads behind an `Arc`.
pub struct NationalIdRegistry {
    countries: Vec<Country>,
    metrics: RegistryMetrics,
}

impl NationalIdRegistry {
    pub fn new(config: &RegistryConfig) -> Self {
        let countries = match &config.countries {
            Some(countries) => {
                let mut enabled = Vec::with_capacity(countries.len());
                for country in countries {
                    if !enabled.contains(country) {
                        enabled.push(*country);
                    }
                }
                enabled
            }
            None => Country::iter().collect(),
        };

        NationalIdRegistry {
            countries,
            metrics: RegistryMetrics::new(&config.labels),
        }
    }

    pub fn supported_countries(&self) -> &[Country] {
        &self.countries
    }

    /// Resolve an ISO 3166-1 alpha-2 code, case insensitive, among the enabled countries.
    pub fn resolve(&self, country_code: &str) -> Result<Country, RegistryError> {
        match Country::from_str(country_code.trim()) {
            Ok(country) if self.countries.contains(&country) => Ok(country),
            _ => {
                self.metrics.record_unsupported_country();
                Err(RegistryError::UnsupportedCountry(country_code.to_string()))
            }
        }
    }

    pub fn validate_id(&self, id: &str, country_code: &str) -> Result<bool, RegistryError> {
        let country = self.resolve(country_code)?;

        let result = country.validate(id);
        let status = match &result {
            Ok(true) => ValidationStatus::Valid,
            Ok(false) => ValidationStatus::Invalid,
            Err(_) => ValidationStatus::InvalidLength,
        };
        self.metrics.record_validation(country, status);

        result.map_err(RegistryError::from)
    }

    pub fn get_citizen_data_from_id(
        &self,
        id: &str,
        country_code: &str,
    ) -> Result<CitizenRecord, RegistryError> {
        let country = self.resolve(country_code)?;

        let result = country.extract(id);
        let status = match &result {
            Ok(_) => ExtractionStatus::Success,
            Err(ExtractError::InvalidId(_)) => ExtractionStatus::InvalidId,
            Err(ExtractError::InvalidLength(_)) => ExtractionStatus::InvalidLength,
        };
        self.metrics.record_extraction(country, status);

        result.map_err(RegistryError::from)
    }
}

impl Default for NationalIdRegistry {
    fn default() -> Self {
        NationalIdRegistry::new(&RegistryConfig::default())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Gender, Labels};
    use chrono::NaiveDate;
    use ::metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;

    fn counter_key(name: &'static str, labels: &[(&'static str, &'static str)]) -> CompositeKey {
        CompositeKey::new(
            Counter,
            Key::from_parts(
                name,
                labels
                    .iter()
                    .map(|(key, value)| Label::new(*key, *value))
                    .collect::<Vec<_>>(),
            ),
        )
    }

    #[test]
    fn should_enable_every_country_by_default() {
        let registry = NationalIdRegistry::default();
        assert_eq!(registry.supported_countries().len(), 6);
        for code in ["MX", "RS", "BA", "ME", "MK", "SI", "rs", " mx "] {
            assert!(registry.resolve(code).is_ok(), "{code}");
        }
    }

    #[test]
    fn should_only_resolve_enabled_countries() {
        let registry = RegistryConfig::new()
            .countries(vec![Country::Serbia, Country::Serbia])
            .build();
        assert_eq!(registry.supported_countries(), &[Country::Serbia]);
        assert_eq!(registry.resolve("RS"), Ok(Country::Serbia));
        assert_eq!(
            registry.validate_id("HEGG560427MVZRRL04", "MX"),
            Err(RegistryError::UnsupportedCountry("MX".to_string()))
        );
        assert_eq!(
            registry.validate_id("0101100710006", "HR"),
            Err(RegistryError::UnsupportedCountry("HR".to_string()))
        );
    }

    #[test]
    fn should_validate_by_country_code() {
        let registry = NationalIdRegistry::default();
        assert_eq!(registry.validate_id("0101100710006", "RS"), Ok(true));
        assert_eq!(registry.validate_id("2104108291012", "RS"), Ok(false));
        assert_eq!(registry.validate_id("hegg560427mvzrrl04", "mx"), Ok(true));

        match registry.validate_id("010597850041", "RS") {
            Err(RegistryError::InvalidLength(err)) => {
                assert_eq!(err.expected(), 13);
                assert_eq!(err.actual(), 12);
            }
            other => panic!("expected a length error, got {other:?}"),
        }
    }

    #[test]
    fn should_extract_by_country_code() {
        let registry = NationalIdRegistry::default();
        let citizen = registry
            .get_citizen_data_from_id("0110951074616", "RS")
            .unwrap();
        assert_eq!(citizen.gender(), Gender::Male);
        assert_eq!(
            citizen.date_of_birth(),
            NaiveDate::from_ymd_opt(1951, 10, 1).unwrap()
        );

        assert_eq!(
            registry.get_citizen_data_from_id("2104108291012", "RS"),
            Err(RegistryError::InvalidId(
                "Provided JMBG is invalid".to_string()
            ))
        );
        assert!(matches!(
            registry.get_citizen_data_from_id("010597850041", "RS"),
            Err(RegistryError::InvalidLength(_))
        ));
    }

    #[test]
    fn should_submit_validation_metrics() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        ::metrics::with_local_recorder(&recorder, || {
            let registry = NationalIdRegistry::default();
            let _ = registry.validate_id("0101100710006", "RS");
            let _ = registry.validate_id("1209992745266", "RS");
            let _ = registry.validate_id("2104108291012", "RS");
            let _ = registry.validate_id("010597850041", "RS");
            let _ = registry.validate_id("HEGG560427MVZRRL04", "XX");
        });

        let snapshot = snapshotter.snapshot().into_hashmap();

        let expected = vec![
            (
                counter_key(
                    "national_id.validations",
                    &[("country", "RS"), ("status", "valid")],
                ),
                2,
            ),
            (
                counter_key(
                    "national_id.validations",
                    &[("country", "RS"), ("status", "invalid")],
                ),
                1,
            ),
            (
                counter_key(
                    "national_id.validations",
                    &[("country", "RS"), ("status", "invalid_length")],
                ),
                1,
            ),
            (counter_key("national_id.unsupported_country", &[]), 1),
        ];
        for (key, count) in expected {
            let metric_value = snapshot.get(&key).expect("metric not found");
            assert_eq!(metric_value, &(None, None, DebugValue::Counter(count)));
        }
    }

    #[test]
    fn should_submit_extraction_metrics_with_registry_labels() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        ::metrics::with_local_recorder(&recorder, || {
            let registry = RegistryConfig::new()
                .labels(Labels::new(&[("service", "onboarding")]))
                .build();
            let _ = registry.get_citizen_data_from_id("XEXX010101HNEXXXA4", "MX");
            let _ = registry.get_citizen_data_from_id("XEXX010101HNEXXXA5", "MX");
        });

        let snapshot = snapshotter.snapshot().into_hashmap();

        for status in ["success", "invalid_id"] {
            let key = counter_key(
                "national_id.extractions",
                &[
                    ("service", "onboarding"),
                    ("country", "MX"),
                    ("status", status),
                ],
            );
            let metric_value = snapshot.get(&key).expect("metric not found");
            assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));
        }
    }
}
