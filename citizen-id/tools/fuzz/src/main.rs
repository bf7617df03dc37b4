use afl::fuzz;
use citizen_id::{
    CitizenInformationExtractor, Country, ExtractError, IdValidator, NationalIdRegistry,
};

const COUNTRIES: [Country; 6] = [
    Country::BosniaAndHerzegovina,
    Country::Montenegro,
    Country::NorthMacedonia,
    Country::Mexico,
    Country::Serbia,
    Country::Slovenia,
];

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

/// The first byte selects the country, the rest is the identifier.
fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (selector, id) = bytes.split_first()?;
    let id = std::str::from_utf8(id).ok()?;
    let country = COUNTRIES[*selector as usize % COUNTRIES.len()];

    run_fuzz(&NationalIdRegistry::default(), country, id);
    Some(())
}

fn run_fuzz(registry: &NationalIdRegistry, country: Country, id: &str) {
    #[cfg(feature = "manual_test")]
    {
        println!("Country: {:?}", country);
        println!("Input: {:?}", id);
    }

    let validation = country.validate(id);
    let extraction = country.extract(id);

    #[cfg(feature = "manual_test")]
    {
        println!("Validation: {:?}", validation);
        println!("Extraction: {:?}", extraction);
    }

    // Extraction validates first, so it raises the very same length error.
    if let Err(length_error) = &validation {
        assert_eq!(length_error.actual(), id.chars().count());
        assert!(
            matches!(&extraction, Err(ExtractError::InvalidLength(err)) if err == length_error)
        );
    }
    // A successful extraction implies a valid identifier.
    if extraction.is_ok() {
        assert_eq!(validation, Ok(true));
    }

    assert_eq!(
        registry.validate_id(id, country.code()).ok(),
        validation.ok()
    );
}
