use afl::fuzz;
use nordic_nin::{
    DenmarkChecksumPolicy, NationalIdentificationNumber, NinParser, ParserConfig, SwedenNin,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

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

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (country_code, bytes) = split_bytes_once(bytes)?;
    let (input, rand_seed) = split_bytes_once(bytes)?;

    let country_code = std::str::from_utf8(country_code).ok()?;
    let input = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(country_code, input, rng);

    Some(())
}

fn gen_denmark_checksum(rng: &mut StdRng) -> DenmarkChecksumPolicy {
    match rng.gen_range::<u8, _>(0..3) {
        0 => DenmarkChecksumPolicy::Always,
        1 => DenmarkChecksumPolicy::BeforeCutover,
        _ => DenmarkChecksumPolicy::Never,
    }
}

fn gen_config(rng: &mut StdRng) -> ParserConfig {
    let mut config = ParserConfig::new()
        .denmark_checksum(gen_denmark_checksum(rng))
        .finland_additional_century_signs(rng.gen_bool(0.5));
    let forced_date = chrono::NaiveDate::from_ymd_opt(
        rng.gen_range(1900..2200),
        rng.gen_range(1..=12),
        rng.gen_range(1..=28),
    );
    if let Some(date) = forced_date {
        config = config.forced_date(date);
    }
    config
}

fn run_fuzz(country_code: &str, input: &str, mut rng: StdRng) {
    let config = gen_config(&mut rng);
    let parser = NinParser::new(config.clone());

    #[cfg(feature = "manual_test")]
    {
        println!("Country code: {:?}", country_code);
        println!("Input: {:?}", input);
        println!("Config: {:?}", config);
    }

    let result = parser.parse(input, country_code);

    #[cfg(feature = "manual_test")]
    {
        println!("Result: {:?}", result);
    }

    if let Ok(nin) = result {
        assert_eq!(nin.country_code(), country_code);
        match nin {
            // The 10-digit form only covers the last two centuries, the 12-digit one is exact
            NationalIdentificationNumber::Sweden(sweden) => {
                let long_form = sweden.long_form().to_string();
                assert_eq!(
                    SwedenNin::parse_with_config(&long_form, &config),
                    Ok(sweden)
                );
            }
            _ => {
                let formatted = nin.format_with_config(&config);
                assert_eq!(parser.parse(&formatted, country_code), Ok(nin));
            }
        }
    }

    if let Some(country) = parser.detect_country(input) {
        assert!(parser.parse(input, country.code()).is_ok());
    }
}
