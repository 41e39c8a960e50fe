//! Plausible values for the generators of the `@fake` directive.

mod words;

use async_graphql::{Number, Value};
use chrono::{Duration, SecondsFormat, Utc};
use rand::{distributions::Alphanumeric, Rng};
use serde::Deserialize;

use self::words::*;

/// The generators that can be named in `@fake(type: ...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FakeType {
    ZipCode,
    City,
    StreetName,
    StreetAddress,
    Country,
    CountryCode,
    Latitude,
    Longitude,
    ColorName,
    ProductCategory,
    ProductName,
    Money,
    CompanyName,
    CompanyCatchPhrase,
    PastDate,
    FutureDate,
    RecentDate,
    CurrencyCode,
    ImageUrl,
    AvatarUrl,
    Email,
    Url,
    DomainName,
    Ipv4Address,
    Ipv6Address,
    ColorHex,
    Password,
    Lorem,
    FirstName,
    LastName,
    FullName,
    JobTitle,
    PhoneNumber,
    Number,
    Uuid,
    Word,
    Words,
    Filename,
    MimeType,
    Semver,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoremSize {
    Word,
    #[default]
    Words,
    Sentence,
    Sentences,
    Paragraph,
    Paragraphs,
}

/// The `options` argument of `@fake`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FakeOptions {
    pub min_money: Option<f64>,
    pub max_money: Option<f64>,
    pub decimal_places: Option<u32>,
    pub email_provider: Option<String>,
    pub password_length: Option<usize>,
    pub lorem_size: Option<LoremSize>,
    pub min_number: Option<f64>,
    pub max_number: Option<f64>,
}

/// Most digits an `f64` carries after the decimal point.
pub const MAX_DECIMAL_PLACES: u32 = 15;

pub const MAX_PASSWORD_LENGTH: usize = 1024;

const DEFAULT_MAX_MONEY: f64 = 1000.0;
const DEFAULT_MAX_NUMBER: f64 = 1000.0;

impl FakeOptions {
    /// Rejects options no value can be generated from.
    pub fn validate(&self) -> Result<(), String> {
        check_range(("minMoney", self.min_money), ("maxMoney", self.max_money), DEFAULT_MAX_MONEY)?;
        check_range(("minNumber", self.min_number), ("maxNumber", self.max_number), DEFAULT_MAX_NUMBER)?;

        if let Some(places) = self.decimal_places.filter(|places| *places > MAX_DECIMAL_PLACES) {
            return Err(format!("`decimalPlaces` ({places}) is greater than {MAX_DECIMAL_PLACES}"));
        }

        if let Some(length) = self.password_length.filter(|length| *length > MAX_PASSWORD_LENGTH) {
            return Err(format!("`passwordLength` ({length}) is greater than {MAX_PASSWORD_LENGTH}"));
        }

        Ok(())
    }
}

fn check_range(
    (min_name, min): (&str, Option<f64>),
    (max_name, max): (&str, Option<f64>),
    default_max: f64,
) -> Result<(), String> {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(format!("`{min_name}` ({min}) is greater than `{max_name}` ({max})"));
        }
    }

    let (low, high) = bounds(min, max, default_max);

    if !(high - low).is_finite() {
        return Err(format!("the range from `{min_name}` to `{max_name}` is too large"));
    }

    Ok(())
}

/// An absent maximum below the minimum collapses onto it.
fn bounds(min: Option<f64>, max: Option<f64>, default_max: f64) -> (f64, f64) {
    let min = min.unwrap_or(0.0);

    (min, max.unwrap_or(default_max).max(min))
}

impl FakeType {
    pub fn generate(self, options: &FakeOptions, rng: &mut impl Rng) -> Value {
        let text = match self {
            FakeType::ZipCode => format!("{:05}", rng.gen_range(0..100_000)),
            FakeType::City => pick(CITIES, rng).to_owned(),
            FakeType::StreetName => street_name(rng),
            FakeType::StreetAddress => format!("{} {}", rng.gen_range(1..2000), street_name(rng)),
            FakeType::Country => pick(COUNTRIES, rng).0.to_owned(),
            FakeType::CountryCode => pick(COUNTRIES, rng).1.to_owned(),
            FakeType::Latitude => format!("{:.4}", rng.gen_range(-90.0..=90.0)),
            FakeType::Longitude => format!("{:.4}", rng.gen_range(-180.0..=180.0)),
            FakeType::ColorName => pick(COLORS, rng).to_owned(),
            FakeType::ProductCategory => pick(PRODUCT_CATEGORIES, rng).to_owned(),
            FakeType::ProductName => format!(
                "{} {} {}",
                pick(PRODUCT_ADJECTIVES, rng),
                pick(PRODUCT_MATERIALS, rng),
                pick(PRODUCT_NOUNS, rng)
            ),
            FakeType::Money => {
                let (min, max) = bounds(options.min_money, options.max_money, DEFAULT_MAX_MONEY);
                let places = options.decimal_places.unwrap_or(2) as usize;

                format!("{:.places$}", rng.gen_range(min..=max))
            }
            FakeType::CompanyName => format!("{} {}", pick(LAST_NAMES, rng), pick(COMPANY_SUFFIXES, rng)),
            FakeType::CompanyCatchPhrase => format!(
                "{} {} {}",
                pick(CATCH_PHRASE_ADJECTIVES, rng),
                pick(CATCH_PHRASE_DESCRIPTORS, rng),
                pick(CATCH_PHRASE_NOUNS, rng)
            ),
            FakeType::PastDate => date(-rng.gen_range(60..365 * 24 * 60)),
            FakeType::FutureDate => date(rng.gen_range(60..365 * 24 * 60)),
            FakeType::RecentDate => date(-rng.gen_range(1..24 * 60)),
            FakeType::CurrencyCode => pick(CURRENCY_CODES, rng).to_owned(),
            FakeType::ImageUrl => format!("https://picsum.photos/seed/{}/640/480", rng.gen_range(1..10_000)),
            FakeType::AvatarUrl => format!("https://i.pravatar.cc/150?u={}", uuid::Uuid::new_v4()),
            FakeType::Email => {
                let provider = match &options.email_provider {
                    Some(provider) => provider.clone(),
                    None => pick(EMAIL_PROVIDERS, rng).to_string(),
                };

                format!(
                    "{}.{}@{provider}",
                    pick(FIRST_NAMES, rng).to_lowercase(),
                    pick(LAST_NAMES, rng).to_lowercase()
                )
            }
            FakeType::Url => format!("https://{}/{}", domain_name(rng), pick(LOREM, rng)),
            FakeType::DomainName => domain_name(rng),
            FakeType::Ipv4Address => {
                let octets: [u8; 4] = rng.gen();
                std::net::Ipv4Addr::from(octets).to_string()
            }
            FakeType::Ipv6Address => {
                let segments: [u16; 8] = rng.gen();
                std::net::Ipv6Addr::from(segments).to_string()
            }
            FakeType::ColorHex => format!("#{:06x}", rng.gen_range(0..0x0100_0000)),
            FakeType::Password => {
                let length = options.password_length.unwrap_or(12);
                (0..length).map(|_| char::from(rng.sample(Alphanumeric))).collect()
            }
            FakeType::Lorem => lorem(options.lorem_size.unwrap_or_default(), rng),
            FakeType::FirstName => pick(FIRST_NAMES, rng).to_owned(),
            FakeType::LastName => pick(LAST_NAMES, rng).to_owned(),
            FakeType::FullName => format!("{} {}", pick(FIRST_NAMES, rng), pick(LAST_NAMES, rng)),
            FakeType::JobTitle => pick(JOB_TITLES, rng).to_owned(),
            FakeType::PhoneNumber => format!(
                "+1 {:03}-{:03}-{:04}",
                rng.gen_range(200..1000),
                rng.gen_range(0..1000),
                rng.gen_range(0..10_000)
            ),
            FakeType::Number => return number(options, rng),
            FakeType::Uuid => uuid::Uuid::new_v4().to_string(),
            FakeType::Word => lorem(LoremSize::Word, rng),
            FakeType::Words => lorem(LoremSize::Words, rng),
            FakeType::Filename => {
                let (extension, _) = pick(FILE_TYPES, rng);
                format!("{}_{}.{extension}", pick(LOREM, rng), pick(LOREM, rng))
            }
            FakeType::MimeType => pick(FILE_TYPES, rng).1.to_owned(),
            FakeType::Semver => format!(
                "{}.{}.{}",
                rng.gen_range(0..10),
                rng.gen_range(0..20),
                rng.gen_range(0..50)
            ),
        };

        Value::String(text)
    }
}

/// The value of a field typed with a standard scalar and no faker directive.
pub(crate) fn scalar_default(scalar: &str, rng: &mut impl Rng) -> Value {
    match scalar {
        "Int" => Value::from(rng.gen_range(0..1000i32)),
        "Float" => float(rng.gen_range(0.0..1000.0), 2),
        "Boolean" => Value::Boolean(rng.gen()),
        "ID" => Value::String(uuid::Uuid::new_v4().to_string()),
        _ => Value::String(lorem(LoremSize::Words, rng)),
    }
}

fn number(options: &FakeOptions, rng: &mut impl Rng) -> Value {
    let (min, max) = bounds(options.min_number, options.max_number, DEFAULT_MAX_NUMBER);

    match options.decimal_places {
        None | Some(0) => Value::from(rng.gen_range(min..=max).round() as i64),
        Some(places) => float(rng.gen_range(min..=max), places),
    }
}

fn float(value: f64, places: u32) -> Value {
    let factor = 10f64.powi(places as i32);
    let rounded = (value * factor).round() / factor;

    Number::from_f64(rounded).map(Value::Number).unwrap_or(Value::Null)
}

fn pick<T: Copy>(items: &[T], rng: &mut impl Rng) -> T {
    // Word lists are never empty.
    items[rng.gen_range(0..items.len())]
}

fn street_name(rng: &mut impl Rng) -> String {
    format!("{} {}", pick(LAST_NAMES, rng), pick(STREET_SUFFIXES, rng))
}

fn domain_name(rng: &mut impl Rng) -> String {
    format!("{}.{}", pick(LAST_NAMES, rng).to_lowercase(), pick(DOMAIN_SUFFIXES, rng))
}

fn date(offset_minutes: i64) -> String {
    (Utc::now() + Duration::minutes(offset_minutes)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn lorem(size: LoremSize, rng: &mut impl Rng) -> String {
    match size {
        LoremSize::Word => pick(LOREM, rng).to_owned(),
        LoremSize::Words => words(rng.gen_range(2..=4), rng),
        LoremSize::Sentence => sentence(rng),
        LoremSize::Sentences => (0..rng.gen_range(2..=4)).map(|_| sentence(rng)).collect::<Vec<_>>().join(" "),
        LoremSize::Paragraph => paragraph(rng),
        LoremSize::Paragraphs => (0..rng.gen_range(2..=3))
            .map(|_| paragraph(rng))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn words(count: usize, rng: &mut impl Rng) -> String {
    (0..count).map(|_| pick(LOREM, rng)).collect::<Vec<_>>().join(" ")
}

fn sentence(rng: &mut impl Rng) -> String {
    let mut sentence = words(rng.gen_range(4..=10), rng);

    if let Some(first) = sentence.get_mut(0..1) {
        first.make_ascii_uppercase();
    }

    sentence.push('.');
    sentence
}

fn paragraph(rng: &mut impl Rng) -> String {
    (0..rng.gen_range(3..=6)).map(|_| sentence(rng)).collect::<Vec<_>>().join(" ")
}
