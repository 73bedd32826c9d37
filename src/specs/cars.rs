// src/specs/cars.rs
//! Record extraction for one `div.car_block`.
//!
//! Strict fields (name, cylinders, weight, acceleration, origin, displacement)
//! fail the record. Lenient fields (mpg, horse power) fall back to `None`.
//! A missing span is always a failure, lenient field or not.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::consts::NULL_CELL;
use crate::core::html::{CarBlock, Field};
use crate::csv::null_if_none;

/// One parsed car. Field order is the CSV column order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Record {
    pub name: String,
    #[serde(serialize_with = "null_if_none")]
    pub mpg: Option<f64>,
    pub cylinders: i64,
    #[serde(serialize_with = "null_if_none")]
    pub horse_power: Option<i64>,
    pub weight: i64,
    pub acceleration: f64,
    pub year: String,
    pub country: String,
    pub displacement: f64,
}

impl Record {
    pub const FIELD_NAMES: [&'static str; 9] = [
        "name",
        "mpg",
        "cylinders",
        "horse_power",
        "weight",
        "acceleration",
        "year",
        "country",
        "displacement",
    ];
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn opt<T: fmt::Debug>(v: &Option<T>) -> String {
            v.as_ref().map_or_else(|| s!(NULL_CELL), |v| format!("{v:?}"))
        }
        write!(
            f,
            "{} ({}, {}): mpg={} cylinders={} horse_power={} weight={} acceleration={:?} displacement={:?}",
            self.name,
            self.year,
            self.country,
            opt(&self.mpg),
            self.cylinders,
            opt(&self.horse_power),
            self.weight,
            self.acceleration,
            self.displacement,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("missing <span class=\"{0}\">")]
    Missing(Field),

    #[error("{field}: cannot read {value:?} as {expected}")]
    Invalid {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("displacement: no \"<number> cubic inches\" in record text")]
    PatternNotFound,
}

fn invalid(field: &'static str, value: &str, expected: &'static str) -> FieldError {
    FieldError::Invalid { field, value: s!(value), expected }
}

fn required(text: Option<String>, field: Field) -> Result<String, FieldError> {
    text.ok_or(FieldError::Missing(field))
}

/// Build one record from one car block, or report the first broken field.
pub fn extract_record(block: &CarBlock<'_>) -> Result<Record, FieldError> {
    let name = required(block.name(), Field::Name)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid("car_name", name, "non-empty text"));
    }

    let mpg = parse_mpg(&required(block.mpg(), Field::Mpg)?);
    let cylinders = parse_int("cylinders", &required(block.cylinders(), Field::Cylinders)?)?;
    let horse_power = parse_horsepower(&required(block.horsepower(), Field::HorsePower)?);
    let weight = parse_weight(&required(block.weight(), Field::Weight)?)?;
    let acceleration = parse_real("acceleration", &required(block.acceleration(), Field::Acceleration)?)?;
    let (country, year) = parse_origin(&required(block.origin(), Field::Origin)?)?;
    let displacement = parse_displacement(&block.full_text())?;

    Ok(Record {
        name: s!(name),
        mpg,
        cylinders,
        horse_power,
        weight,
        acceleration,
        year,
        country,
        displacement,
    })
}

/* ---------- strict parsers ---------- */

pub fn parse_int(field: &'static str, text: &str) -> Result<i64, FieldError> {
    text.trim().parse().map_err(|_| invalid(field, text, "an integer"))
}

pub fn parse_real(field: &'static str, text: &str) -> Result<f64, FieldError> {
    text.trim().parse().map_err(|_| invalid(field, text, "a number"))
}

/// `"(1974, USA)"` → `("USA", "1974")`. The country is trimmed, the year is
/// returned exactly as it sits before the comma.
pub fn parse_origin(text: &str) -> Result<(String, String), FieldError> {
    let inner = text.trim().trim_matches(&['(', ')'][..]);
    let parts: Vec<&str> = inner.split(',').collect();
    let [year, country] = parts.as_slice() else {
        return Err(invalid("from", text, "\"(year, country)\""));
    };
    let country = country.trim();
    if country.is_empty() {
        return Err(invalid("from", text, "a non-empty country"));
    }
    Ok((s!(country), s!(*year)))
}

/// `"3,504"` → `3504`.
pub fn parse_weight(text: &str) -> Result<i64, FieldError> {
    let digits = text.replace(',', "");
    digits.trim().parse().map_err(|_| invalid("weight", text, "an integer"))
}

static DISPLACEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s+cubic inches").expect("displacement pattern compiles")
});

/// First `<number> cubic inches` anywhere in the block text.
pub fn parse_displacement(full_text: &str) -> Result<f64, FieldError> {
    let caps = DISPLACEMENT_RE
        .captures(full_text)
        .ok_or(FieldError::PatternNotFound)?;
    let num = &caps[1];
    num.parse().map_err(|_| invalid("displacement", num, "a number"))
}

/* ---------- lenient parsers ---------- */

/// `"130"` → `Some(130)`, anything non-numeric → `None`.
pub fn parse_horsepower(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// `"18.0 mpg"` → `Some(18.0)`; the unit and anything after it are ignored.
pub fn parse_mpg(text: &str) -> Option<f64> {
    text.split_whitespace().next()?.parse().ok()
}
