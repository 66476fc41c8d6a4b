use std::{borrow::Cow, fmt};

use thiserror::Error;
use time::{
    format_description::well_known::Iso8601, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime,
};

pub const DEGREE_SYMBOL: &str = "\u{b0}C";

#[derive(Debug, Error, miette::Diagnostic)]
pub enum DateError {
    #[error("Invalid ISO 8601 date: `{input}`")]
    #[diagnostic(
        code(weather::date::invalid),
        help("expected something like 2021-07-06 or 2021-07-06T07:00:00+00:00")
    )]
    Invalid { input: String },
    #[error("Could not format date: {0}")]
    #[diagnostic(code(weather::date::format))]
    Format(#[from] time::error::Format),
}

/// Fahrenheit to Celsius, rounded to one decimal place (ties go to even).
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    let celsius = (fahrenheit - 32.0) * 5.0 / 9.0;
    (celsius * 10.0).round_ties_even() / 10.0
}

pub fn format_temperature(temp: impl fmt::Display) -> String {
    format!("{temp}{DEGREE_SYMBOL}")
}

/// Parse an ISO 8601 date or date-time and render it like `Tuesday 06 July 2021`.
///
/// The calendar date is taken as written, an offset is never applied.
pub fn format_date(iso: &str) -> Result<String, DateError> {
    let date = parse_iso_date(iso).ok_or_else(|| DateError::Invalid {
        input: iso.to_string(),
    })?;
    let formatted = date.format(format_description!(
        "[weekday repr:long] [day padding:zero] [month repr:long] [year]"
    ))?;
    Ok(formatted)
}

fn parse_iso_date(iso: &str) -> Option<Date> {
    let iso = with_t_separator(iso.trim());
    let iso = iso.as_ref();
    OffsetDateTime::parse(iso, &Iso8601::DEFAULT)
        .map(|datetime| datetime.date())
        .or_else(|_| PrimitiveDateTime::parse(iso, &Iso8601::DEFAULT).map(|datetime| datetime.date()))
        .or_else(|_| Date::parse(iso, &Iso8601::DEFAULT))
        .ok()
}

/// `2021-07-06 07:00:00` is read as `2021-07-06T07:00:00`.
fn with_t_separator(iso: &str) -> Cow<'_, str> {
    match iso.as_bytes().get(10) {
        Some(b' ') => Cow::Owned(format!("{}T{}", &iso[..10], &iso[11..])),
        _ => Cow::Borrowed(iso),
    }
}

/// A temperature as printed in the reports.
///
/// Whole values keep a single decimal (`10.0`), anything else is printed in
/// its shortest form (`37.8`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading(pub f64);

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
