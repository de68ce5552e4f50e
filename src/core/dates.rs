//! Interpretation of `Dtm` date texts by format code.
//!
//! Validation keeps `DateText` as an opaque string; this is a read-only
//! helper for callers that need the calendar value.

use chrono::{NaiveDate, NaiveDateTime};

use super::error::TeifError;
use super::types::Dtm;

/// Calendar value of a [`Dtm`] entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DtmValue {
    /// `DDMMYY`
    Date(NaiveDate),
    /// `DDMMYYHHMM`
    DateTime(NaiveDateTime),
    /// `DDMMYY-DDMMYY`
    Period { start: NaiveDate, end: NaiveDate },
}

impl Dtm {
    /// Parse `date_text` according to `format`. Format codes are
    /// case-insensitive; two-digit years follow chrono's `%y` pivot.
    pub fn parse(&self) -> Result<DtmValue, TeifError> {
        let text = self.date_text.trim();
        match self.format.to_ascii_uppercase().as_str() {
            "DDMMYY" => parse_date(text).map(DtmValue::Date),
            "DDMMYYHHMM" => NaiveDateTime::parse_from_str(text, "%d%m%y%H%M")
                .map(DtmValue::DateTime)
                .map_err(|e| date_error(text, &self.format, e)),
            "DDMMYY-DDMMYY" => {
                let (start, end) = text.split_once('-').ok_or_else(|| {
                    TeifError::Date(format!("'{text}' is not a DDMMYY-DDMMYY period"))
                })?;
                let start = parse_date(start)?;
                let end = parse_date(end)?;
                if end < start {
                    return Err(TeifError::Date(format!(
                        "period '{text}' ends before it starts"
                    )));
                }
                Ok(DtmValue::Period { start, end })
            }
            other => Err(TeifError::Date(format!("unsupported date format '{other}'"))),
        }
    }
}

fn parse_date(text: &str) -> Result<NaiveDate, TeifError> {
    NaiveDate::parse_from_str(text, "%d%m%y").map_err(|e| date_error(text, "DDMMYY", e))
}

fn date_error(text: &str, format: &str, e: chrono::ParseError) -> TeifError {
    TeifError::Date(format!("'{text}' does not match {format}: {e}"))
}
