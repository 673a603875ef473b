//! Shared utilities for the CloudPayments model crates.

pub mod custom_serde;
pub mod errors;
pub mod types;

pub use errors::{CustomResult, ParsingError};
pub use types::{FloatMajorUnit, MinorUnit};

pub mod date_time {
    use error_stack::ResultExt;
    use time::{macros::format_description, OffsetDateTime, PrimitiveDateTime, UtcOffset};

    use crate::errors::{CustomResult, ParsingError};

    /// Convert from [`OffsetDateTime`] to [`PrimitiveDateTime`], normalizing
    /// to UTC first.
    pub fn convert_to_pdt(offset_time: OffsetDateTime) -> PrimitiveDateTime {
        let utc_date_time = offset_time.to_offset(UtcOffset::UTC);
        PrimitiveDateTime::new(utc_date_time.date(), utc_date_time.time())
    }

    /// Parse either of the gateway's two date encodings: the offset-less
    /// ISO 8601 form (`2014-08-09T11:49:42`) or the legacy wrapped-epoch form
    /// (`/Date(1401718880000)/`). Both denote a point in time in UTC.
    pub fn parse_gateway_datetime(value: &str) -> CustomResult<PrimitiveDateTime, ParsingError> {
        if value.starts_with("/Date(") {
            parse_wrapped_epoch(value)
        } else {
            parse_iso8601_no_tz(value)
        }
    }

    /// Parse the gateway's ISO 8601 form. The wire value carries no offset;
    /// its wall-clock fields are taken literally as UTC.
    pub fn parse_iso8601_no_tz(value: &str) -> CustomResult<PrimitiveDateTime, ParsingError> {
        let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
        PrimitiveDateTime::parse(value, format).change_context(ParsingError::DateTimeParsingError)
    }

    /// Parse the gateway's legacy wrapped-epoch form. The embedded integer is
    /// milliseconds since the Unix epoch; an offset suffix inside the
    /// parentheses (`/Date(1401718880000+0400)/`) is stripped, since the
    /// epoch value is already absolute.
    pub fn parse_wrapped_epoch(value: &str) -> CustomResult<PrimitiveDateTime, ParsingError> {
        let inner = value
            .strip_prefix("/Date(")
            .and_then(|rest| rest.strip_suffix(")/"))
            .ok_or(ParsingError::DateTimeParsingError)?;
        let millis_end = inner
            .char_indices()
            .find(|(index, character)| {
                !(character.is_ascii_digit() || (*index == 0 && *character == '-'))
            })
            .map(|(index, _)| index)
            .unwrap_or(inner.len());
        let millis = inner[..millis_end]
            .parse::<i128>()
            .change_context(ParsingError::DateTimeParsingError)?;
        let offset_date_time = OffsetDateTime::from_unix_timestamp_nanos(millis * 1_000_000)
            .change_context(ParsingError::DateTimeParsingError)?;
        Ok(convert_to_pdt(offset_date_time))
    }
}
