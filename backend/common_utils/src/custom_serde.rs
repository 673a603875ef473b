//! Serde adapters for the gateway's two date encodings. Both deserialize to
//! a [`PrimitiveDateTime`][time::PrimitiveDateTime] normalized to UTC.

/// Use the gateway's offset-less ISO 8601 format when serializing and
/// deserializing a [`PrimitiveDateTime`][time::PrimitiveDateTime],
/// e.g. `2014-08-09T11:49:42`.
pub mod iso8601_no_tz {
    use serde::{de, ser::Error as _, Deserialize, Deserializer, Serialize, Serializer};
    use time::{macros::format_description, PrimitiveDateTime};

    use crate::date_time;

    pub fn serialize<S>(date_time: &PrimitiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
        date_time
            .format(format)
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }

    pub fn deserialize<'a, D>(deserializer: D) -> Result<PrimitiveDateTime, D::Error>
    where
        D: Deserializer<'a>,
    {
        let value = String::deserialize(deserializer)?;
        date_time::parse_iso8601_no_tz(&value)
            .map_err(|_| de::Error::custom(format!("Failed to parse PrimitiveDateTime from {value}")))
    }

    /// The same format over an `Option`, for fields the gateway may omit or
    /// send as `null`.
    pub mod option {
        use super::*;

        pub fn serialize<S>(
            date_time: &Option<PrimitiveDateTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
            date_time
                .map(|date_time| date_time.format(format))
                .transpose()
                .map_err(S::Error::custom)?
                .serialize(serializer)
        }

        pub fn deserialize<'a, D>(deserializer: D) -> Result<Option<PrimitiveDateTime>, D::Error>
        where
            D: Deserializer<'a>,
        {
            Option::<String>::deserialize(deserializer)?
                .map(|value| {
                    date_time::parse_iso8601_no_tz(&value).map_err(|_| {
                        de::Error::custom(format!(
                            "Failed to parse PrimitiveDateTime from {value}"
                        ))
                    })
                })
                .transpose()
        }
    }
}

/// Use the gateway's legacy wrapped-epoch format when serializing and
/// deserializing a [`PrimitiveDateTime`][time::PrimitiveDateTime],
/// e.g. `/Date(1401718880000)/`.
pub mod wrapped_epoch {
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use time::PrimitiveDateTime;

    use crate::date_time;

    pub fn serialize<S>(date_time: &PrimitiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = date_time.assume_utc().unix_timestamp_nanos() / 1_000_000;
        format!("/Date({millis})/").serialize(serializer)
    }

    pub fn deserialize<'a, D>(deserializer: D) -> Result<PrimitiveDateTime, D::Error>
    where
        D: Deserializer<'a>,
    {
        let value = String::deserialize(deserializer)?;
        date_time::parse_wrapped_epoch(&value)
            .map_err(|_| de::Error::custom(format!("Failed to parse PrimitiveDateTime from {value}")))
    }

    /// The same format over an `Option`, for fields the gateway may omit or
    /// send as `null`.
    pub mod option {
        use super::*;

        pub fn serialize<S>(
            date_time: &Option<PrimitiveDateTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            date_time
                .map(|date_time| {
                    let millis = date_time.assume_utc().unix_timestamp_nanos() / 1_000_000;
                    format!("/Date({millis})/")
                })
                .serialize(serializer)
        }

        pub fn deserialize<'a, D>(deserializer: D) -> Result<Option<PrimitiveDateTime>, D::Error>
        where
            D: Deserializer<'a>,
        {
            Option::<String>::deserialize(deserializer)?
                .map(|value| {
                    date_time::parse_wrapped_epoch(&value).map_err(|_| {
                        de::Error::custom(format!(
                            "Failed to parse PrimitiveDateTime from {value}"
                        ))
                    })
                })
                .transpose()
        }
    }
}
