//! Document-store timestamps and their conversion to plain dates.
//!
//! The persistence collaborator stores dates as `{ seconds, nanos }` since the
//! Unix epoch. The engine works on [`NaiveDate`], so conversion happens here,
//! at the edge, and nowhere else.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A UTC instant as stored by the document database.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::Timestamp;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let ts = Timestamp::from(date);
/// assert_eq!(ts.to_date(), Some(date));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    /// Whole seconds since the Unix epoch.
    pub seconds: i64,
    /// Sub-second nanoseconds.
    #[serde(default)]
    pub nanos: i32,
}

impl Timestamp {
    /// Returns the instant as a UTC datetime, or `None` when out of range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let nanos = u32::try_from(self.nanos).ok()?;
        DateTime::from_timestamp(self.seconds, nanos)
    }

    /// Returns the UTC calendar date of the instant.
    pub fn to_date(&self) -> Option<NaiveDate> {
        self.to_datetime().map(|dt| dt.date_naive())
    }
}

impl From<NaiveDate> for Timestamp {
    fn from(date: NaiveDate) -> Self {
        let datetime = date.and_time(NaiveTime::MIN).and_utc();
        Self {
            seconds: datetime.timestamp(),
            nanos: 0,
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self {
            seconds: datetime.timestamp(),
            nanos: datetime.timestamp_subsec_nanos() as i32,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Timestamp(Timestamp),
}

impl RawDate {
    fn into_date(self) -> Option<NaiveDate> {
        match self {
            RawDate::Date(date) => Some(date),
            RawDate::DateTime(datetime) => Some(datetime.date_naive()),
            RawDate::Timestamp(ts) => ts.to_date(),
        }
    }
}

/// Serde adapter for date fields that may arrive as `YYYY-MM-DD`, an RFC 3339
/// datetime, or a store [`Timestamp`]. Always serializes as `YYYY-MM-DD`.
pub mod date_or_timestamp {
    use chrono::NaiveDate;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::RawDate;

    /// Serializes the date as `YYYY-MM-DD`.
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        date.serialize(serializer)
    }

    /// Deserializes any supported date representation.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        RawDate::deserialize(deserializer)?
            .into_date()
            .ok_or_else(|| D::Error::custom("timestamp out of range"))
    }
}

/// Optional variant of [`date_or_timestamp`].
pub mod option_date_or_timestamp {
    use chrono::NaiveDate;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::RawDate;

    /// Serializes the date as `YYYY-MM-DD` or `null`.
    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        date.serialize(serializer)
    }

    /// Deserializes an optional date in any supported representation.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<RawDate>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => raw
                .into_date()
                .map(Some)
                .ok_or_else(|| D::Error::custom("timestamp out of range")),
        }
    }
}
