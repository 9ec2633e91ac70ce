//! mozContact record as read from JSON.
//!
//! Every field is optional. `null`, a missing key and an empty list all
//! mean "not present"; string lists also accept a bare string. A field of
//! the wrong JSON type is dropped with a warning instead of failing the
//! record.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::lenient;
use crate::error::{RfcError, RfcResult};

/// A contact record shaped like the mozContact interface.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MozContact {
    #[serde(deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::date")]
    pub published: Option<DateLike>,
    #[serde(deserialize_with = "lenient::date")]
    pub updated: Option<DateLike>,
    #[serde(deserialize_with = "lenient::date")]
    pub bday: Option<DateLike>,
    #[serde(deserialize_with = "lenient::date")]
    pub anniversary: Option<DateLike>,
    #[serde(deserialize_with = "lenient::text")]
    pub sex: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub gender_identity: Option<String>,

    #[serde(deserialize_with = "lenient::text_list")]
    pub name: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub honorific_prefix: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub given_name: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub additional_name: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub family_name: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub honorific_suffix: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub nickname: Vec<String>,

    /// Photo URIs, usually `data:` URIs carrying base64 payloads.
    #[serde(deserialize_with = "lenient::text_list")]
    pub photo: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub category: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub org: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub job_title: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub note: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub key: Vec<String>,

    #[serde(deserialize_with = "lenient::records")]
    pub email: Vec<ContactField>,
    #[serde(deserialize_with = "lenient::records")]
    pub url: Vec<ContactField>,
    #[serde(deserialize_with = "lenient::records")]
    pub impp: Vec<ContactField>,
    #[serde(deserialize_with = "lenient::records")]
    pub tel: Vec<ContactTelField>,
    #[serde(deserialize_with = "lenient::records")]
    pub adr: Vec<ContactAddress>,
}

impl MozContact {
    /// Parses a single contact from JSON.
    ///
    /// ## Errors
    /// Returns `RfcError::InvalidInput` if the JSON is malformed or not an object.
    pub fn from_json(input: &str) -> RfcResult<Self> {
        serde_json::from_str(input).map_err(|e| RfcError::InvalidInput(e.to_string()))
    }
}

/// Parses either one contact object or an array of them.
///
/// Array elements that are not contact objects are skipped with a warning.
///
/// ## Errors
/// Returns `RfcError::InvalidInput` if the JSON is malformed or is neither
/// an object nor an array.
pub fn parse_contacts(input: &str) -> RfcResult<Vec<MozContact>> {
    match serde_json::from_str(input).map_err(|e| RfcError::InvalidInput(e.to_string()))? {
        Value::Array(items) => Ok(items.into_iter().filter_map(lenient::record_from).collect()),
        single => serde_json::from_value(single)
            .map(|contact| vec![contact])
            .map_err(|e| RfcError::InvalidInput(e.to_string())),
    }
}

/// Typed entry of `email`, `url` and `impp`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactField {
    #[serde(rename = "type", deserialize_with = "lenient::text_list")]
    pub types: Vec<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub pref: bool,
    #[serde(deserialize_with = "lenient::text_or_empty")]
    pub value: String,
}

/// Entry of `tel`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactTelField {
    #[serde(rename = "type", deserialize_with = "lenient::text_list")]
    pub types: Vec<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub pref: bool,
    #[serde(deserialize_with = "lenient::text_or_empty")]
    pub value: String,
    #[serde(deserialize_with = "lenient::text")]
    pub carrier: Option<String>,
}

/// Entry of `adr`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactAddress {
    #[serde(rename = "type", deserialize_with = "lenient::text_list")]
    pub types: Vec<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub pref: bool,
    #[serde(deserialize_with = "lenient::text")]
    pub street_address: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub locality: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub region: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub postal_code: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub country_name: Option<String>,
}

/// Date-valued field: an ISO-8601 string or epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateLike {
    Millis(i64),
    Text(String),
}

impl DateLike {
    /// Resolves to a UTC instant.
    ///
    /// Text accepts RFC 3339 date-times and plain `YYYY-MM-DD` dates
    /// (taken as midnight UTC).
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Millis(ms) => DateTime::from_timestamp_millis(*ms),
            Self::Text(text) => DateTime::parse_from_rfc3339(text)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
                .or_else(|| {
                    NaiveDate::parse_from_str(text, "%Y-%m-%d")
                        .ok()
                        .and_then(|date| date.and_hms_opt(0, 0, 0))
                        .map(|naive| naive.and_utc())
                }),
        }
    }

    /// Formats as `YYYY-MM-DDTHH:MM:SS.sssZ`.
    #[must_use]
    pub fn to_iso_string(&self) -> Option<String> {
        self.to_datetime()
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl From<DateTime<Utc>> for DateLike {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Millis(value.timestamp_millis())
    }
}
