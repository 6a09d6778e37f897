use chrono::NaiveDate;
use crate::core::library::LibraryResult;

pub const DATE_FMT: &str = "%Y-%m-%d";

// format_date renders a calendar date as ISO-8601, e.g. 2024-03-15
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

pub fn parse_date(str_date: &str) -> LibraryResult<NaiveDate> {
    Ok(NaiveDate::parse_from_str(str_date, DATE_FMT)?)
}

pub mod optional_serializer {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::{format_date, DATE_FMT};

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        date.as_ref().map(format_date).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let str_date: Option<String> = Deserialize::deserialize(deserializer)?;
        str_date
            .map(|s| NaiveDate::parse_from_str(&s, DATE_FMT).map_err(D::Error::custom))
            .transpose()
    }
}
