use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SortError;

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// The fields a sort key can select on.
pub trait Record {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn birth_date(&self) -> NaiveDate;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub birth_date: NaiveDate,
}

impl Student {
    /// Builds a student from raw strings. The birth date must be a `YYYY-MM-DD` calendar date.
    pub fn parse(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        birth_date: &str,
    ) -> Result<Self, SortError> {
        let birth_date = NaiveDate::parse_from_str(birth_date.trim(), BIRTH_DATE_FORMAT)
            .map_err(|_| SortError::MalformedField {
                field: "birth_date",
                value: birth_date.to_owned(),
            })?;

        Ok(Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            birth_date,
        })
    }
}

impl Record for Student {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }
}
