//! Draft keys: `"{employee_id}:{year}-{month_index}-{day}"`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DraftError, DraftResult};

/// Key of one draft in the store.
///
/// Only ever built through [`make_draft_key`] / [`DraftKey::new`], so the
/// format lives in one place.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftKey(String);

/// The components of a parsed draft key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftKeyParts<'a> {
    pub employee_id: &'a str,
    pub year: i32,
    pub month_index: u32,
    pub day: u32,
}

impl DraftKey {
    /// No range validation: the caller passes a day that exists in
    /// `month_meta(year, month_index)`.
    pub fn new(employee_id: &str, year: i32, month_index: u32, day: u32) -> Self {
        DraftKey(format!("{employee_id}:{year}-{month_index}-{day}"))
    }

    /// Check an existing string against the key format.
    pub fn parse(s: &str) -> DraftResult<Self> {
        split(s)?;
        Ok(DraftKey(s.to_string()))
    }

    pub fn parts(&self) -> DraftKeyParts<'_> {
        // Unparsable keys (empty employee id, deserialized junk) report as all employee id
        split(&self.0).unwrap_or(DraftKeyParts {
            employee_id: &self.0,
            year: 0,
            month_index: 0,
            day: 0,
        })
    }

    pub fn employee_id(&self) -> &str {
        self.parts().employee_id
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Employee ids may themselves contain ':', so the date part is taken from
/// after the last colon.
fn split(s: &str) -> DraftResult<DraftKeyParts<'_>> {
    let invalid = || DraftError::InvalidKey(s.to_string());

    let (employee_id, date) = s.rsplit_once(':').ok_or_else(invalid)?;
    if employee_id.is_empty() {
        return Err(invalid());
    }

    // A leading '-' belongs to a negative year
    let (negative, unsigned) = match date.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, date),
    };

    let mut fields = unsigned.split('-');
    let (Some(year), Some(month_index), Some(day), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(invalid());
    };

    // Only plain digits: `str::parse` would also take a '+' sign
    if ![year, month_index, day].iter().all(|f| is_digits(f)) {
        return Err(invalid());
    }

    // Parse the sign with the digits so i32::MIN survives
    let year: i32 = if negative {
        format!("-{year}").parse()
    } else {
        year.parse()
    }
    .map_err(|_| invalid())?;

    Ok(DraftKeyParts {
        employee_id,
        year,
        month_index: month_index.parse().map_err(|_| invalid())?,
        day: day.parse().map_err(|_| invalid())?,
    })
}

fn is_digits(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

/// Build the key for one employee on one day.
pub fn make_draft_key(employee_id: &str, year: i32, month_index: u32, day: u32) -> DraftKey {
    DraftKey::new(employee_id, year, month_index, day)
}

impl fmt::Display for DraftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DraftKey> for String {
    fn from(key: DraftKey) -> Self {
        key.0
    }
}
