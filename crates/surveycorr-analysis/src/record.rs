//! Raw survey responses
//!
//! A [`ResponseRecord`] is one respondent's row of the survey export: a mapping
//! from column identifier (e.g. `ResponseId`, `Q52`, `Q39_4`) to the raw answer
//! text. Records are built once by the loader and only read afterwards.
//!
//! A column that is absent and a column holding an empty string both mean
//! "no answer"; [`ResponseRecord::get`] returns `None` for either.

use std::collections::BTreeMap;

/// One respondent's raw answers, keyed by column identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseRecord {
    fields: BTreeMap<String, String>,
}

impl ResponseRecord {
    /// Returns the answer in `column`, or `None` if it is absent or empty.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .get(column)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Returns `true` if `column` holds exactly `expected`.
    #[must_use]
    pub fn is(&self, column: &str, expected: &str) -> bool {
        self.get(column) == Some(expected)
    }

    /// Number of columns stored in this record, including empty ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ResponseRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: iter
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_empty_are_no_answer() {
        let record = ResponseRecord::from_iter([("Q52", ""), ("Q53", "Yes")]);
        assert_eq!(record.get("Q52"), None);
        assert_eq!(record.get("Q99"), None);
        assert_eq!(record.get("Q53"), Some("Yes"));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_is_matches_exactly() {
        let record = ResponseRecord::from_iter([("Finished", "True")]);
        assert!(record.is("Finished", "True"));
        assert!(!record.is("Finished", "true"));
        assert!(!record.is("Q61", "Yes"));
    }
}
