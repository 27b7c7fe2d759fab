//! Encoding tables mapping survey answer text to numeric codes
//!
//! Each question family has one table. A table is a total function over its
//! closed label set: any other text (including a blank answer) is *unmapped*
//! and [`EncodingTable::encode`] returns `None`. Callers exclude unmapped
//! answers from the series they are building; an unmapped answer is never an
//! error.
//!
//! # Ordinal tables
//!
//! Codes follow the natural order of the answer scale, so a larger code always
//! means "more" of the underlying quantity. The outcome table [`IMPACT`] is
//! centered on "No change" (`-2..=2`) so that the sign of a correlation with it
//! reads directly as a direction.
//!
//! # Nominal tables
//!
//! [`UNDERGRADUATE_MAJOR`] and [`SCHOOL_STATE`] carry arbitrary identifiers.
//! Their codes have no order; they only decide which answers count as a
//! category. [`PROGRAM_TYPE`] codes follow the answer order on the form and are
//! correlated as given, so results for it are exploratory.

/// Immutable label-to-code mapping for one question family.
#[derive(Debug, Clone, Copy)]
pub struct EncodingTable {
    id: &'static str,
    codes: Codes,
}

#[derive(Debug, Clone, Copy)]
enum Codes {
    /// Fixed labels in canonical scale order.
    Labels(&'static [(&'static str, i32)]),
    /// Decimal integers in `start..=end`, spelled canonically.
    IntegerRange { start: i32, end: i32 },
}

impl EncodingTable {
    const fn labeled(id: &'static str, entries: &'static [(&'static str, i32)]) -> Self {
        Self {
            id,
            codes: Codes::Labels(entries),
        }
    }

    const fn integer_range(id: &'static str, start: i32, end: i32) -> Self {
        Self {
            id,
            codes: Codes::IntegerRange { start, end },
        }
    }

    #[must_use]
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Looks up the code for `label`, or `None` if the label is unmapped.
    #[must_use]
    pub fn encode(&self, label: &str) -> Option<i32> {
        match self.codes {
            Codes::Labels(entries) => entries
                .iter()
                .find_map(|(known, code)| (*known == label).then_some(*code)),
            Codes::IntegerRange { start, end } => {
                // "015" or "+15" are not answers the survey produces
                if !label.bytes().all(|b| b.is_ascii_digit()) || label.starts_with('0') {
                    return None;
                }
                let value = label.parse::<i32>().ok()?;
                (start..=end).contains(&value).then_some(value)
            }
        }
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.encode(label).is_some()
    }

    /// Labels in canonical scale order.
    ///
    /// Integer-range tables yield no labels.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        let entries: &'static [(&'static str, i32)] = match self.codes {
            Codes::Labels(entries) => entries,
            Codes::IntegerRange { .. } => &[],
        };
        entries.iter().map(|(label, _)| *label)
    }
}

/// Perceived impact on desire to pursue a graduate degree (primary outcome).
pub static IMPACT: EncodingTable = EncodingTable::labeled(
    "impact",
    &[
        ("Significantly decreased desire", -2),
        ("Decreased desire", -1),
        ("No change in desire", 0),
        ("Increased desire", 1),
        ("Significantly increased desire", 2),
    ],
);

pub static CPA_LIKELIHOOD: EncodingTable = EncodingTable::labeled(
    "cpa_likelihood",
    &[
        ("Very unlikely", 1),
        ("Somewhat unlikely", 2),
        ("Neither likely nor unlikely", 3),
        ("Somewhat likely", 4),
        ("Very likely", 5),
    ],
);

pub static AGREEMENT: EncodingTable = EncodingTable::labeled(
    "agreement",
    &[
        ("Strongly disagree", 1),
        ("Somewhat disagree", 2),
        ("Neither agree nor disagree", 3),
        ("Somewhat agree", 4),
        ("Strongly agree", 5),
    ],
);

pub static IMPORTANCE: EncodingTable = EncodingTable::labeled(
    "importance",
    &[
        ("Not at all important", 1),
        ("Slightly important", 2),
        ("Moderately important", 3),
        ("Very important", 4),
        ("Extremely important", 5),
    ],
);

pub static YES_NO: EncodingTable = EncodingTable::labeled("yes_no", &[("No", 0), ("Yes", 1)]);

/// Belief that a graduate degree increases lifetime earnings.
pub static EARNINGS_BELIEF: EncodingTable = EncodingTable::labeled(
    "earnings_belief",
    &[
        ("Definitely not", 1),
        ("Probably not", 2),
        ("Might or might not", 3),
        ("Probably yes", 4),
        ("Definitely yes", 5),
    ],
);

/// Influence of the 150-credit requirement on enrolling in a graduate program.
pub static CREDIT_INFLUENCE: EncodingTable = EncodingTable::labeled(
    "credit_influence",
    &[
        (
            "It had no influence on my decision to pursue a graduate program.",
            1,
        ),
        (
            "It was a minor factor in my decision to pursue a graduate program.",
            2,
        ),
        (
            "It was a significant factor among others in my decision to pursue a graduate program.",
            3,
        ),
        (
            "It was the primary factor in my decision to pursue a graduate program.",
            4,
        ),
        (
            "It was the only reason I chose to pursue a graduate program.",
            5,
        ),
    ],
);

pub static SATISFACTION: EncodingTable = EncodingTable::labeled(
    "satisfaction",
    &[
        ("Extremely dissatisfied", 1),
        ("Somewhat dissatisfied", 2),
        ("Neither satisfied nor dissatisfied", 3),
        ("Somewhat satisfied", 4),
        ("Extremely satisfied", 5),
    ],
);

/// Likelihood of pursuing a graduate degree had the respondent known about the
/// alternative pathway beforehand (graduate fallback outcome).
pub static LIKELIHOOD_IF_KNOWN: EncodingTable = EncodingTable::labeled(
    "likelihood_if_known",
    &[
        ("Extremely unlikely", 1),
        ("Somewhat unlikely", 2),
        ("Neither likely nor unlikely", 3),
        ("Somewhat likely", 4),
        ("Extremely likely", 5),
    ],
);

pub static PROGRAM_MODALITY: EncodingTable = EncodingTable::labeled(
    "program_modality",
    &[
        ("Fully or mostly in person", 0),
        ("Fully or mostly online", 1),
    ],
);

/// Graduate program type. Codes follow the answer order on the form.
pub static PROGRAM_TYPE: EncodingTable =
    EncodingTable::labeled("program_type", &[("MAcc", 1), ("MBA", 2), ("Other", 3)]);

pub static WORKING_STATUS: EncodingTable = EncodingTable::labeled(
    "working_status",
    &[("Part-time", 0), ("Full-time", 1)],
);

pub static UNDERGRADUATE_MAJOR: EncodingTable = EncodingTable::labeled(
    "undergraduate_major",
    &[
        ("Accounting", 1),
        ("Other Business / Non-accounting", 2),
        ("Other Non-business", 3),
    ],
);

pub static SCHOOL_STATE: EncodingTable =
    EncodingTable::labeled("school_state", &[("Utah", 0), ("Texas", 1)]);

/// Respondent age in whole years.
pub static AGE: EncodingTable = EncodingTable::integer_range("age", 15, 89);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_is_centered_and_symmetric() {
        let codes = IMPACT
            .labels()
            .map(|label| IMPACT.encode(label).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(codes, [-2, -1, 0, 1, 2]);
        assert_eq!(IMPACT.encode("No change in desire"), Some(0));
    }

    #[test]
    fn test_five_point_scales_are_monotonic() {
        let tables = [
            &CPA_LIKELIHOOD,
            &AGREEMENT,
            &IMPORTANCE,
            &EARNINGS_BELIEF,
            &CREDIT_INFLUENCE,
            &SATISFACTION,
            &LIKELIHOOD_IF_KNOWN,
        ];
        for table in tables {
            let codes = table
                .labels()
                .map(|label| table.encode(label).unwrap())
                .collect::<Vec<_>>();
            assert_eq!(codes, [1, 2, 3, 4, 5], "table {}", table.id());
        }
    }

    #[test]
    fn test_unmapped_labels() {
        assert_eq!(AGREEMENT.encode(""), None);
        assert_eq!(AGREEMENT.encode("strongly agree"), None);
        assert_eq!(YES_NO.encode("Maybe"), None);
        assert!(!IMPACT.contains("Increased"));
    }

    #[test]
    fn test_age_range() {
        assert_eq!(AGE.encode("15"), Some(15));
        assert_eq!(AGE.encode("89"), Some(89));
        assert_eq!(AGE.encode("14"), None);
        assert_eq!(AGE.encode("90"), None);
        assert_eq!(AGE.encode("015"), None);
        assert_eq!(AGE.encode("twenty"), None);
        assert_eq!(AGE.labels().count(), 0);
    }

    #[test]
    fn test_binary_tables() {
        assert_eq!(YES_NO.encode("Yes"), Some(1));
        assert_eq!(YES_NO.encode("No"), Some(0));
        assert_eq!(WORKING_STATUS.encode("Full-time"), Some(1));
        assert_eq!(PROGRAM_MODALITY.encode("Fully or mostly online"), Some(1));
    }
}
