//! Response screening and analysis samples
//!
//! A record enters the analysis only if it passes every screening rule, checked
//! in this order:
//!
//! 1. The respondent ID starts with the recognized prefix. Qualtrics exports
//!    carry extra header rows (question text, import ids) that fail here.
//! 2. The survey was finished.
//! 3. Consent was given.
//! 4. The respondent did not flag the response as a duplicate.
//! 5. (main sample only) The outcome question has a recognized answer.
//!
//! Rules 1–4 alone form *loose* validity, used by the graduate fallback sample
//! because graduates skip the primary outcome question through survey
//! branching.
//!
//! # Samples
//!
//! - **main**: valid against the primary outcome
//! - **graduate**: main ∩ student status is "Graduate"
//! - **graduate fallback**: loosely valid ∩ "Graduate" ∩ fallback outcome answered

use std::{collections::BTreeMap, fmt};

use serde::Serialize;

use crate::{predictor::Outcome, record::ResponseRecord};

/// Column names and sentinel values used to screen responses.
#[derive(Debug, Clone)]
pub struct ResponseFilter {
    pub id_column: &'static str,
    pub id_prefix: &'static str,
    pub finished_column: &'static str,
    pub finished_value: &'static str,
    pub consent_column: &'static str,
    pub consent_value: &'static str,
    pub duplicate_column: &'static str,
    pub duplicate_value: &'static str,
    pub status_column: &'static str,
    pub graduate_value: &'static str,
}

impl Default for ResponseFilter {
    fn default() -> Self {
        Self {
            id_column: "ResponseId",
            id_prefix: "R_",
            finished_column: "Finished",
            finished_value: "True",
            consent_column: "Q61",
            consent_value: "Yes",
            duplicate_column: "Q28",
            duplicate_value: "Yes",
            status_column: "Q27",
            graduate_value: "Graduate",
        }
    }
}

/// First screening rule a record fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Exclusion {
    UnrecognizedId,
    Unfinished,
    NoConsent,
    Duplicate,
    MissingOutcome,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.to_str(), f)
    }
}

impl Exclusion {
    pub const ALL: [Exclusion; 5] = [
        Exclusion::UnrecognizedId,
        Exclusion::Unfinished,
        Exclusion::NoConsent,
        Exclusion::Duplicate,
        Exclusion::MissingOutcome,
    ];

    #[must_use]
    pub fn to_str(self) -> &'static str {
        match self {
            Exclusion::UnrecognizedId => "Unrecognized ID",
            Exclusion::Unfinished => "Unfinished",
            Exclusion::NoConsent => "No consent",
            Exclusion::Duplicate => "Self-reported duplicate",
            Exclusion::MissingOutcome => "Missing outcome",
        }
    }
}

impl ResponseFilter {
    /// First loose-validity rule `record` fails, if any.
    #[must_use]
    pub fn loose_exclusion(&self, record: &ResponseRecord) -> Option<Exclusion> {
        let id = record.get(self.id_column).unwrap_or_default();
        if !id.starts_with(self.id_prefix) {
            return Some(Exclusion::UnrecognizedId);
        }
        if !record.is(self.finished_column, self.finished_value) {
            return Some(Exclusion::Unfinished);
        }
        if !record.is(self.consent_column, self.consent_value) {
            return Some(Exclusion::NoConsent);
        }
        if record.is(self.duplicate_column, self.duplicate_value) {
            return Some(Exclusion::Duplicate);
        }
        None
    }

    /// First main-validity rule `record` fails against `outcome`, if any.
    #[must_use]
    pub fn exclusion(&self, record: &ResponseRecord, outcome: &Outcome) -> Option<Exclusion> {
        self.loose_exclusion(record).or_else(|| {
            (!outcome.is_answered(record)).then_some(Exclusion::MissingOutcome)
        })
    }

    #[must_use]
    pub fn is_loosely_valid(&self, record: &ResponseRecord) -> bool {
        self.loose_exclusion(record).is_none()
    }

    #[must_use]
    pub fn is_valid(&self, record: &ResponseRecord, outcome: &Outcome) -> bool {
        self.exclusion(record, outcome).is_none()
    }

    #[must_use]
    pub fn is_graduate(&self, record: &ResponseRecord) -> bool {
        record.is(self.status_column, self.graduate_value)
    }
}

/// The three qualifying samples, borrowing from the loaded records.
#[derive(Debug, Clone)]
pub struct AnalysisSamples<'a> {
    pub main: Vec<&'a ResponseRecord>,
    pub graduate: Vec<&'a ResponseRecord>,
    pub graduate_fallback: Vec<&'a ResponseRecord>,
}

impl<'a> AnalysisSamples<'a> {
    #[must_use]
    pub fn select(
        records: &'a [ResponseRecord],
        filter: &ResponseFilter,
        primary: &Outcome,
        fallback: &Outcome,
    ) -> Self {
        let main = records
            .iter()
            .filter(|record| filter.is_valid(record, primary))
            .collect::<Vec<_>>();
        let graduate = main
            .iter()
            .copied()
            .filter(|record| filter.is_graduate(record))
            .collect();
        let graduate_fallback = records
            .iter()
            .filter(|record| {
                filter.is_loosely_valid(record)
                    && filter.is_graduate(record)
                    && fallback.is_answered(record)
            })
            .collect();

        Self {
            main,
            graduate,
            graduate_fallback,
        }
    }
}

/// How many records each screening rule removed, and the resulting sample sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreeningReport {
    pub total: usize,
    /// Records excluded from the main sample, by first failing rule.
    pub exclusions: BTreeMap<Exclusion, usize>,
    pub main: usize,
    pub graduate: usize,
    pub graduate_fallback: usize,
}

impl ScreeningReport {
    #[must_use]
    pub fn from_records(
        records: &[ResponseRecord],
        filter: &ResponseFilter,
        primary: &Outcome,
        fallback: &Outcome,
    ) -> Self {
        let mut exclusions = BTreeMap::new();
        for record in records {
            if let Some(exclusion) = filter.exclusion(record, primary) {
                *exclusions.entry(exclusion).or_default() += 1;
            }
        }
        let samples = AnalysisSamples::select(records, filter, primary, fallback);

        Self {
            total: records.len(),
            exclusions,
            main: samples.main.len(),
            graduate: samples.graduate.len(),
            graduate_fallback: samples.graduate_fallback.len(),
        }
    }

    #[must_use]
    pub fn excluded(&self, exclusion: Exclusion) -> usize {
        self.exclusions.get(&exclusion).copied().unwrap_or(0)
    }
}
