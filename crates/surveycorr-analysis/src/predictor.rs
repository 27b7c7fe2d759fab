//! Declarative registry of predictors and outcomes
//!
//! Every question analyzed against an outcome is described by one
//! [`Predictor`] value: which column(s) it reads, how answers are encoded, and
//! the label shown in the report. The registries ([`main_predictors`],
//! [`graduate_predictors`], [`graduate_fallback_predictors`]) are plain lists
//! of descriptors processed uniformly by
//! [`Association::compute`](crate::association::Association::compute).
//!
//! Declaration order is significant: the ranker breaks strength ties by it.
//!
//! # Cross-branch composites
//!
//! Some questions were asked in two mutually exclusive survey branches (e.g.
//! earnings belief for undergraduates in `Q55` and for graduates in `Q44`). A
//! predictor with several source columns reads the first column whose answer
//! is recognized, merging both branches into one series.

use serde::Serialize;

use crate::{
    encoding::{
        AGE, AGREEMENT, CPA_LIKELIHOOD, CREDIT_INFLUENCE, EARNINGS_BELIEF, EncodingTable, IMPACT,
        IMPORTANCE, LIKELIHOOD_IF_KNOWN, PROGRAM_MODALITY, PROGRAM_TYPE, SATISFACTION,
        SCHOOL_STATE, UNDERGRADUATE_MAJOR, WORKING_STATUS, YES_NO,
    },
    record::ResponseRecord,
};

/// Identifier of the combined earnings-belief predictor.
pub const COMBINED_EARNINGS: &str = "Q55|Q44";

/// Predictors listed in the ROI-belief focus section, in display order.
pub const ROI_FOCUS: [&str; 3] = [COMBINED_EARNINGS, "Q33", "Q34"];

/// Outcome question an association is measured against.
#[derive(Debug, Clone, Copy)]
pub struct Outcome {
    pub column: &'static str,
    pub table: &'static EncodingTable,
}

/// Perceived impact on desire to pursue a graduate degree.
pub static PRIMARY_OUTCOME: Outcome = Outcome {
    column: "Q52",
    table: &IMPACT,
};

/// Graduate-only likelihood of pursuing the degree had the pathway been known.
///
/// Graduate respondents skip [`PRIMARY_OUTCOME`] through survey branching, so
/// this question stands in for it in the fallback sample.
pub static FALLBACK_OUTCOME: Outcome = Outcome {
    column: "Q35",
    table: &LIKELIHOOD_IF_KNOWN,
};

impl Outcome {
    #[must_use]
    pub fn encode(&self, record: &ResponseRecord) -> Option<i32> {
        self.table.encode(record.get(self.column)?)
    }

    #[must_use]
    pub fn is_answered(&self, record: &ResponseRecord) -> bool {
        self.encode(record).is_some()
    }
}

/// Thematic group of a predictor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictorGroup {
    Awareness,
    CpaDirection,
    RoiBelief,
    Importance,
    WorkContext,
    Background,
    GraduateProgram,
}

/// How a predictor's answers become analyzable values.
#[derive(Debug, Clone, Copy)]
pub enum PredictorEncoding {
    /// Ordinal or binary codes, correlated with Pearson's r.
    Ordinal(&'static EncodingTable),
    /// Nominal categories, measured with the correlation ratio.
    ///
    /// With a table only its labels count as categories; without one any
    /// non-empty answer does.
    Nominal(Option<&'static EncodingTable>),
}

/// Descriptor of one predictor question.
#[derive(Debug, Clone)]
pub struct Predictor {
    pub id: &'static str,
    pub label: &'static str,
    pub columns: &'static [&'static str],
    pub encoding: PredictorEncoding,
    pub group: PredictorGroup,
}

impl Predictor {
    #[must_use]
    pub fn ordinal(
        columns: &'static [&'static str],
        table: &'static EncodingTable,
        group: PredictorGroup,
        label: &'static str,
    ) -> Self {
        Self {
            id: columns[0],
            label,
            columns,
            encoding: PredictorEncoding::Ordinal(table),
            group,
        }
    }

    #[must_use]
    pub fn nominal(
        columns: &'static [&'static str],
        table: Option<&'static EncodingTable>,
        group: PredictorGroup,
        label: &'static str,
    ) -> Self {
        Self {
            id: columns[0],
            label,
            columns,
            encoding: PredictorEncoding::Nominal(table),
            group,
        }
    }

    /// Ordinal predictor merged from mutually exclusive branch columns.
    #[must_use]
    pub fn composite(
        id: &'static str,
        columns: &'static [&'static str],
        table: &'static EncodingTable,
        group: PredictorGroup,
        label: &'static str,
    ) -> Self {
        Self {
            id,
            ..Self::ordinal(columns, table, group, label)
        }
    }

    #[must_use]
    pub fn is_nominal(&self) -> bool {
        matches!(self.encoding, PredictorEncoding::Nominal(_))
    }

    /// Code of the first source column whose answer the ordinal table recognizes.
    ///
    /// Always `None` for nominal predictors.
    #[must_use]
    pub fn ordinal_code(&self, record: &ResponseRecord) -> Option<i32> {
        let PredictorEncoding::Ordinal(table) = self.encoding else {
            return None;
        };
        self.columns
            .iter()
            .find_map(|column| table.encode(record.get(column)?))
    }

    /// Category label from the first source column holding an accepted answer.
    ///
    /// Always `None` for ordinal predictors.
    #[must_use]
    pub fn category<'r>(&self, record: &'r ResponseRecord) -> Option<&'r str> {
        let PredictorEncoding::Nominal(table) = self.encoding else {
            return None;
        };
        self.columns.iter().find_map(|column| {
            let answer = record.get(column)?;
            table.is_none_or(|table| table.contains(answer)).then_some(answer)
        })
    }
}

const IMPORTANCE_ITEMS: [(&[&str], &str); 8] = [
    (&["Q39_1"], "Importance: CPA exam preparation"),
    (&["Q39_2"], "Importance: networking opportunities"),
    (&["Q39_3"], "Importance: faculty interaction/mentorship"),
    (&["Q39_4"], "Importance: technical accounting coursework"),
    (&["Q39_5"], "Importance: soft-skill development"),
    (&["Q39_6"], "Importance: internship/recruiting opportunities"),
    (&["Q39_7"], "Importance: online/flexible learning"),
    (&["Q39_8"], "Importance: specialized tracks/credentials"),
];

/// Predictors analyzed against [`PRIMARY_OUTCOME`] on the main sample.
#[must_use]
pub fn main_predictors() -> Vec<Predictor> {
    use PredictorGroup::{Awareness, Background, CpaDirection, Importance, RoiBelief, WorkContext};

    let mut predictors = vec![
        // awareness/exposure
        Predictor::ordinal(
            &["Q53"],
            &YES_NO,
            Awareness,
            "Aware of alternative pathway before survey",
        ),
        Predictor::ordinal(
            &["Q31"],
            &YES_NO,
            Awareness,
            "(Grad-only item) aware before beginning graduate program",
        ),
        // CPA direction
        Predictor::ordinal(
            &["Q29"],
            &CPA_LIKELIHOOD,
            CpaDirection,
            "Likelihood of pursuing CPA",
        ),
        Predictor::ordinal(
            &["Q51"],
            &IMPACT,
            CpaDirection,
            "Perceived impact on desire to pursue CPA",
        ),
        // ROI beliefs
        Predictor::ordinal(
            &["Q33"],
            &AGREEMENT,
            RoiBelief,
            "Agree grad degree helps move up career ladder faster",
        ),
        Predictor::ordinal(
            &["Q34"],
            &AGREEMENT,
            RoiBelief,
            "Agree grad degree may delay advancement",
        ),
        Predictor::ordinal(
            &["Q55"],
            &EARNINGS_BELIEF,
            RoiBelief,
            "Belief grad degree increases lifetime earnings (undergrad branch)",
        ),
        Predictor::ordinal(
            &["Q44"],
            &EARNINGS_BELIEF,
            RoiBelief,
            "Belief grad degree increases lifetime earnings (grad branch)",
        ),
    ];

    // importance ratings
    predictors.extend(
        IMPORTANCE_ITEMS
            .into_iter()
            .map(|(columns, label)| Predictor::ordinal(columns, &IMPORTANCE, Importance, label)),
    );

    predictors.extend([
        // work/employer context
        Predictor::ordinal(
            &["Q46"],
            &YES_NO,
            WorkContext,
            "Work >20 hours/week in accounting",
        ),
        Predictor::ordinal(&["Q47"], &YES_NO, WorkContext, "Work at CPA firm"),
        Predictor::ordinal(
            &["Q49"],
            &YES_NO,
            WorkContext,
            "Employer requires/encourages graduate degree",
        ),
        Predictor::ordinal(
            &["Q48"],
            &YES_NO,
            WorkContext,
            "Job offer in accounting near graduation",
        ),
        // background controls
        Predictor::ordinal(&["Q65"], &AGE, Background, "Age"),
        Predictor::nominal(
            &["Q17"],
            Some(&UNDERGRADUATE_MAJOR),
            Background,
            "Undergraduate major",
        ),
        Predictor::nominal(&["Q60"], Some(&SCHOOL_STATE), Background, "School state"),
        Predictor::ordinal(
            &["Q16"],
            &WORKING_STATUS,
            Background,
            "Full-time (vs part-time) student",
        ),
        Predictor::nominal(
            &["Q27"],
            None,
            Background,
            "Undergraduate vs graduate student status",
        ),
        // both earnings branches as one series
        Predictor::composite(
            COMBINED_EARNINGS,
            &["Q55", "Q44"],
            &EARNINGS_BELIEF,
            RoiBelief,
            "Belief grad degree increases lifetime earnings (combined branches)",
        ),
    ]);

    predictors
}

/// Predictors analyzed on the graduate-only sample against [`PRIMARY_OUTCOME`].
#[must_use]
pub fn graduate_predictors() -> Vec<Predictor> {
    use PredictorGroup::{Awareness, CpaDirection, GraduateProgram, RoiBelief, WorkContext};

    vec![
        Predictor::ordinal(
            &["Q31"],
            &YES_NO,
            Awareness,
            "Aware before beginning graduate program",
        ),
        Predictor::ordinal(
            &["Q30"],
            &CREDIT_INFLUENCE,
            GraduateProgram,
            "150-credit requirement influence on enrolling",
        ),
        Predictor::ordinal(
            &["Q37"],
            &SATISFACTION,
            GraduateProgram,
            "Satisfaction with pursuing graduate degree",
        ),
        Predictor::ordinal(
            &["Q57"],
            &PROGRAM_MODALITY,
            GraduateProgram,
            "Program modality (online vs in person)",
        ),
        Predictor::ordinal(
            &["Q58"],
            &PROGRAM_TYPE,
            GraduateProgram,
            "Program type (MAcc/MBA/Other)",
        ),
        Predictor::ordinal(
            &["Q49"],
            &YES_NO,
            WorkContext,
            "Employer requires/encourages graduate degree",
        ),
        Predictor::ordinal(
            &["Q48"],
            &YES_NO,
            WorkContext,
            "Job offer in accounting near graduation",
        ),
        Predictor::ordinal(
            &["Q51"],
            &IMPACT,
            CpaDirection,
            "Perceived impact on desire to pursue CPA",
        ),
        Predictor::ordinal(
            &["Q33"],
            &AGREEMENT,
            RoiBelief,
            "Agree grad degree helps move up career ladder faster",
        ),
        Predictor::ordinal(
            &["Q34"],
            &AGREEMENT,
            RoiBelief,
            "Agree grad degree may delay advancement",
        ),
    ]
}

/// Predictors analyzed on the graduate fallback sample against [`FALLBACK_OUTCOME`].
///
/// Same as [`graduate_predictors`] without the CPA-impact item.
#[must_use]
pub fn graduate_fallback_predictors() -> Vec<Predictor> {
    graduate_predictors()
        .into_iter()
        .filter(|predictor| predictor.id != "Q51")
        .collect()
}
