//! Association between one predictor and an outcome on one sample
//!
//! [`Association::compute`] turns a [`Predictor`] descriptor into an
//! [`Association`] result:
//!
//! 1. Pair each record's predictor value with its outcome value, skipping
//!    records where either is missing or unmapped (listwise exclusion)
//! 2. Ordinal/binary predictors: Pearson's r gives the signed coefficient
//! 3. Nominal predictors: the correlation ratio (eta) gives an unsigned value
//! 4. The reported strength is the absolute value of the coefficient
//!
//! A result whose estimator had insufficient data keeps `strength: None`; the
//! [`ranking`](crate::ranking) module drops such results.

use std::fmt;

use serde::Serialize;
use surveycorr_stats::correlation::{correlation_ratio, pearson};

use crate::{
    predictor::{Outcome, Predictor, PredictorGroup},
    record::ResponseRecord,
};

/// Which estimator produced an association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssociationKind {
    #[serde(rename = "ordinal/binary")]
    OrdinalBinary,
    #[serde(rename = "nominal")]
    Nominal,
}

impl fmt::Display for AssociationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.to_str(), f)
    }
}

impl AssociationKind {
    #[must_use]
    pub fn to_str(self) -> &'static str {
        match self {
            AssociationKind::OrdinalBinary => "ordinal/binary",
            AssociationKind::Nominal => "nominal",
        }
    }
}

/// Sign of an ordinal/binary association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Positive,
    Negative,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Positive => "Positive",
            Direction::Negative => "Negative",
        };
        fmt::Display::fmt(s, f)
    }
}

impl Direction {
    /// A coefficient of exactly zero reads as `Negative`.
    #[must_use]
    pub fn from_signed(r: f64) -> Self {
        if r > 0.0 {
            Direction::Positive
        } else {
            Direction::Negative
        }
    }
}

/// Association of one predictor with an outcome on one sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Association {
    pub predictor_id: &'static str,
    pub label: &'static str,
    pub group: PredictorGroup,
    pub kind: AssociationKind,
    /// Number of records contributing a (predictor, outcome) pair.
    pub n: usize,
    /// `|r|` for ordinal/binary predictors, eta for nominal ones.
    pub strength: Option<f64>,
    /// Signed `r`; always `None` for nominal predictors.
    pub signed: Option<f64>,
}

impl Association {
    /// Computes the association of `predictor` with `outcome` over `records`.
    #[must_use]
    pub fn compute(predictor: &Predictor, records: &[&ResponseRecord], outcome: &Outcome) -> Self {
        let association = if predictor.is_nominal() {
            let (categories, values) = nominal_series(predictor, records, outcome);
            Self {
                predictor_id: predictor.id,
                label: predictor.label,
                group: predictor.group,
                kind: AssociationKind::Nominal,
                n: values.len(),
                strength: correlation_ratio(&categories, &values),
                signed: None,
            }
        } else {
            let (x, y) = ordinal_series(predictor, records, outcome);
            let signed = pearson(&x, &y);
            Self {
                predictor_id: predictor.id,
                label: predictor.label,
                group: predictor.group,
                kind: AssociationKind::OrdinalBinary,
                n: x.len(),
                strength: signed.map(f64::abs),
                signed,
            }
        };

        tracing::debug!(
            predictor = association.predictor_id,
            outcome = outcome.column,
            n = association.n,
            strength = ?association.strength,
            "computed association"
        );
        association
    }

    /// Computes one association per predictor, in registry order.
    #[must_use]
    pub fn compute_all(
        predictors: &[Predictor],
        records: &[&ResponseRecord],
        outcome: &Outcome,
    ) -> Vec<Self> {
        predictors
            .iter()
            .map(|predictor| Self::compute(predictor, records, outcome))
            .collect()
    }

    /// Direction of the association, if it has one.
    ///
    /// `None` for nominal predictors and for undefined coefficients.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.signed.map(Direction::from_signed)
    }
}

fn ordinal_series(
    predictor: &Predictor,
    records: &[&ResponseRecord],
    outcome: &Outcome,
) -> (Vec<f64>, Vec<f64>) {
    records
        .iter()
        .copied()
        .filter_map(|record| {
            let x = predictor.ordinal_code(record)?;
            let y = outcome.encode(record)?;
            Some((f64::from(x), f64::from(y)))
        })
        .unzip()
}

fn nominal_series<'r>(
    predictor: &Predictor,
    records: &[&'r ResponseRecord],
    outcome: &Outcome,
) -> (Vec<&'r str>, Vec<f64>) {
    records
        .iter()
        .copied()
        .filter_map(|record| {
            let category = predictor.category(record)?;
            let y = outcome.encode(record)?;
            Some((category, f64::from(y)))
        })
        .unzip()
}
