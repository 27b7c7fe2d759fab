//! Ranking associations by strength
//!
//! Ranking keeps associations with a defined strength computed on at least a
//! minimum number of pairs, then orders them strongest first. The sort is
//! stable, so equal strengths keep registry declaration order.

use std::cmp::Ordering;

use crate::association::Association;

/// Associations with a defined strength and `n >= min_sample_size`, strongest first.
#[must_use]
pub fn rank(associations: &[Association], min_sample_size: usize) -> Vec<Association> {
    let mut ranked = associations
        .iter()
        .filter(|a| a.strength.is_some() && a.n >= min_sample_size)
        .cloned()
        .collect::<Vec<_>>();
    sort_by_strength(&mut ranked);
    ranked
}

/// Stable sort, strongest first. Undefined strengths sort last.
pub fn sort_by_strength(associations: &mut [Association]) {
    associations.sort_by(|a, b| compare_strength(b.strength, a.strength));
}

fn compare_strength(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{association::AssociationKind, predictor::PredictorGroup};

    fn association(id: &'static str, n: usize, strength: Option<f64>) -> Association {
        Association {
            predictor_id: id,
            label: id,
            group: PredictorGroup::Background,
            kind: AssociationKind::OrdinalBinary,
            n,
            strength,
            signed: strength,
        }
    }

    #[test]
    fn test_threshold_and_undefined_are_dropped() {
        let associations = [
            association("small", 19, Some(0.9)),
            association("undefined", 100, None),
            association("kept", 20, Some(0.1)),
        ];
        let ranked = rank(&associations, 20);
        let ids = ranked.iter().map(|a| a.predictor_id).collect::<Vec<_>>();
        assert_eq!(ids, ["kept"]);
    }

    #[test]
    fn test_sorted_descending_and_stable() {
        let associations = [
            association("a", 30, Some(0.2)),
            association("b", 30, Some(0.5)),
            association("c", 30, Some(0.2)),
            association("d", 30, Some(0.7)),
            association("e", 30, Some(0.5)),
        ];
        let ranked = rank(&associations, 8);
        let ids = ranked.iter().map(|a| a.predictor_id).collect::<Vec<_>>();
        assert_eq!(ids, ["d", "b", "e", "a", "c"]);
        assert!(
            ranked
                .windows(2)
                .all(|pair| pair[0].strength >= pair[1].strength)
        );
        assert!(ranked.iter().all(|a| a.n >= 8));
    }

    #[test]
    fn test_sort_by_strength_puts_undefined_last() {
        let mut associations = [
            association("none", 3, None),
            association("low", 3, Some(0.1)),
            association("high", 3, Some(0.3)),
        ];
        sort_by_strength(&mut associations);
        let ids = associations
            .iter()
            .map(|a| a.predictor_id)
            .collect::<Vec<_>>();
        assert_eq!(ids, ["high", "low", "none"]);
    }
}
