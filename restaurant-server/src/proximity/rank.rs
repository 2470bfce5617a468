//! Distance ranking for search results.

use super::search::Ranked;

/// Order results nearest first.
///
/// The sort is stable: results at exactly the same distance keep the order
/// they arrived in, so callers get a deterministic tie-break from the order
/// of their candidate set. Uses total ordering, so the sort is well defined
/// for any input; a NaN distance sorts last.
pub fn rank_by_distance<'a, C>(mut results: Vec<Ranked<'a, C>>) -> Vec<Ranked<'a, C>> {
    results.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked<'a>(name: &'a &'static str, distance_miles: f64) -> Ranked<'a, &'static str> {
        Ranked {
            candidate: name,
            distance_miles,
        }
    }

    fn names(results: &[Ranked<'_, &'static str>]) -> Vec<&'static str> {
        results.iter().map(|r| *r.candidate).collect()
    }

    #[test]
    fn empty_input() {
        let results: Vec<Ranked<'_, &'static str>> = vec![];
        assert!(rank_by_distance(results).is_empty());
    }

    #[test]
    fn sorts_nearest_first() {
        let (a, b, c) = ("a", "b", "c");
        let results = vec![ranked(&a, 0.3), ranked(&b, 0.1), ranked(&c, 0.2)];

        assert_eq!(names(&rank_by_distance(results)), ["b", "c", "a"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let (a, b, c, d) = ("a", "b", "c", "d");
        let results = vec![
            ranked(&a, 0.2),
            ranked(&b, 0.1),
            ranked(&c, 0.2),
            ranked(&d, 0.1),
        ];

        assert_eq!(names(&rank_by_distance(results)), ["b", "d", "a", "c"]);
    }

    #[test]
    fn nan_sorts_last() {
        let (a, b) = ("a", "b");
        let results = vec![ranked(&a, f64::NAN), ranked(&b, 5.0)];

        assert_eq!(names(&rank_by_distance(results)), ["b", "a"]);
    }
}
