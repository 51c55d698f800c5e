/// Statistics reporters over a filtered [`TripTable`](crate::data::model::TripTable).
///
/// Each reporter is a plain struct with a `compute` constructor and a
/// `Display` impl; none of them touch I/O or mutate the table, so the app
/// can render them to any writer.

pub mod durations;
pub mod stations;
pub mod travel_times;
pub mod users;

use std::collections::HashMap;
use std::hash::Hash;

/// All values tied for the highest frequency, in first-occurrence order.
///
/// First-occurrence is the tie-break everywhere a single "most common"
/// value is reported; it falls out of a stable counting pass over file
/// order and is not an alphabetical guarantee.
pub(crate) fn modes<T>(values: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut order: Vec<T> = Vec::new();
    for v in values {
        let n = counts.entry(v.clone()).or_insert(0);
        if *n == 0 {
            order.push(v);
        }
        *n += 1;
    }
    let Some(best) = counts.values().copied().max() else {
        return Vec::new();
    };
    order.into_iter().filter(|v| counts[v] == best).collect()
}

/// The single most common value, or `None` for an empty input.
pub(crate) fn mode_first<T>(values: impl IntoIterator<Item = T>) -> Option<T>
where
    T: Eq + Hash + Clone,
{
    modes(values).into_iter().next()
}

/// Per-value counts in descending count order; ties keep first-occurrence
/// order. `None` inputs are counted separately and returned alongside.
pub(crate) fn value_counts<T>(values: impl IntoIterator<Item = Option<T>>) -> (Vec<(T, usize)>, usize)
where
    T: Eq + Hash + Clone,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut order: Vec<T> = Vec::new();
    let mut missing = 0usize;
    for v in values {
        match v {
            Some(v) => {
                let n = counts.entry(v.clone()).or_insert(0);
                if *n == 0 {
                    order.push(v);
                }
                *n += 1;
            }
            None => missing += 1,
        }
    }
    let mut out: Vec<(T, usize)> = order
        .into_iter()
        .map(|v| {
            let n = counts[&v];
            (v, n)
        })
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    (out, missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_returns_all_tied_values_in_first_seen_order() {
        assert_eq!(modes(vec![3, 1, 1, 3, 2]), vec![3, 1]);
        assert_eq!(modes(vec!["b", "a", "b"]), vec!["b"]);
    }

    #[test]
    fn modes_of_empty_input_is_empty() {
        assert!(modes(Vec::<i32>::new()).is_empty());
        assert_eq!(mode_first(Vec::<i32>::new()), None);
    }

    #[test]
    fn mode_first_breaks_ties_by_first_occurrence() {
        assert_eq!(mode_first(vec![2, 1, 1, 2]), Some(2));
    }

    #[test]
    fn value_counts_sorts_by_descending_count() {
        let (counts, missing) =
            value_counts(vec![Some("a"), Some("b"), Some("b"), None, Some("b"), Some("a"), None]);
        assert_eq!(counts, vec![("b", 3), ("a", 2)]);
        assert_eq!(missing, 2);
    }
}
