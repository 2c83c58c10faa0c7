//! Generic k-nearest-neighbor classification.
//!
//! Works over any example type `E` and label type `L` given a distance
//! function. Ties are resolved by dataset order: among equally distant
//! examples the earlier one is chosen, and among labels with equal votes the
//! one first seen among the selected neighbors wins.

use serde::{Deserialize, Serialize};

use crate::error::StudyError;

/// An example paired with its known label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledExample<E, L> {
    pub example: E,
    pub label: L,
}

impl<E, L> LabeledExample<E, L> {
    pub fn new(example: E, label: L) -> Self {
        Self { example, label }
    }
}

/// The winning label and how many of the `k` neighbors voted for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultWithVotes<L> {
    pub label: L,
    pub votes: usize,
}

/// Predict the label of `query` by majority vote of its `k` nearest
/// neighbors in `dataset`.
///
/// Fails with [`StudyError::EmptyDataset`] or
/// [`StudyError::InvalidNeighbors`] unless `1 <= k <= dataset.len()`.
pub fn get_label<E, L, F>(
    query: &E,
    dataset: &[LabeledExample<E, L>],
    distance: F,
    k: usize,
) -> Result<ResultWithVotes<L>, StudyError>
where
    L: Clone + PartialEq,
    F: Fn(&E, &E) -> usize,
{
    if dataset.is_empty() {
        return Err(StudyError::EmptyDataset);
    }
    if k == 0 || k > dataset.len() {
        return Err(StudyError::InvalidNeighbors {
            k,
            len: dataset.len(),
        });
    }

    let mut scored: Vec<(usize, &L)> = dataset
        .iter()
        .map(|ex| (distance(query, &ex.example), &ex.label))
        .collect();
    // sort_by_key is stable, so equal distances keep dataset order
    scored.sort_by_key(|(d, _)| *d);

    // (label, votes) in order of first appearance among the neighbors
    let mut tally: Vec<(&L, usize)> = Vec::new();
    for (_, label) in scored.into_iter().take(k) {
        match tally.iter_mut().find(|(l, _)| *l == label) {
            Some((_, votes)) => *votes += 1,
            None => tally.push((label, 1)),
        }
    }

    let mut winner = tally[0];
    for &(label, votes) in &tally[1..] {
        if votes > winner.1 {
            winner = (label, votes);
        }
    }

    Ok(ResultWithVotes {
        label: winner.0.clone(),
        votes: winner.1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    //       A   A       ?       B           B
    // |--- --- --- --- --- --- --- --- --- ---|
    //   1   2   3   4   5   6   7   8   9  10
    fn points() -> Vec<LabeledExample<i32, &'static str>> {
        vec![
            LabeledExample::new(2, "A"),
            LabeledExample::new(3, "A"),
            LabeledExample::new(7, "B"),
            LabeledExample::new(10, "B"),
        ]
    }

    fn abs_diff(a: &i32, b: &i32) -> usize {
        a.abs_diff(*b) as usize
    }

    #[test]
    fn five_with_three_neighbors_is_a() {
        let result = get_label(&5, &points(), abs_diff, 3).unwrap();
        assert_eq!(result, ResultWithVotes { label: "A", votes: 2 });
    }

    #[test]
    fn one_nearest_neighbor() {
        assert_eq!(
            get_label(&1, &points(), abs_diff, 1).unwrap(),
            ResultWithVotes { label: "A", votes: 1 }
        );
        assert_eq!(
            get_label(&10, &points(), abs_diff, 1).unwrap(),
            ResultWithVotes { label: "B", votes: 1 }
        );
    }

    #[test]
    fn two_nearest_neighbors_agree() {
        assert_eq!(
            get_label(&1, &points(), abs_diff, 2).unwrap(),
            ResultWithVotes { label: "A", votes: 2 }
        );
        assert_eq!(
            get_label(&10, &points(), abs_diff, 2).unwrap(),
            ResultWithVotes { label: "B", votes: 2 }
        );
    }

    #[test]
    fn vote_tie_goes_to_first_seen_label() {
        // 5 is 2 from 3 (A) and 2 from 7 (B); A comes first in the dataset.
        let data = vec![
            LabeledExample::new(3, "A"),
            LabeledExample::new(7, "B"),
        ];
        assert_eq!(
            get_label(&5, &data, abs_diff, 2).unwrap(),
            ResultWithVotes { label: "A", votes: 1 }
        );

        let swapped = vec![
            LabeledExample::new(7, "B"),
            LabeledExample::new(3, "A"),
        ];
        assert_eq!(
            get_label(&5, &swapped, abs_diff, 2).unwrap(),
            ResultWithVotes { label: "B", votes: 1 }
        );
    }

    #[test]
    fn equal_distances_keep_dataset_order() {
        let data = vec![
            LabeledExample::new(4, "X"),
            LabeledExample::new(6, "Y"),
            LabeledExample::new(100, "Y"),
        ];
        assert_eq!(get_label(&5, &data, abs_diff, 1).unwrap().label, "X");
    }

    #[test]
    fn k_out_of_range_is_rejected() {
        assert_eq!(
            get_label(&5, &points(), abs_diff, 0),
            Err(StudyError::InvalidNeighbors { k: 0, len: 4 })
        );
        assert_eq!(
            get_label(&5, &points(), abs_diff, 5),
            Err(StudyError::InvalidNeighbors { k: 5, len: 4 })
        );
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let empty: Vec<LabeledExample<i32, &str>> = vec![];
        assert_eq!(
            get_label(&5, &empty, abs_diff, 1),
            Err(StudyError::EmptyDataset)
        );
    }
}
