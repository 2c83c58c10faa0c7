//! Yes/no classification of free-text learner responses.
//!
//! The [`SentimentClassifier`] memorises a small fixed dataset of
//! affirmative and negative replies and falls back to 3-nearest-neighbor
//! voting under edit distance for anything it has not seen verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::distance::levenshtein;
use crate::error::StudyError;
use crate::knn::{get_label, LabeledExample, ResultWithVotes};

/// Number of neighbors consulted for unseen input.
pub const NEIGHBORS: usize = 3;

/// Replies the classifier knows. All lowercase, no duplicates.
pub const DATASET: [(&str, bool); 18] = [
    ("yes", true),
    ("y", true),
    ("indeed", true),
    ("aye", true),
    ("oh yes", true),
    ("affirmative", true),
    ("roger", true),
    ("uh huh", true),
    ("true", true),
    ("no", false),
    ("n", false),
    ("nope", false),
    ("negative", false),
    ("nay", false),
    ("negatory", false),
    ("uh uh", false),
    ("absolutely not", false),
    ("false", false),
];

/// The built-in dataset as labeled examples.
pub fn dataset() -> Vec<LabeledExample<String, bool>> {
    DATASET
        .iter()
        .map(|&(example, label)| LabeledExample::new(example.to_string(), label))
        .collect()
}

/// Positive iff the input starts with `y`, ignoring case.
pub fn naive_classifier(s: &str) -> bool {
    s.to_uppercase().starts_with('Y')
}

/// Edit-distance k-NN over the built-in dataset.
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    dataset: Vec<LabeledExample<String, bool>>,
}

impl SentimentClassifier {
    pub fn new() -> Self {
        Self { dataset: dataset() }
    }

    /// Use a custom dataset. It must hold at least [`NEIGHBORS`] examples;
    /// labels are matched against lowercased input.
    pub fn with_dataset(dataset: Vec<LabeledExample<String, bool>>) -> Result<Self, StudyError> {
        if dataset.is_empty() {
            return Err(StudyError::EmptyDataset);
        }
        if dataset.len() < NEIGHBORS {
            return Err(StudyError::InvalidNeighbors {
                k: NEIGHBORS,
                len: dataset.len(),
            });
        }
        Ok(Self { dataset })
    }

    /// Classify a reply.
    ///
    /// An exact (case-insensitive) dataset hit returns that label with all
    /// [`NEIGHBORS`] votes; anything else goes through k-NN.
    pub fn classify(&self, s: &str) -> ResultWithVotes<bool> {
        let query = s.to_lowercase();

        if let Some(hit) = self.dataset.iter().find(|ex| ex.example == query) {
            return ResultWithVotes {
                label: hit.label,
                votes: NEIGHBORS,
            };
        }

        let result = get_label(&query, &self.dataset, |a, b| levenshtein(a, b), NEIGHBORS)
            .expect("classifier dataset holds at least NEIGHBORS examples");
        tracing::debug!(
            "classified {:?} as {} ({}/{})",
            query,
            result.label,
            result.votes,
            NEIGHBORS
        );
        result
    }

    pub fn is_positive(&self, s: &str) -> bool {
        self.classify(s).label
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// The classifiers a learner can pick from.
#[derive(Debug, Clone)]
pub enum Classifier {
    Naive,
    Sentiment(SentimentClassifier),
}

impl Classifier {
    /// Every available classifier, in menu order.
    pub fn all() -> Vec<Classifier> {
        vec![
            Classifier::Sentiment(SentimentClassifier::new()),
            Classifier::Naive,
        ]
    }

    pub fn is_positive(&self, s: &str) -> bool {
        match self {
            Classifier::Naive => naive_classifier(s),
            Classifier::Sentiment(c) => c.is_positive(s),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Classifier::Naive => "Naive (starts with Y)",
            Classifier::Sentiment(_) => "Sentiment (3-NN, edit distance)",
        }
    }
}

impl fmt::Display for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One dataset example and what a classifier made of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub example: String,
    pub expected: bool,
    pub predicted: bool,
}

impl Prediction {
    pub fn is_correct(&self) -> bool {
        self.expected == self.predicted
    }
}

/// How a classifier fares against a labeled dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub classifier: String,
    pub predictions: Vec<Prediction>,
}

impl Evaluation {
    pub fn correct(&self) -> usize {
        self.predictions.iter().filter(|p| p.is_correct()).count()
    }

    /// Fraction of predictions that match their label (0.0 when empty).
    pub fn accuracy(&self) -> f64 {
        if self.predictions.is_empty() {
            return 0.0;
        }
        self.correct() as f64 / self.predictions.len() as f64
    }
}

/// Run `classifier` over every example in `dataset`.
pub fn evaluate(
    classifier: &Classifier,
    dataset: &[LabeledExample<String, bool>],
) -> Evaluation {
    let predictions = dataset
        .iter()
        .map(|ex| Prediction {
            example: ex.example.clone(),
            expected: ex.label,
            predicted: classifier.is_positive(&ex.example),
        })
        .collect();

    Evaluation {
        classifier: classifier.name().to_string(),
        predictions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn votes(label: bool, votes: usize) -> ResultWithVotes<bool> {
        ResultWithVotes { label, votes }
    }

    #[test]
    fn dataset_is_balanced_lowercase_and_unique() {
        let positives = DATASET.iter().filter(|(_, l)| *l).count();
        assert_eq!(positives, 9);
        assert_eq!(DATASET.len() - positives, 9);
        for (i, (a, _)) in DATASET.iter().enumerate() {
            assert_eq!(*a, a.to_lowercase());
            assert!(DATASET[i + 1..].iter().all(|(b, _)| a != b), "{a} repeated");
        }
    }

    #[test]
    fn exact_match_is_case_insensitive_and_unanimous() {
        let c = SentimentClassifier::new();
        assert_eq!(c.classify("YES"), votes(true, 3));
        assert_eq!(c.classify("no"), votes(false, 3));
        assert_eq!(c.classify("Absolutely Not"), votes(false, 3));
    }

    #[test]
    fn unseen_replies_use_neighbors() {
        let c = SentimentClassifier::new();
        assert_eq!(c.classify("nadda"), votes(false, 2));
        assert_eq!(c.classify("yerp"), votes(true, 3));
        assert_eq!(c.classify("yep"), votes(true, 3));
        assert_eq!(c.classify("nah"), votes(false, 3));
    }

    #[test]
    fn confidently_wrong_on_nonsense() {
        let c = SentimentClassifier::new();
        assert_eq!(c.classify("ouch"), votes(true, 3));
        assert_eq!(c.classify("now"), votes(false, 3));
    }

    #[test]
    fn memorises_whole_dataset() {
        let c = SentimentClassifier::new();
        for (example, label) in DATASET {
            assert_eq!(c.is_positive(example), label, "{example}");
        }
    }

    #[test]
    fn custom_dataset_needs_enough_neighbors() {
        assert_eq!(
            SentimentClassifier::with_dataset(vec![]).unwrap_err(),
            StudyError::EmptyDataset
        );

        let two = vec![
            LabeledExample::new("si".to_string(), true),
            LabeledExample::new("non".to_string(), false),
        ];
        assert_eq!(
            SentimentClassifier::with_dataset(two).unwrap_err(),
            StudyError::InvalidNeighbors { k: 3, len: 2 }
        );
    }

    #[test]
    fn custom_dataset_classifies_by_vote() {
        let c = SentimentClassifier::with_dataset(vec![
            LabeledExample::new("si".to_string(), true),
            LabeledExample::new("oui".to_string(), true),
            LabeledExample::new("non".to_string(), false),
        ])
        .unwrap();
        assert_eq!(c.classify("OUI"), votes(true, 3));
        assert_eq!(c.classify("sip"), votes(true, 2));
    }

    #[test]
    fn naive_only_knows_y() {
        assert!(naive_classifier("yes"));
        assert!(naive_classifier("Y"));
        assert!(!naive_classifier("indeed"));
        assert!(!naive_classifier("no"));
    }

    #[test]
    fn evaluation_scores_both_classifiers() {
        let data = dataset();
        let sentiment = evaluate(&Classifier::Sentiment(SentimentClassifier::new()), &data);
        assert_eq!(sentiment.correct(), 18);
        assert!((sentiment.accuracy() - 1.0).abs() < f64::EPSILON);

        // "yes" and "y" plus all nine negatives
        let naive = evaluate(&Classifier::Naive, &data);
        assert_eq!(naive.correct(), 11);
    }

    #[test]
    fn empty_evaluation_has_zero_accuracy() {
        let e = evaluate(&Classifier::Naive, &[]);
        assert_eq!(e.accuracy(), 0.0);
    }
}
