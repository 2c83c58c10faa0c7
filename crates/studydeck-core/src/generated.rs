//! Procedurally generated question banks.
//!
//! Instead of storing questions, a generated bank stores the terms
//! `1..=count` and renders question and answer text from the term on demand.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bank::{QuestionBank, QuestionBankState, StudyQueue};

/// The rule used to turn a term `n` into a question and an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Sequence {
    /// "n squared" -> n²
    Squares,
    /// "n cubed" -> n³
    Cubes,
    /// "factor x n" -> factor·n
    Times { factor: u32 },
}

impl Sequence {
    pub fn question(&self, n: u32) -> String {
        match self {
            Sequence::Squares => format!("{n} squared"),
            Sequence::Cubes => format!("{n} cubed"),
            Sequence::Times { factor } => format!("{factor} x {n}"),
        }
    }

    pub fn answer(&self, n: u32) -> String {
        let n = u128::from(n);
        let value = match self {
            Sequence::Squares => n * n,
            Sequence::Cubes => n * n * n,
            Sequence::Times { factor } => u128::from(*factor) * n,
        };
        value.to_string()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sequence::Squares => write!(f, "Squares"),
            Sequence::Cubes => write!(f, "Cubes"),
            Sequence::Times { factor } => write!(f, "{factor} times table"),
        }
    }
}

/// A bank whose questions are computed from a [`Sequence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBank {
    sequence: Sequence,
    queue: StudyQueue<u32>,
}

impl GeneratedBank {
    /// A bank asking about terms `1..=count` in order.
    pub fn new(sequence: Sequence, count: u32) -> Self {
        Self {
            sequence,
            queue: StudyQueue::new(1..=count),
        }
    }

    pub fn sequence(&self) -> Sequence {
        self.sequence
    }
}

impl QuestionBank for GeneratedBank {
    fn state(&self) -> QuestionBankState {
        self.queue.mode()
    }

    fn text(&self) -> Option<Cow<'_, str>> {
        let n = *self.queue.current()?;
        match self.queue.mode() {
            QuestionBankState::Questioning => Some(Cow::Owned(self.sequence.question(n))),
            QuestionBankState::Answering => Some(Cow::Owned(self.sequence.answer(n))),
            QuestionBankState::Completed => None,
        }
    }

    fn size(&self) -> usize {
        self.queue.total()
    }

    fn show(&self) -> Self {
        Self {
            sequence: self.sequence,
            queue: self.queue.reveal(),
        }
    }

    fn next(&self, correct: bool) -> Self {
        Self {
            sequence: self.sequence,
            queue: self.queue.advance(correct),
        }
    }
}
