//! Immutable question bank state machine.
//!
//! A bank cycles through its questions: `show` reveals the answer to the
//! current question, `next` retires it (correct) or sends it to the back of
//! the queue (incorrect). Every transition returns a new bank and leaves the
//! receiver untouched, so earlier values stay valid.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::generated::GeneratedBank;
use crate::model::TaggedQuestion;

/// Which side of the current card is visible, or whether the bank is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionBankState {
    Completed,
    Questioning,
    Answering,
}

impl fmt::Display for QuestionBankState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionBankState::Completed => write!(f, "completed"),
            QuestionBankState::Questioning => write!(f, "questioning"),
            QuestionBankState::Answering => write!(f, "answering"),
        }
    }
}

/// Capabilities shared by every kind of question bank.
pub trait QuestionBank {
    /// Current state.
    fn state(&self) -> QuestionBankState;

    /// The question while questioning, the answer while answering, `None`
    /// once completed.
    fn text(&self) -> Option<Cow<'_, str>>;

    /// Number of questions the bank was created with. Requeues and
    /// retirements never change it.
    fn size(&self) -> usize;

    /// Reveal the answer. Returns an unchanged copy unless questioning.
    fn show(&self) -> Self
    where
        Self: Sized;

    /// Retire (`correct`) or requeue the current question and move on.
    /// Returns an unchanged copy unless answering.
    fn next(&self, correct: bool) -> Self
    where
        Self: Sized;
}

/// Queue mechanics shared by all bank variants.
///
/// `T` identifies a question; the front of `pending` is the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StudyQueue<T> {
    pending: VecDeque<T>,
    mode: QuestionBankState,
    total: usize,
}

impl<T: Clone> StudyQueue<T> {
    pub(crate) fn new(items: impl IntoIterator<Item = T>) -> Self {
        let pending: VecDeque<T> = items.into_iter().collect();
        let mode = if pending.is_empty() {
            QuestionBankState::Completed
        } else {
            QuestionBankState::Questioning
        };
        Self {
            total: pending.len(),
            pending,
            mode,
        }
    }

    pub(crate) fn mode(&self) -> QuestionBankState {
        self.mode
    }

    pub(crate) fn total(&self) -> usize {
        self.total
    }

    pub(crate) fn current(&self) -> Option<&T> {
        match self.mode {
            QuestionBankState::Completed => None,
            _ => self.pending.front(),
        }
    }

    pub(crate) fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn reveal(&self) -> Self {
        let mut revealed = self.clone();
        if self.mode == QuestionBankState::Questioning {
            revealed.mode = QuestionBankState::Answering;
        }
        revealed
    }

    pub(crate) fn advance(&self, correct: bool) -> Self {
        let mut advanced = self.clone();
        if self.mode != QuestionBankState::Answering {
            return advanced;
        }

        if let Some(current) = advanced.pending.pop_front() {
            if !correct {
                advanced.pending.push_back(current);
            }
        }

        advanced.mode = if advanced.pending.is_empty() {
            QuestionBankState::Completed
        } else {
            QuestionBankState::Questioning
        };
        advanced
    }
}

/// A bank backed by a fixed list of tagged questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBank {
    questions: Arc<[TaggedQuestion]>,
    queue: StudyQueue<usize>,
}

impl ListBank {
    pub fn new(questions: Vec<TaggedQuestion>) -> Self {
        let queue = StudyQueue::new(0..questions.len());
        Self {
            questions: questions.into(),
            queue,
        }
    }

    /// The question at the front of the queue, unless completed.
    pub fn current(&self) -> Option<&TaggedQuestion> {
        self.queue.current().map(|&idx| &self.questions[idx])
    }

    /// Questions still waiting to be answered correctly.
    pub fn remaining(&self) -> usize {
        self.queue.pending_len()
    }
}

impl From<Vec<TaggedQuestion>> for ListBank {
    fn from(questions: Vec<TaggedQuestion>) -> Self {
        Self::new(questions)
    }
}

impl QuestionBank for ListBank {
    fn state(&self) -> QuestionBankState {
        self.queue.mode()
    }

    fn text(&self) -> Option<Cow<'_, str>> {
        let current = self.current()?;
        match self.queue.mode() {
            QuestionBankState::Questioning => Some(Cow::Borrowed(current.question())),
            QuestionBankState::Answering => Some(Cow::Borrowed(current.answer())),
            QuestionBankState::Completed => None,
        }
    }

    fn size(&self) -> usize {
        self.queue.total()
    }

    fn show(&self) -> Self {
        Self {
            questions: Arc::clone(&self.questions),
            queue: self.queue.reveal(),
        }
    }

    fn next(&self, correct: bool) -> Self {
        Self {
            questions: Arc::clone(&self.questions),
            queue: self.queue.advance(correct),
        }
    }
}

/// Any of the bank variants, so heterogeneous banks can share one menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyBank {
    List(ListBank),
    Generated(GeneratedBank),
}

impl From<ListBank> for AnyBank {
    fn from(bank: ListBank) -> Self {
        AnyBank::List(bank)
    }
}

impl From<GeneratedBank> for AnyBank {
    fn from(bank: GeneratedBank) -> Self {
        AnyBank::Generated(bank)
    }
}

impl QuestionBank for AnyBank {
    fn state(&self) -> QuestionBankState {
        match self {
            AnyBank::List(b) => b.state(),
            AnyBank::Generated(b) => b.state(),
        }
    }

    fn text(&self) -> Option<Cow<'_, str>> {
        match self {
            AnyBank::List(b) => b.text(),
            AnyBank::Generated(b) => b.text(),
        }
    }

    fn size(&self) -> usize {
        match self {
            AnyBank::List(b) => b.size(),
            AnyBank::Generated(b) => b.size(),
        }
    }

    fn show(&self) -> Self {
        match self {
            AnyBank::List(b) => AnyBank::List(b.show()),
            AnyBank::Generated(b) => AnyBank::Generated(b.show()),
        }
    }

    fn next(&self, correct: bool) -> Self {
        match self {
            AnyBank::List(b) => AnyBank::List(b.next(correct)),
            AnyBank::Generated(b) => AnyBank::Generated(b.next(correct)),
        }
    }
}
