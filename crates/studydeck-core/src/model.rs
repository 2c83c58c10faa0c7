//! Core data model types for studydeck.
//!
//! A deck is an ordered list of [`TaggedQuestion`]s. The line format is
//! `question|answer|tag1,tag2`; there is no escaping, so a question, answer,
//! or tag containing `|` or `,` will not survive a round trip.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StudyError;

/// A question-answer pair with optional tags.
///
/// Question and answer are never empty and no tag is the empty string;
/// [`TaggedQuestion::new`] and deserialization both enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord")]
pub struct TaggedQuestion {
    question: String,
    answer: String,
    tags: Vec<String>,
}

/// Unchecked serde shape of a [`TaggedQuestion`].
#[derive(Deserialize)]
struct QuestionRecord {
    question: String,
    answer: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl TryFrom<QuestionRecord> for TaggedQuestion {
    type Error = StudyError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Self::new(record.question, record.answer, record.tags)
    }
}

impl TaggedQuestion {
    /// Build a question. Empty tags are dropped; an empty question or answer
    /// is [`StudyError::MissingText`].
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, StudyError> {
        let question = question.into();
        let answer = answer.into();
        if question.is_empty() {
            return Err(StudyError::MissingText { field: "question" });
        }
        if answer.is_empty() {
            return Err(StudyError::MissingText { field: "answer" });
        }

        Ok(Self {
            question,
            answer,
            tags: tags
                .into_iter()
                .map(Into::into)
                .filter(|t: &String| !t.is_empty())
                .collect(),
        })
    }

    /// The prompt shown to the learner.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The expected answer.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Tags in file order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns `true` if the question carries exactly this tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Parse one deck line, reporting errors against the given 1-based line.
    ///
    /// Empty entries in the tag list (`a,,b`, or a blank tag field) are
    /// skipped, the same as in [`TaggedQuestion::new`].
    pub fn parse_line(s: &str, line: usize) -> Result<Self, StudyError> {
        let fields: Vec<&str> = s.split('|').collect();
        let &[question, answer, tags] = fields.as_slice() else {
            return Err(StudyError::MalformedLine {
                line,
                fields: fields.len(),
            });
        };

        Self::new(question, answer, tags.split(',')).map_err(|e| match e {
            StudyError::MissingText { field } => StudyError::EmptyField { line, field },
            other => other,
        })
    }
}

impl fmt::Display for TaggedQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.question, self.answer, self.tags.join(","))
    }
}

impl FromStr for TaggedQuestion {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_line(s, 1)
    }
}

/// Keep only the questions carrying `tag`, preserving order.
pub fn filter_by_tag(questions: &[TaggedQuestion], tag: &str) -> Vec<TaggedQuestion> {
    questions.iter().filter(|q| q.has_tag(tag)).cloned().collect()
}
