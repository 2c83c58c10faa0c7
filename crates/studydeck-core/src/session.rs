//! Study session driver.
//!
//! Runs the ask / reveal / judge cycle over a [`QuestionBank`] until every
//! question has been answered correctly, counting attempts along the way.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::bank::{QuestionBank, QuestionBankState};
use crate::error::StudyError;

/// Shown under each question while waiting for the learner.
pub const REVEAL_PROMPT: &str = "Press Enter to see the answer.";

/// Shown under each answer to ask for a self-assessment.
pub const JUDGE_PROMPT: &str = "Did you get it right?";

/// Outcome of studying one bank to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyDeckResult {
    /// Questions in the bank when the session started.
    pub num_questions: usize,
    /// Judgments made, including repeats of missed questions.
    pub num_attempts: usize,
}

/// How the session talks to the learner.
pub trait StudyConsole {
    /// Show a question and wait until the learner wants the answer.
    fn present_question(&mut self, question: &str) -> Result<()>;

    /// Show the answer and return the learner's free-text verdict.
    fn judge_answer(&mut self, answer: &str) -> Result<String>;
}

/// Line-oriented console over any reader and writer.
pub struct TextConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Release the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_reply(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(StudyError::InputClosed.into());
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> StudyConsole for TextConsole<R, W> {
    fn present_question(&mut self, question: &str) -> Result<()> {
        writeln!(self.output, "Question: {question}")?;
        writeln!(self.output, "{REVEAL_PROMPT}")?;
        self.output.flush()?;
        self.read_reply()?;
        Ok(())
    }

    fn judge_answer(&mut self, answer: &str) -> Result<String> {
        writeln!(self.output, "Answer: {answer}")?;
        writeln!(self.output, "{JUDGE_PROMPT}")?;
        self.output.flush()?;
        self.read_reply()
    }
}

/// Study `bank` until it completes.
///
/// Each learner verdict is turned into a boolean by `classify` and fed to
/// [`QuestionBank::next`]. Fails only if the console does.
pub fn study_session<B, C, F>(bank: B, console: &mut C, classify: F) -> Result<StudyDeckResult>
where
    B: QuestionBank,
    C: StudyConsole + ?Sized,
    F: Fn(&str) -> bool,
{
    let num_questions = bank.size();
    let mut bank = bank;
    let mut num_attempts = 0;

    while bank.state() != QuestionBankState::Completed {
        let question = bank.text().map(Cow::into_owned).unwrap_or_default();
        console.present_question(&question)?;

        bank = bank.show();
        let answer = bank.text().map(Cow::into_owned).unwrap_or_default();
        let verdict = console.judge_answer(&answer)?;

        let correct = classify(&verdict);
        tracing::debug!("{:?} judged {:?} -> correct={}", question, verdict, correct);

        bank = bank.next(correct);
        num_attempts += 1;
    }

    tracing::info!(
        "session complete: {} questions, {} attempts",
        num_questions,
        num_attempts
    );

    Ok(StudyDeckResult {
        num_questions,
        num_attempts,
    })
}
