//! studydeck-core — Question banks, answer classification, and study sessions.
//!
//! This crate defines the question model, the immutable question bank state
//! machine, the k-nearest-neighbor classifier used to interpret free-text
//! answers, and the session driver that ties them together.

pub mod bank;
pub mod config;
pub mod distance;
pub mod error;
pub mod generated;
pub mod knn;
pub mod menu;
pub mod model;
pub mod parser;
pub mod report;
pub mod sentiment;
pub mod session;

pub use bank::{AnyBank, ListBank, QuestionBank, QuestionBankState};
pub use error::StudyError;
pub use generated::{GeneratedBank, Sequence};
pub use model::TaggedQuestion;
