//! Core library for turning a number embedded in a line of text into English words.
//!
//! This crate provides:
//! - Number extraction from free-form text (exactly one free-standing number per line)
//! - Base-1000 grouping and per-group word rendering
//! - Sentence assembly with "and" / comma separators and scale words
//! - Line-oriented batch helpers and configuration

pub mod batch;
pub mod error;
pub mod models;
pub mod words;

pub use error::{ExtractionError, NumWordsError, Result};
pub use models::config::{NumWordsConfig, OutputFormat};
pub use models::conversion::Conversion;
pub use words::{
    convert, try_convert, to_words, FieldExtractor, GroupSequence, NumberExtractor, NumericToken,
    ValidatedNumber, INVALID_NUMBER,
};
