//! Command Lexicon
//!
//! This crate converts free-form operator text ("grab the red block",
//! "sort by color") into a small structured command vocabulary. It is
//! purely lexical: keyword sets and synonym tables, no model inference.
//! Classification is total: anything outside the vocabulary resolves to
//! a DECLINE command rather than an error.

mod classify;
mod command;
mod lexicon;

pub use classify::Classifier;
pub use command::{Action, Color, Command, Parameters, SortCriterion, Spatial};

/// Classify a single utterance with the default lexicon.
pub fn classify(text: &str) -> Command {
    Classifier::new().classify(text)
}
