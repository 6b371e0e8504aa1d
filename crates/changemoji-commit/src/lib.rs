//! Commit types for Changemoji.
//!
//! This crate provides the commit types shared by every other crate:
//! - [`RawCommit`]: A commit message as handed over by the surrounding shell
//! - [`ClassifiedCommit`]: A commit after classification
//! - [`Footer`]: A `Token: value` trailer from the end of a message

mod classified;
mod raw;

pub use classified::{ClassifiedCommit, ClassifiedCommitBuilder, Footer};
pub use raw::RawCommit;
