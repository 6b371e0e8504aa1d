//! Core library for Changemoji.
//!
//! This crate wires a classifier and a renderer into a [`Pipeline`] and
//! defines the two seams the surrounding shell plugs into: a
//! [`CommitSource`] that hands over the commits of one comparison range and
//! a [`ChangelogSink`] that receives the rendered text.

mod error;
mod pipeline;
mod registry;
mod sink;
mod source;

pub use error::{CoreError, CoreResult};
pub use pipeline::{Pipeline, render_messages};
pub use registry::{category_table, classifier_by_name, renderer_from_config};
pub use sink::{ChangelogSink, FileSink};
pub use source::{CommitSource, GitRange};
