//! Git access layer for Changemoji.
//!
//! This crate reads the commits of a comparison range out of a local
//! repository. Choosing which two refs to compare is the caller's job.

mod error;
mod repository;

pub use error::{GitError, GitResult};
pub use repository::Repository;
