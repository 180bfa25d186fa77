//! Folder scanning and duration aggregation.
//!
//! `scan` enumerates candidate files, `decode` turns one file into a
//! duration and `aggregate` folds a whole folder into a single total.

mod aggregate;
mod decode;
mod error;
mod scan;

pub use aggregate::{Aggregate, compute_total_duration};
pub use decode::{DurationDecoder, LoftyDecoder};
pub use error::{DecodeError, ScanError};
