//! Structured values that rules validate: split dates, split times and
//! uploaded file descriptors.

pub mod day;
pub mod file;

pub use day::{Hms, HmsPart, REFERENCE_YEAR, Ymd, YmdPart};
pub use file::{ByteSize, FileMeta, total_size};
