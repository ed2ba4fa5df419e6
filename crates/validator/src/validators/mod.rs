//! Primitive validators
//!
//! Plain predicates, one semantic check each. They know nothing about
//! messages, languages, or optionality; the constructors in
//! [`rules`](crate::rules) wrap them into [`Rule`](crate::rule::Rule)s.
//!
//! Every predicate is total over its input type and never panics. All of
//! them answer synchronously except [`required_if`], which returns a
//! [`Verdict`](crate::foundation::Verdict) so that a deferred condition can
//! stay deferred.
//!
//! # Examples
//!
//! ```
//! use sinter_validator::validators::{decimal, max_length, min_length, required};
//!
//! assert!(min_length("hello", 5));
//! assert!(!max_length("hello", 4));
//! assert!(decimal("-3.5"));
//! assert!(!required(""));
//! ```

// String validators
pub mod content;
pub mod decimal;
pub mod length;

// Numeric validators
pub mod range;

// Date and time validators
pub mod hms;
pub mod ymd;

// File validators
pub mod file;

// Logical validators
pub mod boolean;
pub mod required;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use boolean::checked;
pub use content::{email, month, url};
pub use decimal::{decimal, hyphen};
pub use file::{file_extension, max_total_file_size};
pub use hms::hms;
pub use length::{max_length, measure, min_length};
pub use range::{max_value, min_value};
pub use required::{required, required_hms, required_if, required_ymd};
pub use ymd::ymd;
