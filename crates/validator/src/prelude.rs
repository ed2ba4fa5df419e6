//! Prelude module for convenient imports.
//!
//! Provides a single `use sinter_validator::prelude::*;` import that brings
//! in the rule type, every built-in rule, the combinators, and the types
//! needed to evaluate them.
//!
//! Primitive validators are not included; their names match the rules.
//! Reach them through [`validators`](crate::validators).
//!
//! # Examples
//!
//! ```
//! use sinter_validator::prelude::*;
//!
//! let period: Rule<Option<String>> = required().and(month());
//! assert_eq!(period.passes(&Some("2024-05".into())), Some(true));
//! assert_eq!(period.passes(&None), Some(false));
//! ```

// ============================================================================
// FOUNDATION: Languages, messages, errors, results
// ============================================================================

pub use crate::foundation::{
    AsInput, ConditionError, ConfigError, Evaluation, Lang, Message, Outcome, Presence, Resolve,
    Translations, ValidationError, ValidationErrors, Verdict,
};

// ============================================================================
// RULES: The rule type, factory, and built-in rules
// ============================================================================

pub use crate::rule::{Rule, RuleSpec, create_rule};

pub use crate::rules::{
    checked, decimal, email, file_extension, hms, max_length, max_total_file_size, max_value,
    min_length, min_value, month, required, required_hms, required_if, required_ymd, rule, url,
    ymd,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{and, not, optional, or, with_message};

// ============================================================================
// SUPPORT: Conditions, configuration, structured values
// ============================================================================

pub use crate::condition::{Condition, ConditionState};
pub use crate::config::ValidatorConfig;
pub use crate::set::RuleSet;
pub use crate::support::{ByteSize, FileMeta, Hms, HmsPart, Ymd, YmdPart};
