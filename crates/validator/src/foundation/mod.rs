//! Core types shared by every rule
//!
//! - **Language**: [`Lang`], [`Translations`]
//! - **Messages**: [`Message`], [`Resolve`], [`Template`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`ConfigError`],
//!   [`ConditionError`]
//! - **Field values**: [`Presence`], [`AsInput`]
//! - **Results**: [`Verdict`], [`Evaluation`], [`Outcome`]
//!
//! # Examples
//!
//! ```
//! use sinter_validator::foundation::{Lang, Message, Translations};
//!
//! let message = Message::catalog("checked", Translations {
//!     en: "You must check the box.",
//!     ja: "チェックを入れてください。",
//!     vi: "Bạn phải đánh dấu ô này.",
//! });
//!
//! assert_eq!(message.to_error(Lang::Ja).message, "チェックを入れてください。");
//! ```

pub mod error;
pub mod input;
pub mod lang;
pub mod message;
pub mod presence;
pub mod verdict;

pub use error::{ConditionError, ConfigError, ValidationError, ValidationErrors};
pub use input::AsInput;
pub use lang::{Lang, SUPPORTED_LANGS, Translations};
pub use message::{Message, Resolve, ResolveFn, Template};
pub use presence::Presence;
pub use verdict::{Evaluation, Outcome, Pending, Verdict};

/// Common imports for working with the foundation types.
pub mod prelude {
    pub use super::{
        AsInput, ConditionError, ConfigError, Evaluation, Lang, Message, Outcome, Presence, Resolve,
        Translations, ValidationError, ValidationErrors, Verdict,
    };
}
