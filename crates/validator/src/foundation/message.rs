//! Message resolvers
//!
//! A [`Message`] is what a rule says when it fails. It pairs a stable code
//! with a [`Resolve`] implementation and is only resolved after a failure,
//! for exactly one language.
//!
//! Resolvers come in three shapes, all behind the same trait:
//!
//! - a static table: `Translations<&'static str>`
//! - a parameterized table: [`Template`], one renderer per language applied
//!   to parameters captured when the rule was built
//! - a caller override: a plain string, identical for every language

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::foundation::{Lang, Translations, ValidationError};

// ============================================================================
// RESOLVE TRAIT
// ============================================================================

/// Produces a message for one language.
///
/// Implementations must be deterministic: the same language always yields
/// the same text.
pub trait Resolve: Send + Sync {
    /// Resolves the message for `lang`.
    fn resolve(&self, lang: Lang) -> Cow<'static, str>;
}

impl Resolve for Translations<&'static str> {
    #[inline]
    fn resolve(&self, lang: Lang) -> Cow<'static, str> {
        Cow::Borrowed(*self.get(lang))
    }
}

impl Resolve for Cow<'static, str> {
    fn resolve(&self, _lang: Lang) -> Cow<'static, str> {
        self.clone()
    }
}

impl Resolve for String {
    fn resolve(&self, _lang: Lang) -> Cow<'static, str> {
        Cow::Owned(self.clone())
    }
}

impl Resolve for &'static str {
    fn resolve(&self, _lang: Lang) -> Cow<'static, str> {
        Cow::Borrowed(self)
    }
}

/// A per-language renderer applied to construction-time parameters.
///
/// # Examples
///
/// ```
/// use sinter_validator::foundation::{Lang, Resolve, Template, Translations};
///
/// let catalog: Translations<fn(&usize) -> String> = Translations {
///     en: |n| format!("At most {n}."),
///     ja: |n| format!("最大{n}。"),
///     vi: |n| format!("Tối đa {n}."),
/// };
/// let template = Template::new(catalog, 20);
/// assert_eq!(template.resolve(Lang::En), "At most 20.");
/// ```
pub struct Template<P> {
    renderers: Translations<fn(&P) -> String>,
    params: P,
}

impl<P> Template<P> {
    /// Captures `params` for later rendering.
    pub const fn new(renderers: Translations<fn(&P) -> String>, params: P) -> Self {
        Self { renderers, params }
    }
}

impl<P: Send + Sync> Resolve for Template<P> {
    fn resolve(&self, lang: Lang) -> Cow<'static, str> {
        Cow::Owned((self.renderers.get(lang))(&self.params))
    }
}

impl<P: fmt::Debug> fmt::Debug for Template<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Adapts a closure into a resolver.
pub struct ResolveFn<F>(pub F);

impl<F> Resolve for ResolveFn<F>
where
    F: Fn(Lang) -> String + Send + Sync,
{
    fn resolve(&self, lang: Lang) -> Cow<'static, str> {
        Cow::Owned((self.0)(lang))
    }
}

// ============================================================================
// MESSAGE
// ============================================================================

type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

/// A rule's failure message: code, resolver, and parameters.
///
/// Cloning is cheap; the resolver is shared.
#[derive(Clone)]
pub struct Message {
    code: Cow<'static, str>,
    resolver: Arc<dyn Resolve>,
    params: Params,
}

impl Message {
    /// Creates a message from any resolver.
    pub fn new(code: impl Into<Cow<'static, str>>, resolver: impl Resolve + 'static) -> Self {
        Self {
            code: code.into(),
            resolver: Arc::new(resolver),
            params: SmallVec::new(),
        }
    }

    /// A message backed by a static catalog.
    pub fn catalog(code: &'static str, catalog: Translations<&'static str>) -> Self {
        Self::new(code, catalog)
    }

    /// A message rendered from captured parameters.
    pub fn template<P>(
        code: &'static str,
        renderers: Translations<fn(&P) -> String>,
        params: P,
    ) -> Self
    where
        P: Send + Sync + 'static,
    {
        Self::new(code, Template::new(renderers, params))
    }

    /// A fixed text used for every language.
    pub fn text(code: impl Into<Cow<'static, str>>, text: impl Into<Cow<'static, str>>) -> Self {
        Self::new(code, text.into())
    }

    /// Records a parameter that will be attached to the resulting error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Keeps this message's code and parameters but replaces its text.
    #[must_use]
    pub fn overridden_by(&self, text: Cow<'static, str>) -> Self {
        Self {
            code: self.code.clone(),
            resolver: Arc::new(text),
            params: self.params.clone(),
        }
    }

    /// Returns the message code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Resolves the text for `lang`.
    #[must_use]
    pub fn resolve(&self, lang: Lang) -> Cow<'static, str> {
        self.resolver.resolve(lang)
    }

    /// Resolves into a [`ValidationError`] for `lang`.
    #[must_use]
    pub fn to_error(&self, lang: Lang) -> ValidationError {
        ValidationError {
            code: self.code.clone(),
            message: self.resolve(lang),
            lang,
            field: None,
            params: self.params.to_vec(),
        }
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("code", &self.code)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================
