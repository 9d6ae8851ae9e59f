use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use vc_reflect::Reflect;

use crate::ResolveError;

// -----------------------------------------------------------------------------
// Normalization

/// Rewrites bracket access into dotted access.
///
/// Every `[` becomes `.` and every `]` is removed, so `a[0].b` and
/// `a.0.b` are the same path. Borrows when there is nothing to rewrite.
///
/// ```
/// use vc_resolve::normalize;
///
/// assert_eq!(normalize("user.parents[0].name"), "user.parents.0.name");
/// assert_eq!(normalize("map[key]"), "map.key");
/// assert!(matches!(normalize("a.b"), std::borrow::Cow::Borrowed(_)));
/// ```
pub fn normalize(path: &str) -> Cow<'_, str> {
    if !path.contains(['[', ']']) {
        return Cow::Borrowed(path);
    }

    let mut out = String::with_capacity(path.len());
    for ch in path.chars() {
        match ch {
            '[' => out.push('.'),
            ']' => {}
            ch => out.push(ch),
        }
    }
    Cow::Owned(out)
}

// -----------------------------------------------------------------------------
// ResolvePath

/// Byte range of a token inside the normalized path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Span {
    start: usize,
    end: usize,
}

impl Span {
    #[inline]
    const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// A parsed path expression.
///
/// Holds the normalized text and the position of each token, so tokens
/// and the unconsumed remainder after any token are slices of one string.
///
/// Tokens carry no kind: whether a token is a field, a key or an index is
/// decided by the value it is applied to. Only the first token is
/// validated. Empty tokens after it are kept: they only match an empty
/// map key, and fail on every other shape.
///
/// ```
/// use vc_resolve::ResolvePath;
///
/// let path: ResolvePath = "user.parents[0].name".parse().unwrap();
///
/// assert_eq!(path.as_str(), "user.parents.0.name");
/// assert_eq!(path.root(), "user");
/// assert_eq!(path.len(), 4);
/// assert_eq!(path.tokens().collect::<Vec<_>>(), ["user", "parents", "0", "name"]);
/// assert_eq!(path.remaining_after(1), Some("0.name"));
/// assert_eq!(path.remaining_after(3), None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ResolvePath {
    normalized: Box<str>,
    spans: Box<[Span]>,
}

impl ResolvePath {
    /// Normalizes and tokenizes `path`.
    ///
    /// # Errors
    ///
    /// [`ResolveError::EmptyExpression`] if the first token is empty,
    /// which includes `""` and `"."`.
    pub fn parse(path: &str) -> Result<Self, ResolveError> {
        let normalized: Box<str> = normalize(path).into();

        let mut spans = Vec::with_capacity(normalized.bytes().filter(|b| *b == b'.').count() + 1);
        let mut start = 0;
        for (index, byte) in normalized.bytes().enumerate() {
            if byte == b'.' {
                spans.push(Span { start, end: index });
                start = index + 1;
            }
        }
        spans.push(Span {
            start,
            end: normalized.len(),
        });

        match spans.first() {
            Some(root) if !root.is_empty() => Ok(Self {
                normalized,
                spans: spans.into_boxed_slice(),
            }),
            _ => Err(ResolveError::EmptyExpression),
        }
    }

    /// Returns the normalized path text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Returns the number of tokens, at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns the first token, never empty.
    #[inline]
    pub fn root(&self) -> &str {
        self.slice(self.spans[0])
    }

    /// Returns the token at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.spans.get(index).map(|span| self.slice(*span))
    }

    /// Returns an iterator over the tokens.
    #[inline]
    pub fn tokens(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.spans.iter().map(|span| self.slice(*span))
    }

    /// Returns the tokens after `index`, joined by `.`.
    ///
    /// `None` when `index` is the last token or past the end.
    #[inline]
    pub fn remaining_after(&self, index: usize) -> Option<&str> {
        let next = self.spans.get(index.checked_add(1)?)?;
        Some(&self.normalized[next.start..])
    }

    /// Resolves this path in `value` with direct resolution semantics.
    ///
    /// See [`direct_resolve`](crate::direct_resolve).
    #[inline]
    pub fn resolve_in<'r>(&self, value: &'r dyn Reflect) -> Result<&'r dyn Reflect, ResolveError> {
        crate::direct::resolve_parsed(value, self)
    }

    #[inline(always)]
    fn slice(&self, span: Span) -> &str {
        &self.normalized[span.start..span.end]
    }
}

impl FromStr for ResolvePath {
    type Err = ResolveError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ResolvePath {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl fmt::Debug for ResolvePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens()).finish()
    }
}
