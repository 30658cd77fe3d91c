//! Namespaced element identifiers backed by string interning.
//!
//! An [`Id`] is a dot-delimited path such as `cp.billing.invoicing.api`. The
//! number of segments is the element's structural depth, and ancestors are
//! recovered by truncating trailing segments.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Separator between identifier segments.
pub const SEPARATOR: char = '.';

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// Access goes through a `Mutex`; the lock is held only for the duration of a
/// single intern or resolve call.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        // Interning never panics while holding the lock, so a poisoned
        // mutex still guards a consistent interner.
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Interned, dot-delimited element identifier.
///
/// # Examples
///
/// ```
/// use cartograph_core::identifier::Id;
///
/// let id = Id::new("cp.billing.invoicing.api");
/// assert_eq!(id.depth(), 4);
/// assert_eq!(id.prefix(2), Some(Id::new("cp.billing")));
/// assert_eq!(id.parent(), Some(Id::new("cp.billing.invoicing")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from its textual form.
    ///
    /// # Arguments
    ///
    /// * `name` - The full dot-delimited identifier.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Returns the identifier text.
    pub fn as_string(&self) -> String {
        self.with_str(str::to_owned)
    }

    /// Returns the identifier split on [`SEPARATOR`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cartograph_core::identifier::Id;
    ///
    /// assert_eq!(Id::new("cp.billing").segments(), vec!["cp", "billing"]);
    /// ```
    pub fn segments(&self) -> Vec<String> {
        self.with_str(|s| s.split(SEPARATOR).map(str::to_owned).collect())
    }

    /// Returns the number of segments in the identifier.
    pub fn depth(&self) -> usize {
        self.with_str(|s| s.split(SEPARATOR).count())
    }

    /// Returns the first segment, the namespace root.
    pub fn first_segment(&self) -> String {
        self.with_str(|s| s.split(SEPARATOR).next().unwrap_or_default().to_owned())
    }

    /// Returns the identifier made of the first `len` segments.
    ///
    /// Returns `None` when `len` is zero or greater than [`Id::depth`].
    pub fn prefix(&self, len: usize) -> Option<Id> {
        if len == 0 {
            return None;
        }

        let truncated = self.with_str(|s| {
            let mut end = 0;
            for (count, segment) in s.split(SEPARATOR).enumerate() {
                end += segment.len() + usize::from(count > 0);
                if count + 1 == len {
                    return Some(s[..end].to_owned());
                }
            }
            None
        })?;

        Some(Id::new(&truncated))
    }

    /// Returns the identifier with its last segment removed.
    ///
    /// Single-segment identifiers have no parent.
    pub fn parent(&self) -> Option<Id> {
        let truncated =
            self.with_str(|s| s.rsplit_once(SEPARATOR).map(|(head, _)| head.to_owned()))?;
        Some(Id::new(&truncated))
    }

    fn with_str<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        let interner = interner();
        f(interner.resolve(self.0).unwrap_or_default())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.as_string();
        f.write_str(&text)
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "cp.billing"`
    fn eq(&self, other: &str) -> bool {
        self.with_str(|s| s == other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
