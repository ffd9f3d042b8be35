use crate::builder::BackedEnumBuilder;
use crate::error::EnumError;
use crate::value::{BackingValue, Primitive, ValueKind};
use fxhash::FxHashMap;
use std::borrow::Borrow;
use tracing::{debug, trace};

/// Name to backing value mapping held by a [`BackedEnum`].
pub type Structure<V> = FxHashMap<String, V>;

/// An immutable, closed set of named enumerants bound to backing values of one type.
///
/// Every operation is a read. Collections handed out ([`structure`](Self::structure),
/// [`values`](Self::values), [`names`](Self::names)) are owned copies, so callers can never
/// change what the enumeration accepts.
///
/// Backing values need not be unique: two names may share a value, in which case the
/// value is listed once per name and still validates.
///
/// # Examples
///
/// ```rust
/// use backed_enum::{BackedEnum, EnumError};
///
/// # fn main() -> Result<(), EnumError> {
/// let flags = BackedEnum::new([("FOO", 1u32), ("BAR", 2), ("BAZ", 8)]);
///
/// assert_eq!(flags.structure()["FOO"], 1);
/// assert!(flags.validate(&2));
/// assert!(!flags.validate(&5));
///
/// let value = flags.parse(&8)?;
/// assert_eq!(*value, 8);
/// assert!(flags.parse(&9).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackedEnum<V: BackingValue> {
    structure: Structure<V>,
}

impl<V: BackingValue> BackedEnum<V> {
    /// Builds an enumeration from `(name, value)` pairs.
    ///
    /// Nothing is validated: duplicate values are legal and an empty input yields an
    /// enumeration that accepts nothing. If a name repeats, its last value wins. Use
    /// [`BackedEnum::builder`] to reject malformed or repeated names instead.
    pub fn new<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let structure: Structure<V> =
            entries.into_iter().map(|(name, value)| (name.into(), value)).collect();

        trace!(entries = structure.len(), kind = %V::KIND, "Constructed backed enum");

        Self { structure }
    }

    /// Starts a checked construction, see [`BackedEnumBuilder`].
    #[must_use = "The builder does nothing until `build` is called"]
    pub fn builder() -> BackedEnumBuilder<V> {
        BackedEnumBuilder::new()
    }

    /// Returns an independent copy of the name to value mapping.
    #[must_use]
    pub fn structure(&self) -> Structure<V> {
        self.structure.clone()
    }

    /// Returns every backing value, once per enumerant, in no particular order.
    #[must_use]
    pub fn values(&self) -> Vec<V> {
        self.structure.values().cloned().collect()
    }

    /// Returns `true` when `candidate` equals at least one backing value.
    ///
    /// Accepts any borrowed form of `V`, so a `BackedEnum<String>` validates a `&str`.
    #[must_use]
    pub fn validate<Q>(&self, candidate: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.find(candidate).is_some()
    }

    /// Checks `candidate` for membership, returning the matching backing value.
    ///
    /// Succeeds exactly when [`validate`](Self::validate) returns `true`.
    ///
    /// # Errors
    ///
    /// Returns [`EnumError::InvalidValue`] carrying the candidate when no enumerant has
    /// that backing value.
    pub fn parse<Q>(&self, candidate: &Q) -> Result<&V, EnumError>
    where
        V: Borrow<Q>,
        Q: Primitive + PartialEq + ?Sized,
    {
        self.find(candidate).ok_or_else(|| {
            let value = candidate.to_raw();
            debug!(value = %value, kind = %V::KIND, "Rejected value outside enumeration");
            EnumError::InvalidValue { value, context: None }
        })
    }

    /// Looks up the backing value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&V> {
        self.structure.get(name)
    }

    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.structure.contains_key(name)
    }

    /// Returns a copy of every symbolic name, in no particular order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.structure.keys().cloned().collect()
    }

    /// Returns every name bound to `candidate`; several when values are shared.
    #[must_use]
    pub fn names_of<Q>(&self, candidate: &Q) -> Vec<&str>
    where
        V: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.structure
            .iter()
            .filter(|(_, value)| <V as Borrow<Q>>::borrow(value) == candidate)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Iterates over `(name, value)` pairs without copying.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &V)> {
        self.structure.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.structure.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.structure.is_empty()
    }

    /// Category shared by every backing value of this enumeration.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        V::KIND
    }

    fn find<Q>(&self, candidate: &Q) -> Option<&V>
    where
        V: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.structure.values().find(|value| <V as Borrow<Q>>::borrow(value) == candidate)
    }
}

impl<V: BackingValue> Default for BackedEnum<V> {
    fn default() -> Self {
        Self::new(std::iter::empty::<(String, V)>())
    }
}

impl<V: BackingValue, K: Into<String>> FromIterator<(K, V)> for BackedEnum<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<V: BackingValue> From<Structure<V>> for BackedEnum<V> {
    fn from(structure: Structure<V>) -> Self {
        Self::new(structure)
    }
}
