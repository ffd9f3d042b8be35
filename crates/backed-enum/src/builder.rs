use crate::enumeration::BackedEnum;
use crate::error::{EnumError, EnumErrorExt};
use crate::value::BackingValue;
use fxhash::FxHashSet;
use std::borrow::Cow;
use tracing::debug;

/// A builder for checked construction of a [`BackedEnum`].
///
/// Unlike [`BackedEnum::new`], [`build`](Self::build) rejects names that are not
/// identifiers and names supplied more than once. Backing values are never checked:
/// sharing a value between names stays legal.
#[derive(Debug, Clone)]
pub struct BackedEnumBuilder<V: BackingValue> {
    entries: Vec<(String, V)>,
    label: Option<Cow<'static, str>>,
}

impl<V: BackingValue> Default for BackedEnumBuilder<V> {
    fn default() -> Self {
        Self { entries: Vec::new(), label: None }
    }
}

impl<V: BackingValue> BackedEnumBuilder<V> {
    #[must_use = "The builder does nothing until `build` is called"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the enumeration being built; the label becomes the context of build errors.
    #[must_use = "The builder does nothing until `build` is called"]
    pub fn label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Adds one enumerant.
    #[must_use = "The builder does nothing until `build` is called"]
    pub fn entry(mut self, name: impl Into<String>, value: V) -> Self {
        self.entries.push((name.into(), value));
        self
    }

    /// Adds every `(name, value)` pair from `entries`.
    #[must_use = "The builder does nothing until `build` is called"]
    pub fn entries<K, I>(mut self, entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.entries.extend(entries.into_iter().map(|(name, value)| (name.into(), value)));
        self
    }

    /// Validates the collected names and freezes them into a [`BackedEnum`].
    ///
    /// # Errors
    ///
    /// Returns [`EnumError::InvalidName`] for an empty or non-identifier name and
    /// [`EnumError::DuplicateName`] for a name given twice. Errors carry the builder
    /// label as context when one was set.
    pub fn build(self) -> Result<BackedEnum<V>, EnumError> {
        let checked = check_names(&self.entries);
        match self.label {
            Some(label) => checked.context(label)?,
            None => checked?,
        }

        Ok(BackedEnum::new(self.entries))
    }
}

fn check_names<V>(entries: &[(String, V)]) -> Result<(), EnumError> {
    let mut seen = FxHashSet::default();

    for (name, _) in entries {
        if !is_identifier(name) {
            debug!(name = %name, "Rejected enumerant name");
            return Err(EnumError::InvalidName { name: name.clone(), context: None });
        }
        if !seen.insert(name.as_str()) {
            debug!(name = %name, "Rejected repeated enumerant name");
            return Err(EnumError::DuplicateName { name: name.clone(), context: None });
        }
    }

    Ok(())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
