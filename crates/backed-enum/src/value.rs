use std::fmt;

// --- Categories ---

/// The category every backing value of an enumeration belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    Integer,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Integer => f.write_str("integer"),
        }
    }
}

/// A backing value detached from its concrete Rust type.
///
/// Integers widen to `i128`, which holds every supported integer primitive losslessly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawValue {
    Text(String),
    Integer(i128),
}

impl RawValue {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Integer(_) => ValueKind::Integer,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Integer(int) => write!(f, "{int}"),
        }
    }
}

// --- Sealed primitives ---

mod private {
    pub trait Sealed {}
}

/// A primitive that can back an enumerant: text or an integer, nothing else.
///
/// The trait is sealed; it is implemented for `str`, `String`, `&str`, and the integer
/// primitives up to 64 bits (plus `isize`/`usize`).
pub trait Primitive: private::Sealed {
    /// Category shared by every value of this type.
    const KIND: ValueKind;

    /// Copies the value into its category-erased form.
    fn to_raw(&self) -> RawValue;
}

/// Bound on the value type `V` of a [`BackedEnum`](crate::BackedEnum).
///
/// Blanket-implemented for every owned [`Primitive`] that can be shared across threads.
pub trait BackingValue: Primitive + Clone + Eq + fmt::Debug + Send + Sync + 'static {}

impl<T> BackingValue for T where T: Primitive + Clone + Eq + fmt::Debug + Send + Sync + 'static {}

impl private::Sealed for str {}
impl Primitive for str {
    const KIND: ValueKind = ValueKind::Text;

    fn to_raw(&self) -> RawValue {
        RawValue::Text(self.to_owned())
    }
}

impl private::Sealed for String {}
impl Primitive for String {
    const KIND: ValueKind = ValueKind::Text;

    fn to_raw(&self) -> RawValue {
        RawValue::Text(self.clone())
    }
}

impl private::Sealed for &str {}
impl Primitive for &str {
    const KIND: ValueKind = ValueKind::Text;

    fn to_raw(&self) -> RawValue {
        RawValue::Text((*self).to_owned())
    }
}

macro_rules! impl_integer_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}
            impl Primitive for $ty {
                const KIND: ValueKind = ValueKind::Integer;

                fn to_raw(&self) -> RawValue {
                    RawValue::Integer(i128::from(*self))
                }
            }
        )*
    };
}

impl_integer_primitive!(i8, i16, i32, i64, u8, u16, u32, u64);

impl private::Sealed for isize {}
impl Primitive for isize {
    const KIND: ValueKind = ValueKind::Integer;

    fn to_raw(&self) -> RawValue {
        RawValue::Integer(*self as i128)
    }
}

impl private::Sealed for usize {}
impl Primitive for usize {
    const KIND: ValueKind = ValueKind::Integer;

    fn to_raw(&self) -> RawValue {
        RawValue::Integer(*self as i128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_follow_the_type() {
        assert_eq!(<&str as Primitive>::KIND, ValueKind::Text);
        assert_eq!(<String as Primitive>::KIND, ValueKind::Text);
        assert_eq!(<u8 as Primitive>::KIND, ValueKind::Integer);
        assert_eq!(<isize as Primitive>::KIND, ValueKind::Integer);
    }

    #[test]
    fn test_raw_values_widen_integers() {
        assert_eq!(u64::MAX.to_raw(), RawValue::Integer(i128::from(u64::MAX)));
        assert_eq!((-7i8).to_raw(), RawValue::Integer(-7));
        assert_eq!(usize::MAX.to_raw().kind(), ValueKind::Integer);
    }

    #[test]
    fn test_raw_value_display_quotes_text() {
        assert_eq!("idle".to_raw().to_string(), "\"idle\"");
        assert_eq!(9u8.to_raw().to_string(), "9");
        assert_eq!(ValueKind::Text.to_string(), "text");
    }
}
