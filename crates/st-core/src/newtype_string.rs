//! Macro for defining validated string newtypes.
//!
//! Versions, table names and column names all share the same invariant
//! (non-empty string, optionally a stricter check) and the same set of trait
//! impls. This macro generates them from a single invocation.

/// Define a strongly-typed, non-empty string newtype.
///
/// An optional `valid = <fn(&str) -> bool>, invalid = "<message>";` clause
/// replaces the default non-empty check and its error message.
///
/// Generates:
/// - The struct with `Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize`
/// - Custom `Deserialize` (rejects invalid strings)
/// - `new()` (panics when invalid), `try_new()` (returns Option), `as_str()`, `into_inner()`
/// - `Display`, `AsRef<str>`, `Deref<Target=str>`, `Borrow<str>`
/// - `TryFrom<String>`, `TryFrom<&str>`, `From<Name> for String`
/// - `PartialEq<str>`, `PartialEq<&str>`
macro_rules! define_newtype_string {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
        valid = $check:expr, invalid = $invalid:expr;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
        #[serde(transparent)]
        $vis struct $Name(String);

        impl<'de> serde::Deserialize<'de> for $Name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $Name::try_new(s).ok_or_else(|| serde::de::Error::custom($invalid))
            }
        }

        impl $Name {
            /// Create a new instance, panicking if the value is invalid.
            ///
            /// Prefer [`try_new`](Self::try_new) when handling untrusted input.
            pub fn new(value: impl Into<String>) -> Self {
                let s = value.into();
                assert!(Self::is_valid(&s), "{}", $invalid);
                Self(s)
            }

            /// Try to create a new instance, returning `None` if the value is invalid.
            pub fn try_new(value: impl Into<String>) -> Option<Self> {
                let s = value.into();
                if Self::is_valid(&s) { Some(Self(s)) } else { None }
            }

            /// Whether `value` satisfies this type's invariant
            pub fn is_valid(value: &str) -> bool {
                let check: fn(&str) -> bool = $check;
                check(value)
            }

            /// Return the underlying value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the inner `String`.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $Name {
            fn as_ref(&self) -> &str { &self.0 }
        }

        impl std::ops::Deref for $Name {
            type Target = str;
            fn deref(&self) -> &str { &self.0 }
        }

        impl std::borrow::Borrow<str> for $Name {
            fn borrow(&self) -> &str { &self.0 }
        }

        impl TryFrom<String> for $Name {
            type Error = &'static str;
            fn try_from(s: String) -> Result<Self, Self::Error> {
                $Name::try_new(s).ok_or($invalid)
            }
        }

        impl TryFrom<&str> for $Name {
            type Error = &'static str;
            fn try_from(s: &str) -> Result<Self, Self::Error> {
                $Name::try_new(s).ok_or($invalid)
            }
        }

        impl From<$Name> for String {
            fn from(value: $Name) -> String { value.0 }
        }

        impl PartialEq<str> for $Name {
            fn eq(&self, other: &str) -> bool { self.0 == other }
        }

        impl PartialEq<&str> for $Name {
            fn eq(&self, other: &&str) -> bool { self.0 == *other }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        define_newtype_string! {
            $(#[$meta])*
            $vis struct $Name;
            valid = |s: &str| !s.is_empty(), invalid = concat!(stringify!($Name), " must not be empty");
        }
    };
}

pub(crate) use define_newtype_string;
