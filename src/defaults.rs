//! A ready-made [`DefaultValueProvider`] for common type names.
//!
//! [`TypeDefault`] is the catalogue of recognized type names. The provider
//! answers `T::default()` for any name in the catalogue and `None` otherwise.
//!
//! # Examples
//!
//! ```
//! use throwless::defaults::{BasicDefaultValueProvider, TypeDefault};
//! use throwless::traits::DefaultValueProvider;
//!
//! assert_eq!(TypeDefault::from_type_name("alloc::vec::Vec<u8>"), Some(TypeDefault::Array));
//!
//! let provider = BasicDefaultValueProvider;
//! let value: Option<String> = provider.default_value("&str");
//! assert_eq!(value, Some(String::new()));
//!
//! let unknown: Option<String> = provider.default_value("my_crate::Config");
//! assert_eq!(unknown, None);
//! ```

use crate::traits::DefaultValueProvider;

/// Kinds of type names that have a canonical empty or zero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeDefault {
    String,
    Int,
    Float,
    Bool,
    Array,
    Unit,
}

impl TypeDefault {
    /// Classifies a type name.
    ///
    /// Accepts both short names (`"string"`, `"int"`, `"array"`, ...) and the fully
    /// qualified names produced by [`std::any::type_name`], including references
    /// and `Vec`/slice/array spellings.
    pub fn from_type_name(name: &str) -> Option<Self> {
        let name = name.trim().trim_start_matches('&').trim_start_matches("mut ");

        let kind = match name {
            "string" | "str" | "String" | "char" => Self::String,
            "alloc::string::String" | "std::string::String" => Self::String,
            "int" | "integer" => Self::Int,
            "i8" | "i16" | "i32" | "i64" | "i128" | "isize" => Self::Int,
            "u8" | "u16" | "u32" | "u64" | "u128" | "usize" => Self::Int,
            "float" | "double" | "f32" | "f64" => Self::Float,
            "bool" | "boolean" => Self::Bool,
            "array" | "iterable" => Self::Array,
            "()" | "unit" => Self::Unit,
            _ if Self::is_sequence(name) => Self::Array,
            _ => return None,
        };
        Some(kind)
    }

    fn is_sequence(name: &str) -> bool {
        name.starts_with('[')
            || name.starts_with("alloc::vec::Vec<")
            || name.starts_with("std::vec::Vec<")
            || name.starts_with("Vec<")
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Array => "array",
            Self::Unit => "unit",
        }
    }
}

/// Answers `T::default()` for every name [`TypeDefault`] recognizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicDefaultValueProvider;

/// The catalogue only decides whether a name is recognized. The value is always
/// `T::default()`, whatever [`TypeDefault`] the name maps to: a `Vec<u8>` success
/// type keyed by a `String` error still yields an empty `Vec`.
impl<T: Default> DefaultValueProvider<T> for BasicDefaultValueProvider {
    #[inline]
    fn default_value(&self, type_name: &str) -> Option<T> {
        TypeDefault::from_type_name(type_name).map(|_| T::default())
    }
}
