//! Macro for implementing Display and FromStr for unit-variant enums
//!
//! Config values such as the storage backend are read from environment
//! variables and files as plain strings. This macro keeps the string form and
//! the parser in one place.
//!
//! # Example
//!
//! ```rust
//! use rolodex_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Theme {
//!     Light,
//!     Dark,
//! }
//!
//! impl_domain_enum_conversions!(Theme {
//!     Light => "light",
//!     Dark => "dark",
//! });
//!
//! assert_eq!(Theme::Dark.to_string(), "dark");
//! assert_eq!("LIGHT".parse::<Theme>().unwrap(), Theme::Light);
//! ```

/// Implements Display and FromStr traits for unit-variant enums
///
/// - Display writes the mapped lowercase string
/// - FromStr parses case-insensitively and trims surrounding whitespace
/// - Errors name the enum and echo the rejected input
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
