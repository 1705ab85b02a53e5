//! Domain models for the clinic registry.

/// `FromStr` and `Display` for [`Keyword`] enums.
macro_rules! keyword_traits {
    ($($ty:ty),*) => {
        $(
            impl std::str::FromStr for $ty {
                type Err = ModelError;

                fn from_str(s: &str) -> ModelResult<Self> {
                    Self::parse_keyword(s)
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

mod patient;
mod person;
mod room;
mod staff;
mod visit;

pub use patient::*;
pub use person::*;
pub use room::*;
pub use staff::*;
pub use visit::*;

use thiserror::Error;

/// Model invariant violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("First name and last name cannot be blank")]
    BlankName,

    #[error("Date of birth cannot be blank")]
    BlankDateOfBirth,

    #[error("Room name cannot be blank")]
    BlankRoomName,

    #[error("Coordinates cannot be negative: ({x}, {y})")]
    NegativeCoordinate { x: i64, y: i64 },

    #[error("Coordinates must not exceed 4294967295: ({x}, {y})")]
    CoordinateOutOfRange { x: i64, y: i64 },

    #[error("Room number must be between 1 and 100, got {0}")]
    RoomNumberOutOfRange(i64),

    #[error("Room number is already set to {0}")]
    RoomNumberAlreadySet(u32),

    #[error("Room number must be set before assigning a patient")]
    RoomNumberUnset,

    #[error("Room {0} only holds one patient at a time")]
    RoomFull(u32),

    #[error("NPI must be a 10-digit number, got {0:?}")]
    InvalidNpi(String),

    #[error("Job title {0} does not carry this kind of identifier")]
    IdentifierMismatch(JobTitle),

    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Body temperature must be a finite number, got {0}")]
    InvalidTemperature(f64),
}

pub type ModelResult<T> = Result<T, ModelError>;

/// Enum whose variants are spelled as upper-case keywords in clinic files.
pub trait Keyword: Copy + 'static {
    /// Name used in error messages.
    const KIND: &'static str;
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    /// Case-insensitive lookup of a keyword.
    fn parse_keyword(value: &str) -> ModelResult<Self> {
        let value = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| ModelError::UnknownVariant {
                kind: Self::KIND,
                value: value.to_string(),
            })
    }
}
