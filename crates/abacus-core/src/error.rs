use crate::layout::Layout;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbacusError {
    #[error("unknown layout `{0}` (expected `free` or `soroban`)")]
    UnknownLayout(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidParam { key: String, value: String },
    #[error("rod {0} is out of range")]
    RodOutOfRange(usize),
    #[error("digit {0} is out of range 0..=9")]
    DigitOutOfRange(u8),
    #[error("the {0} layout has no place values")]
    NoPlaceValues(Layout),
}
