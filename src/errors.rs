use thiserror::Error;

use crate::constants::{IndexTag, TagDataType};

/// Failures produced while interpreting header index entries.
///
/// Every variant aborts the decode of the whole package record; nothing is
/// partially committed.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RPMError {
    #[error("{0}")]
    Nom(String),

    #[error(
        "unexpected data type for tag {tag}: expected {expected}, found type code {actual}"
    )]
    UnexpectedTagDataType {
        tag: IndexTag,
        expected: TagDataType,
        actual: u32,
    },

    #[error("invalid index {index} for tag {tag}, must be less than {bound}")]
    InvalidTagIndex {
        tag: IndexTag,
        index: u32,
        bound: u32,
    },

    #[error("array for tag {tag} has {actual} elements, expected at least {expected}")]
    TagArrayTooShort {
        tag: IndexTag,
        expected: u32,
        actual: u32,
    },

    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
}

impl From<nom::Err<nom::error::Error<&[u8]>>> for RPMError {
    fn from(error: nom::Err<nom::error::Error<&[u8]>>) -> Self {
        match error {
            nom::Err::Error(e) | nom::Err::Failure(e) => {
                RPMError::Nom(e.code.description().to_string())
            }
            nom::Err::Incomplete(_) => RPMError::Nom("unhandled incomplete".to_string()),
        }
    }
}
