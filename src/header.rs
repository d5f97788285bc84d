//! Index entries and the primitive decoders for their payloads.
//!
//! An upstream header reader (database backend, package reader) splits the
//! header blob into [`IndexEntry`] records; the functions here turn the raw
//! payload bytes into typed values. They know nothing about tag semantics,
//! only about the requested width and element count.

use nom::number::complete::{be_i32, be_u16};

use crate::errors::RPMError;

pub(crate) const SIZE_OF_INT32: usize = 4;
pub(crate) const SIZE_OF_UINT16: usize = 2;

/// One header record as handed over by the upstream header reader.
///
/// `length` is the payload byte length declared in the header index. Array
/// types carry no element count in the payload itself, so the count is
/// derived from `length` and the element width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Numeric tag identifier, selects the semantic meaning of the payload.
    pub tag: i32,
    /// Type code as declared in the header (`rpmTagType_e`).
    pub type_code: u32,
    /// Raw payload bytes.
    pub data: Vec<u8>,
    /// Declared payload length in bytes.
    pub length: usize,
}

impl IndexEntry {
    /// Build an entry whose declared length is the payload length.
    pub fn new(tag: i32, type_code: u32, data: Vec<u8>) -> Self {
        let length = data.len();
        IndexEntry {
            tag,
            type_code,
            data,
            length,
        }
    }
}

/// Decodes a `RPM_STRING_TYPE` payload, stripping the trailing NUL padding.
///
/// Leading and embedded NUL bytes are preserved.
pub fn parse_string(data: &[u8]) -> String {
    let end = data.iter().rposition(|&b| b != 0).map_or(0, |pos| pos + 1);
    String::from_utf8_lossy(&data[..end]).to_string()
}

/// Decodes a `RPM_STRING_ARRAY_TYPE` payload.
///
/// The payload is a sequence of NUL terminated strings, so splitting on NUL
/// leaves one empty element at the end which is dropped. Ordering and
/// duplicates are preserved.
pub fn parse_string_array(data: &[u8]) -> Vec<String> {
    let mut elements: Vec<String> = data
        .split(|&b| b == 0)
        .map(|raw| String::from_utf8_lossy(raw).to_string())
        .collect();
    if elements.last().is_some_and(|last| last.is_empty()) {
        elements.pop();
    }
    elements
}

/// Decodes the first four payload bytes as a big-endian `i32`.
pub fn parse_i32(data: &[u8]) -> Result<i32, RPMError> {
    let (_, value) = be_i32::<_, nom::error::Error<&[u8]>>(data)?;
    Ok(value)
}

/// Decodes `byte_len / 4` consecutive big-endian `i32` values.
///
/// A trailing remainder of fewer than four bytes is not read.
pub fn parse_i32_array(data: &[u8], byte_len: usize) -> Result<Vec<i32>, RPMError> {
    parse_entry_data_number(data, byte_len / SIZE_OF_INT32, be_i32)
}

/// Decodes `byte_len / 2` consecutive big-endian `u16` values.
pub fn parse_u16_array(data: &[u8], byte_len: usize) -> Result<Vec<u16>, RPMError> {
    parse_entry_data_number(data, byte_len / SIZE_OF_UINT16, be_u16)
}

fn parse_entry_data_number<'a, T, F>(
    mut input: &'a [u8],
    count: usize,
    parser: F,
) -> Result<Vec<T>, RPMError>
where
    F: Fn(&'a [u8]) -> nom::IResult<&'a [u8], T>,
{
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        let (rest, value) = parser(input)?;
        items.push(value);
        input = rest;
    }
    Ok(items)
}
