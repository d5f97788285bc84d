//! RPM specific constants
//!
//! Tag numbers and type codes were extracted from the rpm upstream project
//! C headers (`lib/rpmtag.h`).

use std::fmt::Display;

use num_traits::FromPrimitive;

/// Base of the regular tag number space.
pub const HEADER_TAGBASE: u32 = 1000;

/// Header tags interpreted by this crate.
///
/// Entries carrying any other tag are passed over untouched during decoding.
#[repr(u32)]
#[derive(
    num_derive::FromPrimitive,
    num_derive::ToPrimitive,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Copy,
    Clone,
    enum_display_derive::Display,
)]
#[allow(non_camel_case_types)]
pub enum IndexTag {
    RPMTAG_NAME = 1000,
    RPMTAG_VERSION = 1001,
    RPMTAG_RELEASE = 1002,
    RPMTAG_EPOCH = 1003,
    RPMTAG_SIZE = 1009,
    RPMTAG_VENDOR = 1011,
    RPMTAG_LICENSE = 1014,
    RPMTAG_ARCH = 1022,
    RPMTAG_FILESIZES = 1028,
    RPMTAG_FILEMODES = 1030,
    RPMTAG_FILEDIGESTS = 1035,
    RPMTAG_SOURCERPM = 1044,
    RPMTAG_DIRINDEXES = 1116,
    RPMTAG_BASENAMES = 1117,
    RPMTAG_DIRNAMES = 1118,
}

/// On-disk data type codes for header entries (`rpmTagType_e`).
#[repr(u32)]
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    enum_primitive_derive::Primitive,
    enum_display_derive::Display,
)]
#[allow(non_camel_case_types)]
pub enum TagDataType {
    RPM_NULL_TYPE = 0,
    RPM_CHAR_TYPE = 1,
    RPM_INT8_TYPE = 2,
    RPM_INT16_TYPE = 3,
    RPM_INT32_TYPE = 4,
    RPM_INT64_TYPE = 5,
    RPM_STRING_TYPE = 6,
    RPM_BIN_TYPE = 7,
    RPM_STRING_ARRAY_TYPE = 8,
    RPM_I18NSTRING_TYPE = 9,
}

impl IndexTag {
    /// The data type an entry carrying this tag must declare.
    ///
    /// `RPMTAG_FILEMODES` is stored as a 16 bit integer array; the values are
    /// permission bit patterns and are read as unsigned.
    pub fn expected_type(self) -> TagDataType {
        match self {
            IndexTag::RPMTAG_NAME
            | IndexTag::RPMTAG_VERSION
            | IndexTag::RPMTAG_RELEASE
            | IndexTag::RPMTAG_VENDOR
            | IndexTag::RPMTAG_LICENSE
            | IndexTag::RPMTAG_ARCH
            | IndexTag::RPMTAG_SOURCERPM => TagDataType::RPM_STRING_TYPE,
            IndexTag::RPMTAG_EPOCH
            | IndexTag::RPMTAG_SIZE
            | IndexTag::RPMTAG_FILESIZES
            | IndexTag::RPMTAG_DIRINDEXES => TagDataType::RPM_INT32_TYPE,
            IndexTag::RPMTAG_FILEMODES => TagDataType::RPM_INT16_TYPE,
            IndexTag::RPMTAG_FILEDIGESTS
            | IndexTag::RPMTAG_BASENAMES
            | IndexTag::RPMTAG_DIRNAMES => TagDataType::RPM_STRING_ARRAY_TYPE,
        }
    }

    /// Whether a declared type code matches this tag's catalog entry.
    pub fn matches_type_code(self, type_code: u32) -> bool {
        TagDataType::from_u32(type_code) == Some(self.expected_type())
    }
}
