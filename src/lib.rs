//! # rpm-pkginfo
//!
//! Decodes the tag/value index entries of an RPM package header into a
//! structured package description: scalar metadata (name, version, release,
//! architecture, size, license, vendor, source package) and the list of
//! files the package owns.
//!
//! The physical header has already been split into entries by an upstream
//! reader (a package file parser or an rpmdb backend); this crate only
//! interprets them. It performs no I/O.
//!
//! # Example
//!
//! ```rust
//! use rpm_pkginfo::{IndexEntry, IndexTag, PackageInfo, TagDataType};
//!
//! # fn main() -> Result<(), rpm_pkginfo::RPMError> {
//! let entries = vec![
//!     IndexEntry::new(
//!         IndexTag::RPMTAG_NAME as u32 as i32,
//!         TagDataType::RPM_STRING_TYPE as u32,
//!         b"bash\0".to_vec(),
//!     ),
//!     IndexEntry::new(
//!         IndexTag::RPMTAG_VERSION as u32 as i32,
//!         TagDataType::RPM_STRING_TYPE as u32,
//!         b"5.2.15\0".to_vec(),
//!     ),
//! ];
//! let pkg = PackageInfo::from_entries(&entries)?;
//! assert_eq!(pkg.name, "bash");
//! assert_eq!(pkg.version, "5.2.15");
//! assert!(pkg.files.is_empty());
//! # Ok(())
//! # }
//! ```

mod errors;
pub use crate::errors::*;

pub(crate) mod constants;
pub use crate::constants::*;

mod header;
pub use crate::header::*;

mod package;
pub use crate::package::*;
