//! Reconstruction of package records from header index entries.
//!
//! Two independent linear passes over the same entry sequence: one for the
//! scalar package fields, one collecting the parallel file metadata arrays
//! which are then zipped back into per-file records.

use itertools::multizip;
use log::{debug, trace};
use num_traits::FromPrimitive;

use crate::constants::IndexTag;
use crate::errors::RPMError;
use crate::header::{
    IndexEntry, parse_i32, parse_i32_array, parse_string, parse_string_array, parse_u16_array,
};

/// Sentinel rpm stores for string fields that are intentionally absent.
const NONE_SENTINEL: &str = "(none)";

/// Scalar metadata and owned files of one package header.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub epoch: i32,
    pub name: String,
    pub version: String,
    pub release: String,
    pub arch: String,
    pub source_rpm: String,
    pub size: i32,
    pub license: String,
    pub vendor: String,
    pub files: Vec<FileInfo>,
}

/// One file owned by a package.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Absolute path, directory name concatenated with base name.
    pub path: String,
    /// Permission bits as stored in `RPMTAG_FILEMODES`.
    pub mode: u16,
    /// Content digest as a lowercase hex string, empty when not recorded.
    pub digest: String,
    /// File size in bytes, 0 when not recorded.
    pub size: i32,
}

impl FileInfo {
    /// The recorded digest as raw bytes; empty when no digest was recorded.
    pub fn digest_bytes(&self) -> Result<Vec<u8>, RPMError> {
        Ok(hex::decode(&self.digest)?)
    }
}

impl PackageInfo {
    /// Decodes one header's entry sequence into a package record.
    ///
    /// Unrecognized tags are skipped. A recognized tag whose declared type
    /// disagrees with the catalog fails the whole decode. If a scalar tag
    /// recurs, the last occurrence wins.
    pub fn from_entries(entries: &[IndexEntry]) -> Result<PackageInfo, RPMError> {
        let mut pkg = PackageInfo::default();

        for entry in entries {
            let Some(tag) = IndexTag::from_i32(entry.tag) else {
                trace!("skipping unrecognized tag {}", entry.tag);
                continue;
            };
            match tag {
                IndexTag::RPMTAG_NAME => {
                    check_type(tag, entry)?;
                    pkg.name = parse_string(&entry.data);
                }
                IndexTag::RPMTAG_VERSION => {
                    check_type(tag, entry)?;
                    pkg.version = parse_string(&entry.data);
                }
                IndexTag::RPMTAG_RELEASE => {
                    check_type(tag, entry)?;
                    pkg.release = parse_string(&entry.data);
                }
                IndexTag::RPMTAG_ARCH => {
                    check_type(tag, entry)?;
                    pkg.arch = parse_string(&entry.data);
                }
                IndexTag::RPMTAG_EPOCH => {
                    check_type(tag, entry)?;
                    pkg.epoch = parse_i32(&entry.data)?;
                }
                IndexTag::RPMTAG_SIZE => {
                    check_type(tag, entry)?;
                    pkg.size = parse_i32(&entry.data)?;
                }
                IndexTag::RPMTAG_SOURCERPM => {
                    check_type(tag, entry)?;
                    pkg.source_rpm = trim_none(parse_string(&entry.data));
                }
                IndexTag::RPMTAG_LICENSE => {
                    check_type(tag, entry)?;
                    pkg.license = trim_none(parse_string(&entry.data));
                }
                IndexTag::RPMTAG_VENDOR => {
                    check_type(tag, entry)?;
                    pkg.vendor = trim_none(parse_string(&entry.data));
                }
                // file metadata tags are collected by file_infos below
                _ => {}
            }
        }

        pkg.files = file_infos(entries)?;
        Ok(pkg)
    }
}

/// Maps the `"(none)"` sentinel to an empty string.
///
/// Only `RPMTAG_SOURCERPM`, `RPMTAG_LICENSE` and `RPMTAG_VENDOR` use the
/// sentinel convention; the other string tags keep the literal value.
fn trim_none(value: String) -> String {
    if value == NONE_SENTINEL {
        String::new()
    } else {
        value
    }
}

fn check_type(tag: IndexTag, entry: &IndexEntry) -> Result<(), RPMError> {
    if !tag.matches_type_code(entry.type_code) {
        return Err(RPMError::UnexpectedTagDataType {
            tag,
            expected: tag.expected_type(),
            actual: entry.type_code,
        });
    }
    Ok(())
}

/// Reassembles per-file records from the parallel file metadata arrays.
///
/// Base names, directory names and directory indexes are stored as three
/// independent arrays, where `dir_names[dir_indexes[i]] + basenames[i]` is
/// the path of the i-th file (directory names already end in `/`). Digest,
/// mode and size arrays may be shorter than the base name array; missing
/// elements default to empty/zero. Without directory names or directory
/// indexes no paths can be reconstructed and the file list is empty, which
/// is not an error: headers of virtual packages carry no file metadata.
pub fn file_infos(entries: &[IndexEntry]) -> Result<Vec<FileInfo>, RPMError> {
    let mut basenames: Option<Vec<String>> = None;
    let mut dir_names: Option<Vec<String>> = None;
    let mut dir_indexes: Option<Vec<i32>> = None;
    let mut digests: Option<Vec<String>> = None;
    let mut modes: Option<Vec<u16>> = None;
    let mut sizes: Option<Vec<i32>> = None;

    for entry in entries {
        let Some(tag) = IndexTag::from_i32(entry.tag) else {
            continue;
        };
        match tag {
            IndexTag::RPMTAG_FILESIZES => {
                check_type(tag, entry)?;
                sizes = Some(parse_i32_array(&entry.data, entry.length)?);
            }
            IndexTag::RPMTAG_FILEDIGESTS => {
                check_type(tag, entry)?;
                digests = Some(parse_string_array(&entry.data));
            }
            IndexTag::RPMTAG_FILEMODES => {
                check_type(tag, entry)?;
                modes = Some(parse_u16_array(&entry.data, entry.length)?);
            }
            IndexTag::RPMTAG_BASENAMES => {
                check_type(tag, entry)?;
                basenames = Some(parse_string_array(&entry.data));
            }
            IndexTag::RPMTAG_DIRNAMES => {
                check_type(tag, entry)?;
                dir_names = Some(parse_string_array(&entry.data));
            }
            IndexTag::RPMTAG_DIRINDEXES => {
                check_type(tag, entry)?;
                dir_indexes = Some(parse_i32_array(&entry.data, entry.length)?);
            }
            _ => {}
        }
    }

    let (Some(dir_names), Some(dir_indexes)) = (dir_names, dir_indexes) else {
        trace!("no directory metadata in header, empty file list");
        return Ok(Vec::new());
    };
    let basenames = basenames.unwrap_or_default();

    // the directory index array is structural: every base name must have one
    if dir_indexes.len() < basenames.len() {
        return Err(RPMError::TagArrayTooShort {
            tag: IndexTag::RPMTAG_DIRINDEXES,
            expected: basenames.len() as u32,
            actual: dir_indexes.len() as u32,
        });
    }

    let bound = dir_names.len() as u32;
    let files = multizip((basenames.iter(), dir_indexes.iter()))
        .enumerate()
        .try_fold(
            Vec::with_capacity(basenames.len()),
            |mut acc, (i, (base, &dir_index))| {
                let dir = dir_names.get(dir_index as usize).ok_or(
                    RPMError::InvalidTagIndex {
                        tag: IndexTag::RPMTAG_DIRINDEXES,
                        index: dir_index as u32,
                        bound,
                    },
                )?;
                acc.push(FileInfo {
                    path: format!("{dir}{base}"),
                    mode: modes.as_ref().and_then(|m| m.get(i)).copied().unwrap_or(0),
                    digest: digests
                        .as_ref()
                        .and_then(|d| d.get(i))
                        .cloned()
                        .unwrap_or_default(),
                    size: sizes.as_ref().and_then(|s| s.get(i)).copied().unwrap_or(0),
                });
                Ok::<_, RPMError>(acc)
            },
        )?;

    debug!(
        "reconstructed {} file records from {} base names",
        files.len(),
        basenames.len()
    );
    Ok(files)
}
