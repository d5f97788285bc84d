//! Helpers for assembling header entry sequences in memory.

use rpm_pkginfo::{IndexEntry, IndexTag, TagDataType};

pub fn string_entry(tag: IndexTag, value: &str) -> IndexEntry {
    let mut data = value.as_bytes().to_vec();
    data.push(0);
    IndexEntry::new(tag as u32 as i32, TagDataType::RPM_STRING_TYPE as u32, data)
}

pub fn string_array_entry(tag: IndexTag, values: &[&str]) -> IndexEntry {
    let mut data = Vec::new();
    for value in values {
        data.extend_from_slice(value.as_bytes());
        data.push(0);
    }
    IndexEntry::new(
        tag as u32 as i32,
        TagDataType::RPM_STRING_ARRAY_TYPE as u32,
        data,
    )
}

pub fn i32_entry(tag: IndexTag, value: i32) -> IndexEntry {
    IndexEntry::new(
        tag as u32 as i32,
        TagDataType::RPM_INT32_TYPE as u32,
        value.to_be_bytes().to_vec(),
    )
}

pub fn i32_array_entry(tag: IndexTag, values: &[i32]) -> IndexEntry {
    let data = values
        .iter()
        .flat_map(|value| value.to_be_bytes())
        .collect();
    IndexEntry::new(tag as u32 as i32, TagDataType::RPM_INT32_TYPE as u32, data)
}

pub fn u16_array_entry(tag: IndexTag, values: &[u16]) -> IndexEntry {
    let data = values
        .iter()
        .flat_map(|value| value.to_be_bytes())
        .collect();
    IndexEntry::new(tag as u32 as i32, TagDataType::RPM_INT16_TYPE as u32, data)
}

/// Entry sequence resembling a small installed package header.
pub fn bash_like_entries() -> Vec<IndexEntry> {
    vec![
        string_entry(IndexTag::RPMTAG_NAME, "bash"),
        string_entry(IndexTag::RPMTAG_VERSION, "5.2.15"),
        string_entry(IndexTag::RPMTAG_RELEASE, "3.fc38"),
        i32_entry(IndexTag::RPMTAG_EPOCH, 0),
        string_entry(IndexTag::RPMTAG_ARCH, "x86_64"),
        string_entry(IndexTag::RPMTAG_SOURCERPM, "bash-5.2.15-3.fc38.src.rpm"),
        i32_entry(IndexTag::RPMTAG_SIZE, 7_740_132),
        string_entry(IndexTag::RPMTAG_LICENSE, "GPL-3.0-or-later"),
        string_entry(IndexTag::RPMTAG_VENDOR, "Fedora Project"),
        string_array_entry(IndexTag::RPMTAG_BASENAMES, &["bash", "bashrc"]),
        i32_array_entry(IndexTag::RPMTAG_DIRINDEXES, &[1, 0]),
        string_array_entry(IndexTag::RPMTAG_DIRNAMES, &["/etc/", "/usr/bin/"]),
        i32_array_entry(IndexTag::RPMTAG_FILESIZES, &[1_396_520, 58]),
        u16_array_entry(IndexTag::RPMTAG_FILEMODES, &[0o100755, 0o100644]),
        string_array_entry(
            IndexTag::RPMTAG_FILEDIGESTS,
            &[
                "2c17ad8b0a4f70ebc40b52bd3c0bc2d5af6a1f9a9d80d818d18c3c3a2241a2c9",
                "",
            ],
        ),
    ]
}
