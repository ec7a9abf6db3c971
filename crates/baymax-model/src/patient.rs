//! Patient directory entries and records
//!
//! The backend identifies patients by the file name of their record, following
//! the `firstname_lastname[...].json` convention. Administrative files
//! (`hospital*`, `practitioner*`) share the same store and are filtered out.

use serde::{Deserialize, Serialize};

/// File name prefixes of records that do not describe a patient
pub const ADMINISTRATIVE_PREFIXES: [&str; 2] = ["hospital", "practitioner"];

/// Record type value that marks a patient in typed directory entries
pub const PATIENT_RECORD_TYPE: &str = "patient";

/// One patient record known to the backend
///
/// `display_name` is derived from `id` at construction and never edited.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatientRecord {
    id: String,
    display_name: String,
}

impl PatientRecord {
    /// Build a record from a directory file name.
    ///
    /// Returns `None` when the name does not split into at least two
    /// underscore-delimited parts.
    pub fn from_file_name(file_name: impl Into<String>) -> Option<Self> {
        let id = file_name.into();
        let display_name = display_name_for(&id)?;
        Some(Self { id, display_name })
    }

    /// Opaque file identifier used as the key for every request
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `"<Last>, <First>"`
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// Derive `"<Last>, <First>"` from a `firstname_lastname[...].json` file name.
///
/// Digits are stripped from both parts and each part is capitalized.
pub fn display_name_for(file_name: &str) -> Option<String> {
    let base = file_name.strip_suffix(".json").unwrap_or(file_name);
    let mut parts = base.split('_');
    let first = parts.next()?;
    let last = parts.next()?;

    Some(format!(
        "{}, {}",
        capitalize(&strip_digits(last)),
        capitalize(&strip_digits(first))
    ))
}

/// True when a bare file name looks like a patient record
pub fn is_patient_file(file_name: &str) -> bool {
    !ADMINISTRATIVE_PREFIXES
        .iter()
        .any(|prefix| file_name.starts_with(prefix))
        && file_name.contains('_')
}

fn strip_digits(part: &str) -> String {
    part.chars().filter(|c| !c.is_ascii_digit()).collect()
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// An entry of the directory listing.
///
/// Older backends return bare file names; newer ones may tag each file with
/// an explicit record type, which then takes precedence over the file-name
/// convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DirectoryEntry {
    File(String),
    Typed {
        file: String,
        #[serde(default)]
        record_type: Option<String>,
    },
}

impl DirectoryEntry {
    pub fn file(&self) -> &str {
        match self {
            DirectoryEntry::File(file) | DirectoryEntry::Typed { file, .. } => file,
        }
    }

    /// Whether this entry names a patient record
    pub fn is_patient(&self) -> bool {
        match self {
            DirectoryEntry::Typed {
                file,
                record_type: Some(kind),
            } => kind.eq_ignore_ascii_case(PATIENT_RECORD_TYPE) && file.contains('_'),
            other => is_patient_file(other.file()),
        }
    }
}

/// Body of the directory listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientDirectory {
    pub patient_files: Vec<DirectoryEntry>,
}

impl PatientDirectory {
    /// Derive the ordered patient records.
    ///
    /// With `promote`, the record whose id matches sorts first; the relative
    /// order of every other record is preserved.
    pub fn records(&self, promote: Option<&str>) -> Vec<PatientRecord> {
        let mut records: Vec<PatientRecord> = self
            .patient_files
            .iter()
            .filter(|entry| entry.is_patient())
            .filter_map(|entry| PatientRecord::from_file_name(entry.file()))
            .collect();

        if let Some(id) = promote {
            promote_record(&mut records, id);
        }
        records
    }
}

/// Move the record with `id` to the front, keeping the rest in order
pub fn promote_record(records: &mut [PatientRecord], id: &str) {
    records.sort_by_key(|record| record.id() != id);
}
