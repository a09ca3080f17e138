//! CSV ingestion for the training dataset and symptom vocabulary

use std::path::{Path, PathBuf};
use symptomdx_core::{normalize_symptom, Dataset, Error, Result, Vocabulary};
use tracing::warn;

pub const DATASET_FILE: &str = "dataset.csv";
pub const SEVERITY_FILE: &str = "symptom-severity.csv";
pub const DESCRIPTION_FILE: &str = "description.csv";
pub const PRECAUTION_FILE: &str = "precaution.csv";

/// Locations of the four input files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub dataset: PathBuf,
    pub severity: PathBuf,
    pub description: PathBuf,
    pub precaution: PathBuf,
}

impl DataPaths {
    /// Default file names inside `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            dataset: dir.join(DATASET_FILE),
            severity: dir.join(SEVERITY_FILE),
            description: dir.join(DESCRIPTION_FILE),
            precaution: dir.join(PRECAUTION_FILE),
        }
    }

    pub fn all(&self) -> [&Path; 4] {
        [
            &self.dataset,
            &self.severity,
            &self.description,
            &self.precaution,
        ]
    }

    /// Fails with every path that does not exist
    pub fn ensure_exist(&self) -> Result<()> {
        let missing: Vec<PathBuf> = self
            .all()
            .into_iter()
            .filter(|p| !p.exists())
            .map(Path::to_path_buf)
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingFiles(missing))
        }
    }
}

/// One training row: disease label and its raw symptom cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRecord {
    pub disease: String,
    pub symptoms: Vec<String>,
}

pub(crate) fn csv_error(path: &Path, e: csv::Error) -> Error {
    Error::Storage(format!("{}: {}", path.display(), e))
}

pub(crate) fn open_csv(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))
}

pub(crate) fn column_index(headers: &csv::StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| {
            Error::Storage(format!(
                "{}: missing column '{}' (available: {:?})",
                path.display(),
                name,
                headers.iter().collect::<Vec<_>>()
            ))
        })
}

/// Read `Disease` plus every `Symptom_*` column (prefix matched case-insensitively).
/// Rows without a disease name are skipped.
pub fn read_dataset(path: &Path) -> Result<Vec<DatasetRecord>> {
    let mut reader = open_csv(path)?;
    let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();

    let disease_col = column_index(&headers, "Disease", path)?;
    let symptom_cols: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| h.trim().to_lowercase().starts_with("symptom_"))
        .map(|(i, _)| i)
        .collect();

    let mut records = Vec::new();
    for (line, row) in reader.records().enumerate() {
        let row = row.map_err(|e| csv_error(path, e))?;
        let disease = row.get(disease_col).unwrap_or("").trim();
        if disease.is_empty() {
            warn!("{}: skipping row {} without a disease", path.display(), line + 2);
            continue;
        }
        let symptoms = symptom_cols
            .iter()
            .filter_map(|&c| row.get(c))
            .map(normalize_symptom)
            .filter(|s| !s.is_empty())
            .collect();
        records.push(DatasetRecord {
            disease: disease.to_string(),
            symptoms,
        });
    }

    Ok(records)
}

/// Read `(symptom, weight)` pairs; symptoms are normalized, unparsable weights become `None`
pub fn read_severity(path: &Path) -> Result<Vec<(String, Option<i64>)>> {
    let mut reader = open_csv(path)?;
    let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();
    let symptom_col = column_index(&headers, "Symptom", path)?;
    let weight_col = headers.iter().position(|h| h.trim().eq_ignore_ascii_case("weight"));

    let mut out = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| csv_error(path, e))?;
        let symptom = normalize_symptom(row.get(symptom_col).unwrap_or(""));
        if symptom.is_empty() {
            continue;
        }
        let weight = weight_col
            .and_then(|c| row.get(c))
            .and_then(|w| w.trim().parse::<i64>().ok());
        out.push((symptom, weight));
    }
    Ok(out)
}

/// Vocabulary is the union of severity symptoms and dataset symptoms
pub fn build_dataset(records: Vec<DatasetRecord>, severity: &[(String, Option<i64>)]) -> Result<Dataset> {
    let vocabulary = Vocabulary::new(
        severity
            .iter()
            .map(|(s, _)| s.as_str())
            .chain(records.iter().flat_map(|r| r.symptoms.iter().map(String::as_str))),
    );

    Dataset::from_symptom_sets(
        vocabulary,
        records.into_iter().map(|r| (r.disease, r.symptoms)),
    )
}
