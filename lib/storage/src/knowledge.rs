//! Disease descriptions, precautions and symptom severity weights

use crate::loader::{column_index, csv_error, open_csv};
use ahash::AHashMap;
use serde::Serialize;
use std::path::Path;
use symptomdx_core::Result;

const PRECAUTION_COLUMNS: [&str; 4] = ["Precaution_1", "Precaution_2", "Precaution_3", "Precaution_4"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiseaseInfo {
    pub disease: String,
    pub description: Option<String>,
    pub precautions: Vec<String>,
}

/// Read-only reference data keyed by disease or symptom name
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    descriptions: AHashMap<String, String>,
    precautions: AHashMap<String, Vec<String>>,
    severity: AHashMap<String, i64>,
}

impl KnowledgeBase {
    pub fn new(
        descriptions: AHashMap<String, String>,
        precautions: AHashMap<String, Vec<String>>,
        severity: AHashMap<String, i64>,
    ) -> Self {
        Self {
            descriptions,
            precautions,
            severity,
        }
    }

    pub fn load(
        description_path: &Path,
        precaution_path: &Path,
        severity: &[(String, Option<i64>)],
    ) -> Result<Self> {
        let descriptions = read_descriptions(description_path)?;
        let precautions = read_precautions(precaution_path)?;
        let severity = severity
            .iter()
            .filter_map(|(s, w)| w.map(|w| (s.clone(), w)))
            .collect();
        Ok(Self::new(descriptions, precautions, severity))
    }

    /// `None` when the disease has neither a description nor precautions
    pub fn info(&self, disease: &str) -> Option<DiseaseInfo> {
        let disease = disease.trim();
        let description = self.descriptions.get(disease).cloned();
        let precautions = self.precautions.get(disease).cloned();
        if description.is_none() && precautions.is_none() {
            return None;
        }
        Some(DiseaseInfo {
            disease: disease.to_string(),
            description,
            precautions: precautions.unwrap_or_default(),
        })
    }

    /// Severity weight of a normalized symptom
    pub fn severity(&self, symptom: &str) -> Option<i64> {
        self.severity.get(symptom).copied()
    }

    pub fn severity_map(&self) -> &AHashMap<String, i64> {
        &self.severity
    }
}

fn read_descriptions(path: &Path) -> Result<AHashMap<String, String>> {
    let mut reader = open_csv(path)?;
    let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();
    let disease_col = column_index(&headers, "Disease", path)?;
    let description_col = column_index(&headers, "Description", path)?;

    let mut map = AHashMap::new();
    for row in reader.records() {
        let row = row.map_err(|e| csv_error(path, e))?;
        let disease = row.get(disease_col).unwrap_or("").trim();
        let description = row.get(description_col).unwrap_or("").trim();
        if !disease.is_empty() && !description.is_empty() {
            map.insert(disease.to_string(), description.to_string());
        }
    }
    Ok(map)
}

fn read_precautions(path: &Path) -> Result<AHashMap<String, Vec<String>>> {
    let mut reader = open_csv(path)?;
    let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();
    let disease_col = column_index(&headers, "Disease", path)?;
    let step_cols: Vec<usize> = PRECAUTION_COLUMNS
        .iter()
        .filter_map(|name| headers.iter().position(|h| h.trim() == *name))
        .collect();

    let mut map = AHashMap::new();
    for row in reader.records() {
        let row = row.map_err(|e| csv_error(path, e))?;
        let disease = row.get(disease_col).unwrap_or("").trim();
        if disease.is_empty() {
            continue;
        }
        let steps = step_cols
            .iter()
            .filter_map(|&c| row.get(c))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        map.insert(disease.to_string(), steps);
    }
    Ok(map)
}
