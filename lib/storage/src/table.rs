//! Raw view of the dataset CSV for browsing

use crate::loader::{csv_error, open_csv};
use serde::Serialize;
use std::path::Path;
use symptomdx_core::Result;

/// The dataset file as strings, restricted to `Disease` and `Symptom_*` columns
#[derive(Debug, Clone, Default)]
pub struct DatasetTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// One page of a [`DatasetTable`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

impl DatasetTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Falls back to every column when neither `Disease` nor any `Symptom_*` exists.
    /// Missing cells become empty strings.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = open_csv(path)?;
        let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();

        let mut selected: Vec<usize> = headers
            .iter()
            .position(|h| h == "Disease")
            .into_iter()
            .collect();
        selected.extend(
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| h.starts_with("Symptom_"))
                .map(|(i, _)| i),
        );
        if selected.is_empty() {
            selected = (0..headers.len()).collect();
        }

        let columns = selected
            .iter()
            .map(|&i| headers.get(i).unwrap_or("").to_string())
            .collect();

        let mut rows = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| csv_error(path, e))?;
            rows.push(
                selected
                    .iter()
                    .map(|&i| row.get(i).unwrap_or("").to_string())
                    .collect(),
            );
        }

        Ok(Self::new(columns, rows))
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 1-based page. A page past the end is clamped to the last page.
    /// `page` and `page_size` below 1 are treated as 1.
    pub fn paginate(&self, page: usize, page_size: usize) -> Page {
        let page_size = page_size.max(1);
        let mut page = page.max(1);
        let total = self.rows.len();

        let mut start = (page - 1).saturating_mul(page_size);
        if start >= total && total > 0 {
            let last_page = (total - 1) / page_size + 1;
            start = (last_page - 1) * page_size;
            page = last_page;
        }
        let end = start.saturating_add(page_size).min(total);

        Page {
            columns: self.columns.clone(),
            rows: self.rows.get(start..end).map(<[_]>::to_vec).unwrap_or_default(),
            total,
            page,
            page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn table(n: usize) -> DatasetTable {
        DatasetTable::new(
            vec!["Disease".to_string()],
            (0..n).map(|i| vec![format!("D{}", i)]).collect(),
        )
    }

    #[test]
    fn test_load_selects_columns() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "Id,Symptom_1,Disease,Symptom_2").unwrap();
        writeln!(file, "1, itching,Allergy").unwrap();

        let t = DatasetTable::load(file.path()).unwrap();
        assert_eq!(t.columns(), &["Disease", "Symptom_1", "Symptom_2"]);
        let page = t.paginate(1, 10);
        assert_eq!(page.rows, vec![vec!["Allergy", " itching", ""]]);
    }

    #[test]
    fn test_load_falls_back_to_all_columns() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "a,b").unwrap();
        writeln!(file, "1,2").unwrap();

        let t = DatasetTable::load(file.path()).unwrap();
        assert_eq!(t.columns(), &["a", "b"]);
    }

    #[test]
    fn test_paginate() {
        let t = table(120);
        let p = t.paginate(2, 50);
        assert_eq!(p.rows.len(), 50);
        assert_eq!(p.rows[0][0], "D50");
        assert_eq!(p.total, 120);
        assert_eq!(p.page, 2);

        let last = t.paginate(3, 50);
        assert_eq!(last.rows.len(), 20);
    }

    #[test]
    fn test_paginate_past_end_clamps_to_last_page() {
        let t = table(120);
        let p = t.paginate(9, 50);
        assert_eq!(p.page, 3);
        assert_eq!(p.rows.len(), 20);
        assert_eq!(p.rows[0][0], "D100");
    }

    #[test]
    fn test_paginate_empty_table() {
        let p = table(0).paginate(4, 10);
        assert!(p.rows.is_empty());
        assert_eq!(p.total, 0);
        assert_eq!(p.page, 4);
    }
}
