use crate::knowledge::KnowledgeBase;
use crate::loader::{build_dataset, read_dataset, read_severity, DataPaths};
use crate::table::DatasetTable;
use symptomdx_core::{predict, predict_batch, Dataset, PredictRequest, Prediction, Result};
use tracing::info;

/// Everything loaded at startup. Immutable once opened.
pub struct DataStore {
    dataset: Dataset,
    knowledge: KnowledgeBase,
    table: DatasetTable,
}

impl DataStore {
    /// Load all four files. Fails up front if any of them is missing.
    pub fn open(paths: &DataPaths) -> Result<Self> {
        paths.ensure_exist()?;

        let records = read_dataset(&paths.dataset)?;
        let severity = read_severity(&paths.severity)?;
        let dataset = build_dataset(records, &severity)?;
        info!(
            "Dataset loaded: {} rows, {} symptoms",
            dataset.len(),
            dataset.dim()
        );

        let knowledge = KnowledgeBase::load(&paths.description, &paths.precaution, &severity)?;
        let table = DatasetTable::load(&paths.dataset)?;
        info!("Dataset table loaded: {} rows", table.len());

        Ok(Self::from_parts(dataset, knowledge, table))
    }

    pub fn from_parts(dataset: Dataset, knowledge: KnowledgeBase, table: DatasetTable) -> Self {
        Self {
            dataset,
            knowledge,
            table,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn table(&self) -> &DatasetTable {
        &self.table
    }

    pub fn predict(&self, request: &PredictRequest) -> Result<Prediction> {
        predict(&self.dataset, request)
    }

    pub fn predict_batch(&self, requests: &[PredictRequest]) -> Vec<Result<Prediction>> {
        predict_batch(&self.dataset, requests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{DATASET_FILE, DESCRIPTION_FILE, PRECAUTION_FILE, SEVERITY_FILE};
    use symptomdx_core::{Error, Metric};

    fn write_fixture(dir: &std::path::Path) {
        std::fs::write(
            dir.join(DATASET_FILE),
            "Disease,Symptom_1,Symptom_2\nFlu,fever,cough\nFlu,fever,\nCold,cough,fatigue\n",
        )
        .unwrap();
        std::fs::write(dir.join(SEVERITY_FILE), "Symptom,weight\nfever,5\nchills,3\n").unwrap();
        std::fs::write(dir.join(DESCRIPTION_FILE), "Disease,Description\nFlu,Influenza.\n").unwrap();
        std::fs::write(
            dir.join(PRECAUTION_FILE),
            "Disease,Precaution_1,Precaution_2,Precaution_3,Precaution_4\nCold,rest,fluids,,\n",
        )
        .unwrap();
    }

    #[test]
    fn test_open_and_predict() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        let store = DataStore::open(&DataPaths::in_dir(dir.path())).unwrap();
        assert_eq!(store.dataset().len(), 3);
        assert_eq!(
            store.dataset().vocabulary().as_slice(),
            &["chills", "cough", "fatigue", "fever"]
        );
        assert_eq!(store.table().len(), 3);
        assert_eq!(store.knowledge().info("Cold").unwrap().precautions, vec!["rest", "fluids"]);

        let p = store
            .predict(&PredictRequest::new(["fever"], 2, Metric::Hamming))
            .unwrap();
        assert_eq!(p.predicted, "Flu");
    }

    #[test]
    fn test_open_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = DataStore::open(&DataPaths::in_dir(dir.path())).err().unwrap();
        assert!(matches!(err, Error::MissingFiles(ref m) if m.len() == 4));
    }
}
