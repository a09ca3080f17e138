pub mod knowledge;
pub mod loader;
pub mod manager;
pub mod table;

pub use knowledge::{DiseaseInfo, KnowledgeBase};
pub use loader::{build_dataset, read_dataset, read_severity, DataPaths, DatasetRecord};
pub use manager::DataStore;
pub use table::{DatasetTable, Page};
