mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader};
pub use model::{Config, PovConfig, ProgressConfig, ScanConfig, StyleConfig, VolumeConfig};
pub use validation::validate_semantics;
