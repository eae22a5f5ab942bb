use std::path::Path;

use crate::error::RunError;
use crate::models::RunConfig;
use crate::services::{database, BatchDriver, Normalizer, RunReport};

/// Load → augment → save, as one run
pub struct AugmentPipeline {
    config: RunConfig,
    driver: BatchDriver,
}

impl AugmentPipeline {
    pub fn new(config: RunConfig) -> Self {
        let driver = BatchDriver::new(Normalizer::from_config(&config));
        Self { config, driver }
    }

    pub fn with_driver(config: RunConfig, driver: BatchDriver) -> Self {
        Self { config, driver }
    }

    /// Run the batch and write the augmented database
    ///
    /// The output is written even when no icon produced a color.
    pub fn run(&self) -> Result<RunReport, RunError> {
        let input = &self.config.input_database;
        let output = &self.config.output_database;
        if same_file(input, output) {
            return Err(RunError::SameDatabasePath(output.clone()));
        }

        let mut db = database::load(input)?;
        let report = self.driver.run(&self.config.icons_dir, &mut db)?;
        database::save(&db, output)?;
        Ok(report)
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
