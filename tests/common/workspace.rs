//! Temporary icon directory plus database files.

use iconhue::models::RunConfig;
use iconhue::rendering::{SvgCanvas, SvgRenderer};
use iconhue::services::{AugmentPipeline, BatchDriver, Normalizer, RunReport};
use iconhue::error::RunError;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Empty icons directory and the given input database
    pub fn new(database: &Value) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("technologies")).unwrap();
        std::fs::write(
            dir.path().join("input.json"),
            serde_json::to_vec(database).unwrap(),
        )
        .unwrap();
        Self { dir }
    }

    pub fn icons_dir(&self) -> PathBuf {
        self.dir.path().join("technologies")
    }

    pub fn icon(&self, name: &str) -> PathBuf {
        self.icons_dir().join(name)
    }

    pub fn input_path(&self) -> PathBuf {
        self.dir.path().join("input.json")
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join("output.json")
    }

    pub fn config(&self) -> RunConfig {
        RunConfig {
            icons_dir: self.icons_dir(),
            input_database: self.input_path(),
            output_database: self.output_path(),
            ..Default::default()
        }
    }

    /// Run the full pipeline without loading system fonts
    pub fn run(&self) -> Result<RunReport, RunError> {
        let driver = BatchDriver::new(Normalizer::new(
            SvgRenderer::without_fonts(),
            SvgCanvas::default(),
        ));
        AugmentPipeline::with_driver(self.config(), driver).run()
    }

    pub fn output_json(&self) -> Value {
        serde_json::from_slice(&std::fs::read(self.output_path()).unwrap()).unwrap()
    }
}
