use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default canvas edge (pixels) for SVGs whose intrinsic size is degenerate
pub const DEFAULT_SVG_CANVAS: u32 = 256;

/// Run configuration loaded from an optional config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    /// Directory whose regular files are treated as icons (non-recursive)
    pub icons_dir: PathBuf,

    /// Fingerprint database to read
    pub input_database: PathBuf,

    /// Where the augmented database is written (never the input path)
    pub output_database: PathBuf,

    /// Scale applied to an SVG's intrinsic size when rasterizing
    pub svg_scale: f32,

    /// Square canvas edge used when the scaled SVG size rounds to zero
    pub svg_default_size: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            icons_dir: PathBuf::from("technologies"),
            input_database: PathBuf::from("fingerprints_data.input.json"),
            output_database: PathBuf::from("fingerprints_data.json"),
            svg_scale: 1.0,
            svg_default_size: DEFAULT_SVG_CANVAS,
        }
    }
}

impl RunConfig {
    /// Load configuration from a YAML file, falling back to defaults
    ///
    /// A missing path means defaults. An unreadable or malformed file is
    /// logged and also yields defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        icons_dir = %config.icons_dir.display(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Effective SVG scale (non-positive or non-finite values fall back to 1.0)
    pub fn effective_svg_scale(&self) -> f32 {
        if self.svg_scale.is_finite() && self.svg_scale > 0.0 {
            self.svg_scale
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();

        assert_eq!(config.icons_dir, PathBuf::from("technologies"));
        assert_eq!(config.output_database, PathBuf::from("fingerprints_data.json"));
        assert_ne!(config.input_database, config.output_database);
        assert_eq!(config.svg_scale, 1.0);
        assert_eq!(config.svg_default_size, DEFAULT_SVG_CANVAS);
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        assert_eq!(RunConfig::load(None), RunConfig::default());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = RunConfig::load(Some(Path::new("/nonexistent/iconhue.yaml")));
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let yaml = r#"
icons_dir: icons
svg_scale: 2.5
"#;

        let config: RunConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.icons_dir, PathBuf::from("icons"));
        assert_eq!(config.svg_scale, 2.5);
        // Unspecified fields keep their defaults
        assert_eq!(config.output_database, PathBuf::from("fingerprints_data.json"));
        assert_eq!(config.svg_default_size, DEFAULT_SVG_CANVAS);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "input_database: in.json\noutput_database: out.json").unwrap();

        let config = RunConfig::load(Some(file.path()));

        assert_eq!(config.input_database, PathBuf::from("in.json"));
        assert_eq!(config.output_database, PathBuf::from("out.json"));
    }

    #[test]
    fn test_load_malformed_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "svg_scale: [not, a, number]").unwrap();

        assert_eq!(RunConfig::load(Some(file.path())), RunConfig::default());
    }

    #[test]
    fn test_effective_svg_scale() {
        let mut config = RunConfig::default();
        config.svg_scale = 0.0;
        assert_eq!(config.effective_svg_scale(), 1.0);
        config.svg_scale = f32::NAN;
        assert_eq!(config.effective_svg_scale(), 1.0);
        config.svg_scale = 3.0;
        assert_eq!(config.effective_svg_scale(), 3.0);
    }
}
