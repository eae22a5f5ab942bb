use std::path::{Path, PathBuf};

use dominant_color::{dominant_color, DominantColor, RasterBuffer};

use crate::error::RunError;
use crate::models::FingerprintDatabase;
use crate::services::normalizer::{Normalizer, SourceFormat};

/// Color extracted for one icon file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconColor {
    /// File name as found in the icons directory
    pub file_name: String,
    /// Technology the color was attached to, if any record matched
    pub technology: Option<String>,
    pub color: DominantColor,
}

/// Outcome of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Icons that reached the decoder
    pub total: usize,
    /// Icons reduced to a dominant color
    pub extracted: usize,
    /// Extracted colors that matched a database record
    pub matched: usize,
    pub colors: Vec<IconColor>,
}

/// Walks an icon directory and attaches each icon's dominant color to the
/// fingerprint database
pub struct BatchDriver {
    normalizer: Normalizer,
}

impl BatchDriver {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    /// Process every regular file in `dir` (non-recursive)
    ///
    /// Conversion failures skip the file. Directory, decode and raster
    /// failures abort the run.
    pub fn run(
        &self,
        dir: &Path,
        database: &mut FingerprintDatabase,
    ) -> Result<RunReport, RunError> {
        let mut report = RunReport::default();

        for path in list_regular_files(dir)? {
            let file_name = file_name_of(&path);
            println!("{file_name}");

            let Some(working_path) = self.prepare(&path) else {
                continue;
            };
            report.total += 1;

            let color = extract_file(&working_path)?;
            report.extracted += 1;

            println!("Dominant color of {file_name}: {}", color.to_hex());

            let technology = database.set_icon_color(&file_name, &color.to_hex());
            match &technology {
                Some(name) => {
                    report.matched += 1;
                    tracing::debug!(file = %file_name, technology = %name, color = %color.color, "Attached color");
                }
                None => {
                    tracing::debug!(file = %file_name, "No fingerprint record for icon");
                }
            }

            report.colors.push(IconColor {
                file_name,
                technology,
                color,
            });
        }

        tracing::info!(
            total = report.total,
            extracted = report.extracted,
            matched = report.matched,
            "Batch complete"
        );
        Ok(report)
    }

    /// Normalize, decode and reduce a single file
    ///
    /// A conversion failure is logged and returned as `Ok(None)`; decode
    /// failures are errors.
    pub fn extract_converted(&self, path: &Path) -> Result<Option<DominantColor>, RunError> {
        match self.prepare(path) {
            Some(working_path) => extract_file(&working_path).map(Some),
            None => Ok(None),
        }
    }

    /// Path to decode for `path`, or `None` when conversion failed
    fn prepare(&self, path: &Path) -> Option<PathBuf> {
        if !SourceFormat::from_path(path).needs_conversion() {
            return Some(path.to_path_buf());
        }
        match self.normalizer.normalize(path) {
            Ok(converted) => Some(converted),
            Err(e) => {
                tracing::warn!(%e, file = %path.display(), "Conversion failed, skipping");
                None
            }
        }
    }
}

/// Decode a raster file and return its dominant color
pub fn extract_file(path: &Path) -> Result<DominantColor, RunError> {
    let raster = decode_raster(path)?;
    Ok(dominant_color(&raster))
}

/// Decode with the best-matching registered decoder, then normalize the
/// color model to premultiplied RGBA8
///
/// Premultiplying makes every fully transparent pixel `(0, 0, 0, 0)`
/// regardless of the color stored under it.
pub fn decode_raster(path: &Path) -> Result<RasterBuffer, RunError> {
    let decode_error = |source: image::ImageError| RunError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let decoded = image::ImageReader::open(path)
        .map_err(|e| decode_error(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| decode_error(image::ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)?;

    let rgba = decoded.to_rgba8();
    let raster =
        RasterBuffer::from_rgba8(rgba.width(), rgba.height(), rgba.as_raw()).map_err(|source| {
            RunError::Rasterize {
                path: path.to_path_buf(),
                source,
            }
        })?;
    Ok(raster.premultiplied())
}

/// Regular files of `dir`, sorted by name
///
/// Directories and special entries are skipped.
fn list_regular_files(dir: &Path) -> Result<Vec<PathBuf>, RunError> {
    let read_dir_error = |source| RunError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let file_type = entry.file_type().map_err(read_dir_error)?;
        if file_type.is_file() {
            files.push(entry.path());
        } else {
            tracing::trace!(path = %entry.path().display(), "Skipping non-regular entry");
        }
    }
    files.sort();
    Ok(files)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
