use serde::Serialize;
use std::path::Path;

use crate::error::DatabaseError;
use crate::models::FingerprintDatabase;

/// Indentation used when writing the database
const INDENT: &[u8] = b"    ";

/// Read and parse the whole fingerprint database
pub fn load(path: &Path) -> Result<FingerprintDatabase, DatabaseError> {
    let content = std::fs::read(path).map_err(|source| DatabaseError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let database: FingerprintDatabase =
        serde_json::from_slice(&content).map_err(|source| DatabaseError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        path = %path.display(),
        technologies = database.apps.len(),
        "Loaded fingerprint database"
    );
    Ok(database)
}

/// Serialize the database with 4-space indentation
pub fn to_pretty_json(database: &FingerprintDatabase) -> Result<Vec<u8>, DatabaseError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    database
        .serialize(&mut serializer)
        .map_err(DatabaseError::Serialize)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Overwrite `path` with the full database
pub fn save(database: &FingerprintDatabase, path: &Path) -> Result<(), DatabaseError> {
    let data = to_pretty_json(database)?;
    std::fs::write(path, data).map_err(|source| DatabaseError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        technologies = database.apps.len(),
        "Saved fingerprint database"
    );
    Ok(())
}
