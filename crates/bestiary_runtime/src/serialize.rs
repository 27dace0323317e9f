//! Entity serialization using `MessagePack`.
//!
//! Cached parse results are stored with the input they were parsed from,
//! so a file written by an older parser version loads fine and is brought
//! up to date by [`reparse_file`].

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use bestiary_foundation::{Error, ErrorContext, Result};
use bestiary_grammar::DomainParsers;
use bestiary_models::GameEntity;
use bestiary_visitor::{PassReport, ReparseVisitor, run_pass};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serializes a value to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(value).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a value from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))
}

/// Saves entities to a file, replacing it if it exists.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_to_file<P: AsRef<Path>>(entities: &[GameEntity], path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(entities)?;
    let file = File::create(path)
        .map_err(|e| Error::io(format!("failed to create file '{}': {e}", path.display())))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| Error::io(format!("failed to write to file '{}': {e}", path.display())))?;

    log::debug!("saved {} entities to {}", entities.len(), path.display());
    Ok(())
}

/// Loads entities from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<GameEntity>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::io(format!("failed to open file '{}': {e}", path.display())))?;

    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(format!("failed to read file '{}': {e}", path.display())))?;

    let entities: Vec<GameEntity> = from_bytes(&bytes).map_err(|e| {
        e.with_context(ErrorContext::new().with_source(path.display().to_string()))
    })?;
    log::debug!("loaded {} entities from {}", entities.len(), path.display());
    Ok(entities)
}

/// Loads `input`, brings every cached parse up to date, and writes the
/// result to `output` if anything changed.
///
/// # Errors
///
/// Returns an error if either file cannot be accessed or decoded.
pub fn reparse_file(input: &Path, output: &Path, parsers: DomainParsers) -> Result<PassReport> {
    let mut entities = load_from_file(input)?;
    let mut reparse = ReparseVisitor::new(parsers);
    let report = run_pass(&mut [&mut reparse], &mut entities);
    let stats = reparse.stats();
    log::info!(
        "{}: {} parseables visited, {} re-parsed, {} of {} entities changed",
        input.display(),
        stats.visited,
        stats.reparsed,
        report.changed.len(),
        report.visited
    );
    if report.any_changed() || input != output {
        save_to_file(&entities, output)?;
    }
    Ok(report)
}
