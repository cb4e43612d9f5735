use anyhow::{Context, Result};
use facematch_engine::{Candidate, MatchError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_COLLECTION: &str = "default";

const GALLERY_FILE: &str = "faces.bin";

/// One enrolled face. The embedding is kept as a plain vector at rest and
/// only validated when a match snapshot is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceRecord {
    pub id: String,
    pub label: String,
    pub embedding: Vec<f32>,
}

fn collection_path(root: &Path, collection: &str) -> Result<PathBuf> {
    if collection.is_empty()
        || collection == "."
        || collection == ".."
        || collection.contains(['/', '\\'])
    {
        anyhow::bail!("invalid collection name: {:?}", collection);
    }
    Ok(root.join(collection))
}

pub fn load_records(root: &Path, collection: &str) -> Result<Vec<FaceRecord>> {
    let file = collection_path(root, collection)?.join(GALLERY_FILE);

    if !file.exists() {
        return Ok(vec![]);
    }

    let data = std::fs::read(&file).with_context(|| format!("reading {}", file.display()))?;
    postcard::from_bytes(&data).with_context(|| format!("decoding {}", file.display()))
}

fn write_records(root: &Path, collection: &str, records: &[FaceRecord]) -> Result<()> {
    let path = collection_path(root, collection)?;
    std::fs::create_dir_all(&path).with_context(|| format!("creating {}", path.display()))?;

    let file = path.join(GALLERY_FILE);
    let tmp = path.join(format!("{GALLERY_FILE}.tmp"));
    let data = postcard::to_allocvec(records)?;
    std::fs::write(&tmp, data).with_context(|| format!("writing {}", tmp.display()))?;
    std::fs::rename(&tmp, &file).with_context(|| format!("replacing {}", file.display()))?;
    Ok(())
}

/// Dimensionality of the collection, taken from its first usable record.
pub fn dimension(records: &[FaceRecord]) -> Option<usize> {
    records
        .iter()
        .map(|r| r.embedding.len())
        .find(|&len| len > 0)
}

pub fn save_record(root: &Path, collection: &str, record: FaceRecord) -> Result<()> {
    if record.embedding.is_empty() {
        anyhow::bail!("refusing to store an empty embedding for {}", record.label);
    }

    let mut records = load_records(root, collection)?;
    if let Some(expected) = dimension(&records) {
        let found = record.embedding.len();
        if found != expected {
            return Err(MatchError::DimensionMismatch { expected, found })
                .with_context(|| format!("enrolling {} into {}", record.label, collection));
        }
    }

    records.push(record);
    write_records(root, collection, &records)
}

/// Removes the record with `id`. Returns whether anything was removed.
pub fn remove_record(root: &Path, collection: &str, id: &str) -> Result<bool> {
    let mut records = load_records(root, collection)?;
    let before = records.len();
    records.retain(|r| r.id != id);
    if records.len() == before {
        return Ok(false);
    }
    write_records(root, collection, &records)?;
    Ok(true)
}

pub fn purge(root: &Path, collection: &str) -> Result<()> {
    let path = collection_path(root, collection)?;
    if path.exists() {
        std::fs::remove_dir_all(&path).with_context(|| format!("removing {}", path.display()))?;
    }
    Ok(())
}

/// Builds the match snapshot for `records`, keyed by record index.
pub fn candidates(records: &[FaceRecord]) -> Vec<Candidate<usize>> {
    records
        .iter()
        .enumerate()
        .map(|(idx, r)| Candidate::from_raw(idx, &r.embedding))
        .collect()
}
