//! Boundary to the face embedding model.
//!
//! The engine never looks at pixels. Whatever turns image bytes into an
//! [`Embedding`] implements [`Extractor`]; the host creates one handle at
//! startup and lends it to every request.

use anyhow::{Context, Result};
use facematch_engine::Embedding;

pub trait Extractor {
    /// Extracts the embedding of the face in `image`.
    ///
    /// `Ok(None)` means the image was readable but held no face.
    fn extract(&mut self, image: &[u8]) -> Result<Option<Embedding>>;
}

/// Reads descriptors already computed by an external detector.
///
/// The input is a JSON array of numbers, or `null` when the detector found
/// no face.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDescriptor;

impl Extractor for JsonDescriptor {
    fn extract(&mut self, image: &[u8]) -> Result<Option<Embedding>> {
        let values: Option<Vec<f32>> =
            serde_json::from_slice(image).context("parsing face descriptor")?;
        match values {
            Some(values) => {
                let embedding = Embedding::new(values).context("invalid face descriptor")?;
                Ok(Some(embedding))
            }
            None => Ok(None),
        }
    }
}
