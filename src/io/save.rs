//! Model saving functionality

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::model::Mlp;
use crate::{Error, Result};

use super::model::Topology;
use super::WEIGHTS_MAGIC;

/// Save a model as `<stem>.json` (topology) plus `<stem>.weights` (binary blob)
///
/// The blob holds every parameter tensor keyed by name: magic, entry count,
/// then per entry a length-prefixed key and little-endian f32 values.
///
/// # Example
///
/// ```no_run
/// use afinar::io::save_model;
/// # let model: afinar::model::Mlp = todo!();
///
/// save_model(&model, "digit-classifier", "out/model").unwrap();
/// ```
pub fn save_model(model: &Mlp, name: &str, stem: impl AsRef<Path>) -> Result<()> {
    let stem = stem.as_ref();

    let topology = Topology::describe(name, model);
    let json = serde_json::to_string_pretty(&topology)
        .map_err(|e| Error::Persistence(format!("topology serialization failed: {e}")))?;
    let mut file = File::create(stem.with_extension("json"))?;
    file.write_all(json.as_bytes())?;

    let params = model.named_parameters();
    let mut blob = Vec::new();
    blob.extend_from_slice(&WEIGHTS_MAGIC);
    blob.extend_from_slice(&(params.len() as u32).to_le_bytes());
    for (key, values) in &params {
        let key_bytes = key.as_bytes();
        blob.extend_from_slice(&(key_bytes.len() as u32).to_le_bytes());
        blob.extend_from_slice(key_bytes);
        blob.extend_from_slice(&(values.len() as u64).to_le_bytes());
        for v in values {
            blob.extend_from_slice(&v.to_le_bytes());
        }
    }
    let mut file = File::create(stem.with_extension("weights"))?;
    file.write_all(&blob)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Initializer, DROPOUT_RATE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    fn model() -> Mlp {
        let mut rng = StdRng::seed_from_u64(21);
        Mlp::new(4, 6, 3, Initializer::GlorotNormal, DROPOUT_RATE, &mut rng)
    }

    #[test]
    fn test_save_writes_both_files() {
        let dir = tempdir().expect("temp dir");
        let stem = dir.path().join("model");

        save_model(&model(), "test-model", &stem).expect("save should succeed");

        assert!(stem.with_extension("json").exists());
        assert!(stem.with_extension("weights").exists());
    }

    #[test]
    fn test_topology_is_human_readable_json() {
        let dir = tempdir().expect("temp dir");
        let stem = dir.path().join("model");
        save_model(&model(), "readable", &stem).expect("save should succeed");

        let content =
            std::fs::read_to_string(stem.with_extension("json")).expect("file readable");
        assert!(content.contains("readable"));
        assert!(content.contains("hidden1"));
        assert!(content.contains("softmax"));
        // Pretty-printed, not a single line
        assert!(content.lines().count() > 1);
    }

    #[test]
    fn test_weights_blob_layout() {
        let dir = tempdir().expect("temp dir");
        let stem = dir.path().join("model");
        save_model(&model(), "blob", &stem).expect("save should succeed");

        let blob = std::fs::read(stem.with_extension("weights")).expect("file readable");
        assert_eq!(&blob[0..4], b"AFNW");
        let count = u32::from_le_bytes([blob[4], blob[5], blob[6], blob[7]]);
        // Three dense layers, two tensors each
        assert_eq!(count, 6);
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let result = save_model(&model(), "x", "/nonexistent/directory/model");
        assert!(result.is_err());
    }
}
