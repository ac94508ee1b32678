//! Model loading functionality

use std::path::Path;

use crate::model::Mlp;
use crate::{Error, Result};

use super::model::Topology;
use super::WEIGHTS_MAGIC;

/// Load a model saved by [`save_model`](super::save_model)
///
/// Reads `<stem>.json` and `<stem>.weights`, validates that the blob covers
/// exactly the parameters the topology calls for, and fails with
/// [`Error::Persistence`] on missing files, bad magic, unknown keys, or
/// shape mismatches.
pub fn load_model(stem: impl AsRef<Path>) -> Result<Mlp> {
    let stem = stem.as_ref();

    let json = std::fs::read_to_string(stem.with_extension("json"))
        .map_err(|e| Error::Persistence(format!("topology unreadable: {e}")))?;
    let topology: Topology = serde_json::from_str(&json)
        .map_err(|e| Error::Persistence(format!("topology parse failed: {e}")))?;
    let mut model = topology.instantiate()?;

    let blob = std::fs::read(stem.with_extension("weights"))
        .map_err(|e| Error::Persistence(format!("weights unreadable: {e}")))?;
    let entries = parse_weights(&blob)?;

    let expected = model.named_parameters().len();
    if entries.len() != expected {
        return Err(Error::Persistence(format!(
            "weights blob holds {} tensors, topology expects {expected}",
            entries.len()
        )));
    }
    for (key, values) in &entries {
        model.set_parameter(key, values)?;
    }

    Ok(model)
}

/// Decode the keyed weights blob
fn parse_weights(blob: &[u8]) -> Result<Vec<(String, Vec<f32>)>> {
    let mut cursor = Cursor { blob, pos: 0 };

    let magic = cursor.take(4)?;
    if magic != WEIGHTS_MAGIC {
        return Err(Error::Persistence("weights blob has bad magic".to_string()));
    }

    let count = u32::from_le_bytes(
        cursor
            .take(4)?
            .try_into()
            .map_err(|_| truncated())?,
    );

    let mut entries = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let key_len = u32::from_le_bytes(cursor.take(4)?.try_into().map_err(|_| truncated())?);
        let key = String::from_utf8(cursor.take(key_len as usize)?.to_vec())
            .map_err(|_| Error::Persistence("parameter key is not UTF-8".to_string()))?;

        let value_len =
            u64::from_le_bytes(cursor.take(8)?.try_into().map_err(|_| truncated())?);
        let byte_len = (value_len as usize).checked_mul(4).ok_or_else(truncated)?;
        let bytes = cursor.take(byte_len)?;
        let values = bytes
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        entries.push((key, values));
    }

    if cursor.pos != blob.len() {
        return Err(Error::Persistence("trailing bytes in weights blob".to_string()));
    }
    Ok(entries)
}

struct Cursor<'a> {
    blob: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(n).ok_or_else(truncated)?;
        let slice = self.blob.get(self.pos..end).ok_or_else(truncated)?;
        self.pos = end;
        Ok(slice)
    }
}

fn truncated() -> Error {
    Error::Persistence("weights blob is truncated".to_string())
}
