//! Pixel normalization, flattening and label encoding

use ndarray::{Array2, Array3, Axis};

use super::Dataset;
use crate::{Error, Result};

/// Raw image data as supplied by an external dataset source
///
/// Images are (samples, rows, columns) with pixel intensities in [0, 255];
/// labels are integer class indices.
#[derive(Debug, Clone)]
pub struct RawDataset {
    pub images: Array3<u8>,
    pub labels: Vec<u8>,
}

/// Flatten (n, h, w) images into (n, h*w) feature rows scaled into [0, 1]
///
/// Row-major flattening preserves sample order and total element count.
pub fn flatten_images(images: &Array3<u8>) -> Result<Array2<f32>> {
    let (n, h, w) = images.dim();
    let scaled = images.mapv(|p| f32::from(p) / 255.0);
    scaled
        .into_shape_with_order((n, h * w))
        .map_err(|e| Error::DataShape(format!("image flattening failed: {e}")))
}

/// One-hot encode integer class labels over `num_classes` columns
///
/// Fails if any label falls outside [0, num_classes).
pub fn one_hot(labels: &[u8], num_classes: usize) -> Result<Array2<f32>> {
    let mut encoded = Array2::zeros((labels.len(), num_classes));
    for (row, &label) in labels.iter().enumerate() {
        let class = usize::from(label);
        if class >= num_classes {
            return Err(Error::DataShape(format!(
                "label {class} outside class range 0..{num_classes}"
            )));
        }
        encoded[[row, class]] = 1.0;
    }
    Ok(encoded)
}

/// Recover integer class labels from one-hot (or probability) rows by argmax
pub fn decode_one_hot(encoded: &Array2<f32>) -> Vec<usize> {
    encoded
        .axis_iter(Axis(0))
        .map(|row| {
            row.iter()
                .enumerate()
                .fold((0, f32::NEG_INFINITY), |best, (i, &v)| {
                    if v > best.1 {
                        (i, v)
                    } else {
                        best
                    }
                })
                .0
        })
        .collect()
}

/// Prepare a raw dataset: normalize, flatten, one-hot encode
pub fn prepare(raw: &RawDataset, num_classes: usize) -> Result<Dataset> {
    let features = flatten_images(&raw.images)?;
    let labels = one_hot(&raw.labels, num_classes)?;
    Dataset::new(features, labels)
}
