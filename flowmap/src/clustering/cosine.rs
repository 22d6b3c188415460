use crate::error::FlowmapError;

/// Cosine of the angle between two vectors, a similarity measure in `[-1, 1]`.
///
/// Fails if the vectors have different dimensions. If either vector has zero
/// magnitude the similarity is undefined and NaN is returned, so sequences
/// with all-zero attribute vectors can be compared without special casing.
pub fn cosine(v1: &[f64], v2: &[f64]) -> Result<f64, FlowmapError> {
    Ok(dot(v1, v2)? / (magnitude(v1) * magnitude(v2)))
}

/// Dot product of two vectors of the same dimension.
pub fn dot(v1: &[f64], v2: &[f64]) -> Result<f64, FlowmapError> {
    if v1.len() != v2.len() {
        return Err(FlowmapError::DimensionMismatch(v1.len(), v2.len()));
    }

    Ok(v1.iter().zip(v2).map(|(a, b)| a * b).sum())
}

/// Euclidian magnitude of a vector.
pub fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|a| a * a).sum::<f64>().sqrt()
}
