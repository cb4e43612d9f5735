use crate::{embedding::Embedding, error::MatchError};

/// Euclidean (L2) distance between two embeddings of equal dimensionality.
///
/// Squares are summed in `f64`, left to right in index order, so the same
/// pair always produces the same bits.
pub fn euclidean_distance(a: &Embedding, b: &Embedding) -> Result<f64, MatchError> {
    if a.dim() != b.dim() {
        return Err(MatchError::DimensionMismatch {
            expected: a.dim(),
            found: b.dim(),
        });
    }

    let sum = a.iter().zip(b.iter()).fold(0.0f64, |acc, (x, y)| {
        let d = f64::from(*x) - f64::from(*y);
        acc + d * d
    });

    Ok(sum.sqrt())
}
