//! Ordered join of per-chunk outputs.

/// Concatenates chunk outputs in chunk-index order.
pub fn concat<T>(chunks: Vec<Vec<T>>) -> Vec<T> {
    let total = chunks.iter().map(Vec::len).sum();
    let mut joined = Vec::with_capacity(total);
    for chunk in chunks {
        joined.extend(chunk);
    }
    joined
}
