/// Cosine similarity in [-1, 1]. Zero-norm or mismatched inputs score 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        tracing::warn!(
            a_len = a.len(),
            b_len = b.len(),
            "embedding dimension mismatch; returning zero similarity"
        );
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored<T> {
    pub score: f32,
    pub item: T,
}

/// Scores every candidate against `query`, best first.
///
/// The sort is stable, so equal scores keep candidate order.
pub fn rank<'a, T, I>(query: &[f32], candidates: I) -> Vec<Scored<T>>
where
    I: IntoIterator<Item = (&'a [f32], T)>,
{
    let mut scored = candidates
        .into_iter()
        .map(|(embedding, item)| Scored {
            score: cosine_similarity(query, embedding),
            item,
        })
        .collect::<Vec<_>>();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}
