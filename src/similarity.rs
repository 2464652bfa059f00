use crate::embeddings::get_embedding;

/// A precomputed embedding for a callable function's description.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionEmbedding {
    /// Identifier of the function.
    pub name: String,
    /// The numerical embedding vector of the function's description.
    pub embedding: Vec<f64>,
}

/// A ranked lookup result.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestMatch {
    /// Identifier of the matched function.
    pub name: String,
    /// Cosine distance to the query, lower is closer.
    pub distance: f64,
}

/// Cosine distance between two equal-length vectors:
/// `1 - dot(a, b) / (norm(a) * norm(b))`.
///
/// Zero vectors aren't guarded against; the result is NaN.
#[must_use]
pub fn cosine_distance(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    1.0 - dot / (norm_a * norm_b)
}

/// Returns the `k` function embeddings closest to `query` by cosine
/// distance, ascending.
///
/// Embeds the query with the default model, then ranks `functions` against
/// it. Returns `None` when `functions` is empty (before any network call)
/// or when the query embedding couldn't be computed.
pub async fn find_nearest(
    query: &str,
    functions: &[FunctionEmbedding],
    k: usize,
) -> Option<Vec<NearestMatch>> {
    if functions.is_empty() {
        return None;
    }

    let query_embedding = get_embedding(query, None, None).await?;
    Some(rank(&query_embedding, functions, k))
}

fn rank(query_embedding: &[f64], functions: &[FunctionEmbedding], k: usize) -> Vec<NearestMatch> {
    let mut matches = functions
        .iter()
        .map(|f| NearestMatch {
            name: f.name.clone(),
            distance: cosine_distance(query_embedding, &f.embedding),
        })
        .collect::<Vec<_>>();
    matches.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(k);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_distance_is_zero() {
        let v = vec![0.3, -1.2, 4.5, 0.01];
        assert!(cosine_distance(&v, &v).abs() < 1e-10);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![-4.0, 0.5, 6.0];
        assert_eq!(cosine_distance(&a, &b), cosine_distance(&b, &a));
    }

    #[test]
    fn test_opposite_vectors_have_distance_two() {
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];
        assert!((cosine_distance(&a, &b) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_rank_sorts_ascending_and_truncates() {
        let functions = vec![
            FunctionEmbedding {
                name: "far".to_string(),
                embedding: vec![-1.0, 0.0],
            },
            FunctionEmbedding {
                name: "near".to_string(),
                embedding: vec![1.0, 0.1],
            },
            FunctionEmbedding {
                name: "orthogonal".to_string(),
                embedding: vec![0.0, 1.0],
            },
        ];

        let query = vec![1.0, 0.0];

        let ranked = rank(&query, &functions, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "near");
        assert_eq!(ranked[1].name, "orthogonal");
        assert!(ranked[0].distance < ranked[1].distance);
    }

    #[test]
    fn test_rank_with_k_larger_than_list() {
        let functions = vec![FunctionEmbedding {
            name: "only".to_string(),
            embedding: vec![1.0, 2.0],
        }];

        let ranked = rank(&[1.0, 2.0], &functions, 5);
        assert_eq!(ranked.len(), 1);
        assert!(ranked[0].distance.abs() < 1e-10);
    }

    #[tokio::test]
    async fn test_find_nearest_empty_list_returns_none() {
        // no api key in scope; must return before reaching the network
        let result = find_nearest("some query", &[], 1).await;
        assert!(result.is_none());
    }
}
