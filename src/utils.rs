/// Environment variable holding the default OpenAI API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Resolves the API key to use for a call: the explicit one if given,
/// otherwise the `OPENAI_API_KEY` environment variable.
pub(crate) fn resolve_api_key(explicit: Option<&str>) -> Option<String> {
    match explicit {
        Some(key) => Some(key.to_string()),
        None => std::env::var(API_KEY_VAR).ok(),
    }
}

/// Returns all elements of `base` followed by the elements of `extra`
/// that aren't already present, preserving first-occurrence order.
pub fn merge_unique<T: Clone + PartialEq>(base: &[T], extra: &[T]) -> Vec<T> {
    let mut merged = base.to_vec();
    for item in extra {
        if !merged.contains(item) {
            merged.push(item.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_unique_appends_only_novel_elements() {
        let base = vec!["get_weather", "get_news", "get_time"];
        let extra = vec!["get_news", "send_email", "get_weather", "set_alarm"];

        let merged = merge_unique(&base, &extra);
        assert_eq!(
            merged,
            vec!["get_weather", "get_news", "get_time", "send_email", "set_alarm"]
        );
    }

    #[test]
    fn test_merge_unique_keeps_base_duplicates() {
        // only the second sequence is de-duplicated against the result
        let base = vec![1, 2, 2, 3];
        let merged = merge_unique(&base, &[3, 4, 4]);
        assert_eq!(merged, vec![1, 2, 2, 3, 4]);
    }

    #[test]
    fn test_merge_unique_empty_inputs() {
        let merged = merge_unique::<u8>(&[], &[]);
        assert!(merged.is_empty());

        let merged = merge_unique(&[], &[5, 6]);
        assert_eq!(merged, vec![5, 6]);

        let merged = merge_unique(&[5, 6], &[]);
        assert_eq!(merged, vec![5, 6]);
    }
}
