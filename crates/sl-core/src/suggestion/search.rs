use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Case-insensitive fuzzy subsequence filter.
///
/// Keeps items whose extracted text contains every query character in order.
/// Matches are ordered by score, best first; equal scores keep input order.
/// An empty query keeps everything in input order.
pub fn fuzzy_filter<T, F>(query: &str, items: Vec<T>, extract: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items;
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let mut needle_buf = Vec::new();
    let mut haystack_buf = Vec::new();
    let needle = Utf32Str::new(&query, &mut needle_buf);

    let mut scored: Vec<(u16, usize, T)> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let haystack = Utf32Str::new(extract(&item), &mut haystack_buf);
            let score = matcher.fuzzy_match(haystack, needle)?;
            Some((score, index, item))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    scored.into_iter().map(|(_, _, item)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter<'a>(query: &str, items: &[&'a str]) -> Vec<&'a str> {
        fuzzy_filter(query, items.to_vec(), |item| item)
    }

    #[test]
    fn test_prefix_query_matches_subsequence() {
        assert_eq!(filter("pri", &["Primary/500", "Secondary/100"]), ["Primary/500"]);
    }

    #[test]
    fn test_match_ignores_case() {
        assert_eq!(filter("PRI", &["primary"]), ["primary"]);
    }

    #[test]
    fn test_empty_query_keeps_input_order() {
        let items = ["b", "a", "c"];
        assert_eq!(filter("", &items), items);
        assert_eq!(filter("   ", &items), items);
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        assert_eq!(filter("blue", &["blue/2", "blue/1", "red"]), ["blue/2", "blue/1"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter("xyz", &["Primary", "Secondary"]).is_empty());
    }
}
