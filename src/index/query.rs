//! Ranked substring search over a built index

use crate::extract::text::cap_chars;
use crate::model::{SearchIndex, SearchResult};

/// Characters of context kept on each side of a match position
pub const SNIPPET_CONTEXT: usize = 100;

/// Snippet length when the query is not found in the body
pub const SNIPPET_FALLBACK: usize = 200;

/// Matches a query against an index and ranks the hits
///
/// Containment is case-insensitive against each page's title and body; a
/// match on either qualifies the page. Pages are considered in index
/// order and collection stops once `max_results` hits are found. The
/// final ordering places title-matching results before content-only
/// matches, preserving relative order within each group.
pub fn search_index(index: &SearchIndex, query: &str, max_results: usize) -> Vec<SearchResult> {
    if query.is_empty() || max_results == 0 {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut hits: Vec<(bool, SearchResult)> = Vec::new();

    for page in &index.pages {
        let title_match = page.title.to_lowercase().contains(&needle);
        let body_match = page.body.to_lowercase().contains(&needle);

        if !title_match && !body_match {
            continue;
        }

        hits.push((
            title_match,
            SearchResult {
                url: page.url.clone(),
                title: page.title.clone(),
                snippet: build_snippet(&page.body, &needle),
                kind: page.kind,
                section: page.section.clone(),
            },
        ));

        if hits.len() == max_results {
            break;
        }
    }

    // Stable sort on a single boolean key: title matches first
    hits.sort_by_key(|(title_match, _)| !*title_match);

    hits.into_iter().map(|(_, result)| result).collect()
}

/// Builds a bounded context excerpt around the first query occurrence
///
/// The window spans [`SNIPPET_CONTEXT`] characters on each side of the
/// match position, ellipsis-marked where it truncates the body. A query
/// absent from the body falls back to the body's first
/// [`SNIPPET_FALLBACK`] characters.
fn build_snippet(body: &str, needle: &str) -> String {
    let lowered = body.to_lowercase();
    let Some(byte_pos) = lowered.find(needle) else {
        return cap_chars(body, SNIPPET_FALLBACK);
    };

    let match_pos = lowered[..byte_pos].chars().count();
    let chars: Vec<char> = body.chars().collect();
    let start = match_pos.saturating_sub(SNIPPET_CONTEXT);
    let end = (match_pos + SNIPPET_CONTEXT).min(chars.len());

    let mut snippet = String::new();
    if start > 0 {
        snippet.push_str("...");
    }
    snippet.extend(&chars[start..end]);
    if end < chars.len() {
        snippet.push_str("...");
    }

    snippet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PageKind, PageRecord};

    fn page(title: &str, body: &str) -> PageRecord {
        PageRecord::new(
            format!("https://docs.example.com/{}.html", title),
            title.to_string(),
            body.to_string(),
            PageKind::Page,
            "main".to_string(),
        )
    }

    fn index_of(pages: Vec<PageRecord>) -> SearchIndex {
        SearchIndex::new("https://docs.example.com".to_string(), pages)
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let index = index_of(vec![page("Widget", "widget body")]);
        assert!(search_index(&index, "", 10).is_empty());
    }

    #[test]
    fn test_zero_limit_returns_nothing() {
        let index = index_of(vec![page("Widget", "widget body")]);
        assert!(search_index(&index, "widget", 0).is_empty());
    }

    #[test]
    fn test_case_insensitive_containment() {
        let index = index_of(vec![page("Widget", "nothing relevant")]);
        let results = search_index(&index, "wIdGeT", 10);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_result_cap() {
        let pages = (0..8).map(|i| page(&format!("p{}", i), "common term")).collect();
        let index = index_of(pages);
        assert_eq!(search_index(&index, "common", 3).len(), 3);
    }

    #[test]
    fn test_title_matches_rank_first() {
        let index = index_of(vec![
            page("Alpha", "mentions gadget here"),
            page("Gadget", "unrelated body"),
            page("Beta", "another gadget mention"),
        ]);

        let results = search_index(&index, "gadget", 10);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].title, "Gadget");
        // Content-only hits keep index order
        assert_eq!(results[1].title, "Alpha");
        assert_eq!(results[2].title, "Beta");
    }

    #[test]
    fn test_collection_stops_in_index_order_before_ranking() {
        // The cap applies during collection, so a later title match is
        // never considered once earlier content matches fill the quota.
        let index = index_of(vec![
            page("Alpha", "gadget a"),
            page("Beta", "gadget b"),
            page("Gadget", "body"),
        ]);

        let results = search_index(&index, "gadget", 2);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Alpha");
        assert_eq!(results[1].title, "Beta");
    }

    #[test]
    fn test_snippet_context_window() {
        let body = format!("{}gadget{}", "a".repeat(300), "b".repeat(300));
        let index = index_of(vec![page("P", &body)]);

        let results = search_index(&index, "gadget", 1);
        let snippet = &results[0].snippet;
        assert!(snippet.starts_with("..."));
        assert!(snippet.ends_with("..."));
        assert!(snippet.contains("gadget"));
    }

    #[test]
    fn test_snippet_bounded_for_any_query() {
        let body = "x".repeat(800);
        let index = index_of(vec![page("Target needle title", &body)]);

        // Query matches the title only; snippet falls back to body start
        let results = search_index(&index, "needle", 1);
        assert!(results[0].snippet.chars().count() <= 2 * SNIPPET_CONTEXT + 6);
        assert_eq!(results[0].snippet.chars().count(), SNIPPET_FALLBACK);
    }

    #[test]
    fn test_snippet_no_ellipsis_at_body_start() {
        let body = format!("gadget{}", "x".repeat(50));
        let index = index_of(vec![page("P", &body)]);

        let results = search_index(&index, "gadget", 1);
        assert!(!results[0].snippet.starts_with("..."));
        assert!(!results[0].snippet.ends_with("..."));
    }

    #[test]
    fn test_snippet_length_invariant() {
        for body_len in [0usize, 10, 150, 500, 800] {
            let body = "word ".repeat(body_len / 5);
            let index = index_of(vec![page("P", &body)]);
            for query in ["word", "absent-from-body", "P"] {
                for result in search_index(&index, query, 5) {
                    assert!(
                        result.snippet.chars().count() <= 2 * SNIPPET_CONTEXT + 6,
                        "snippet too long for query '{}', body len {}",
                        query,
                        body_len
                    );
                }
            }
        }
    }
}
