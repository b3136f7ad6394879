use crate::model::Paper;

/// Case folds and trims a raw query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Returns the papers whose searchable text contains the query.
///
/// Always filters the full corpus passed in, preserving its order. A query that is
/// empty after trimming returns the whole corpus.
pub fn run(corpus: &[Paper], query: &str) -> Vec<Paper> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return corpus.to_vec();
    }

    corpus
        .iter()
        .filter(|paper| paper.searchable_text().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::fixtures::graph_corpus;

    fn titles(papers: &[Paper]) -> Vec<&str> {
        papers.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_matches_any_case() {
        let corpus = graph_corpus();

        for query in ["graph", "GRAPH", "Graph", "  gRaPh  "] {
            let result = run(&corpus, query);
            assert_eq!(titles(&result), vec!["Graph Theory", "graph Algorithms"]);
        }
    }

    #[test]
    fn test_empty_query_is_identity() {
        let corpus = graph_corpus();
        assert_eq!(run(&corpus, ""), corpus);
        assert_eq!(run(&corpus, "   \t"), corpus);
    }

    #[test]
    fn test_result_is_subsequence_of_corpus() {
        let corpus = graph_corpus();

        for query in ["e", "euler", "computer", "zzz", "of", "science history"] {
            let result = run(&corpus, query);
            let positions = result
                .iter()
                .map(|p| corpus.iter().position(|c| c.id == p.id).unwrap());
            let mut last = None;
            for pos in positions {
                assert!(last.map_or(true, |l| pos > l), "query {:?} reordered", query);
                last = Some(pos);
            }
        }
    }

    #[test]
    fn test_upper_and_lower_queries_agree() {
        let corpus = graph_corpus();
        for query in ["euler", "Topology", "notes on", "x"] {
            assert_eq!(run(&corpus, query), run(&corpus, &query.to_uppercase()));
        }
    }

    #[test]
    fn test_matches_authors_and_keywords() {
        let corpus = graph_corpus();

        assert_eq!(titles(&run(&corpus, "dijkstra")), vec!["graph Algorithms"]);
        assert_eq!(titles(&run(&corpus, "history")), vec!["Unrelated Topic"]);
        assert_eq!(
            titles(&run(&corpus, "euler")),
            vec!["Graph Theory", "graph Algorithms"]
        );
    }

    #[test]
    fn test_substring_not_tokens() {
        let corpus = graph_corpus();
        // "aph alg" spans the end of one word and start of the next.
        assert_eq!(titles(&run(&corpus, "aph alg")), vec!["graph Algorithms"]);
        assert!(run(&corpus, "algorithms graph").is_empty());
    }
}
