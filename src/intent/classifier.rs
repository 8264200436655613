use crate::intent::models::{Query, QueryKind};
use once_cell::sync::Lazy;
use regex::Regex;

// "books by <author>" first, then any "by <author>" anywhere in the sentence
static BOOKS_BY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"books?\s+by\s+(.+)").expect("static regex"));
static BY_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"by\s+(.+)").expect("static regex"));

// "recommend ... books", "suggest ... novels", "best fantasy books", "top ya novels"
static RECOMMEND_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(recommend|suggest).*(books|novels|reads|titles)|(best|top)\s+([a-z ]+)\s+(books|novels)",
    )
    .expect("static regex")
});

// Leftmost keyword wins; alternatives are tried in order at each position
static GENRE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(mystery|romance|fantasy|science fiction|sci[- ]?fi|thriller|self[- ]?help|ai|machine learning|history|biography|horror|fiction|non[- ]fiction|young adult|ya)",
    )
    .expect("static regex")
});

/// Classify free text into an author, genre or generic search query.
///
/// Never fails: anything that is neither an author lookup nor a recommendation
/// naming a known genre becomes a generic search on the original text.
pub fn classify(text: &str) -> Query {
    let lower = text.to_lowercase();
    let lower = lower.trim();

    if let Some(author) = parse_author(lower) {
        return Query::new(QueryKind::Author, author);
    }

    if let Some(genre) = parse_genre(lower) {
        return Query::new(QueryKind::Genre, genre);
    }

    Query::new(QueryKind::Search, text)
}

fn parse_author(lower: &str) -> Option<String> {
    let caps = BOOKS_BY_PATTERN
        .captures(lower)
        .or_else(|| BY_PATTERN.captures(lower))?;
    caps.get(1).map(|m| m.as_str().trim().to_string())
}

/// A recommendation without a genre keyword yields nothing.
fn parse_genre(lower: &str) -> Option<String> {
    if !RECOMMEND_PATTERN.is_match(lower) {
        return None;
    }
    GENRE_PATTERN.find(lower).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(term: &str) -> Query {
        Query::new(QueryKind::Author, term)
    }

    fn genre(term: &str) -> Query {
        Query::new(QueryKind::Genre, term)
    }

    fn search(term: &str) -> Query {
        Query::new(QueryKind::Search, term)
    }

    #[test]
    fn test_books_by_author() {
        assert_eq!(classify("books by J.K. Rowling"), author("j.k. rowling"));
        assert_eq!(classify("Book by Ursula Le Guin"), author("ursula le guin"));
        assert_eq!(
            classify("  Books   by  Brandon Sanderson  "),
            author("brandon sanderson")
        );
    }

    #[test]
    fn test_bare_by_triggers_author() {
        assert_eq!(
            classify("anything written by Terry Pratchett?"),
            author("terry pratchett?")
        );
        // "by" inside another word still counts
        assert_eq!(classify("baby shark"), author("shark"));
    }

    #[test]
    fn test_recommendation_with_genre() {
        assert_eq!(classify("recommend mystery books"), genre("mystery"));
        assert_eq!(classify("Can you suggest some Sci-Fi novels?"), genre("sci-fi"));
        assert_eq!(classify("best young adult books"), genre("young adult"));
        assert_eq!(classify("top science fiction novels"), genre("science fiction"));
        assert_eq!(classify("suggest self help reads"), genre("self help"));
    }

    #[test]
    fn test_leftmost_keyword_is_substring_match() {
        // "ai" inside "detailed" appears before "history"
        assert_eq!(classify("recommend detailed history books"), genre("ai"));
    }

    #[test]
    fn test_recommendation_without_genre_falls_through() {
        assert_eq!(
            classify("recommend good books"),
            search("recommend good books")
        );
    }

    #[test]
    fn test_genre_keyword_without_recommendation_is_search() {
        assert_eq!(
            classify("give me books about AI"),
            search("give me books about AI")
        );
        assert_eq!(classify("mystery"), search("mystery"));
    }

    #[test]
    fn test_author_rule_wins_over_genre() {
        assert_eq!(
            classify("recommend fantasy books by Robin Hobb"),
            author("robin hobb")
        );
    }

    #[test]
    fn test_fallback_keeps_original_text() {
        assert_eq!(classify("  Dune Messiah "), search("  Dune Messiah "));
    }

    #[test]
    fn test_classification_is_total_and_deterministic() {
        let inputs = [
            "x",
            "by",
            "by ",
            "recommend",
            "top books",
            "best   books",
            "ÉTÉ by Camus",
            "🙂",
            "recommend\nmystery books",
        ];
        for input in inputs {
            let first = classify(input);
            assert_eq!(first, classify(input), "non-deterministic for {input:?}");
            assert!(matches!(
                first.kind,
                QueryKind::Author | QueryKind::Genre | QueryKind::Search
            ));
        }
    }
}
