//! Decides whether a search string needs AI enhancement.

/// Phrases that mark a query as natural language. Matched as lower-case substrings.
const NATURAL_LANGUAGE_KEYWORDS: &[&str] = &[
    // question words
    "what", "which", "who", "where", "when", "how", "why", "can i", "is there", "are there",
    "find me", "show me", "looking for", "search for",
    // preferences
    "i want", "i need", "i'd like", "i would like", "want to learn", "learn to", "prefer",
    "best", "good", "top rated", "recommend",
    // descriptive qualifiers
    "for kids", "for children", "for adults", "for beginners", "for seniors", "beginner",
    "advanced", "cheap", "affordable", "budget", "under $", "less than", "near me", "nearby",
    "online", "in person", "in-person", "free trial", "certified", "experienced",
    "traditional", "authentic",
];

const MAX_KEYWORD_QUERY_WORDS: usize = 3;

pub fn is_natural_language_query(query: &str) -> bool {
    let lowered = query.to_lowercase();
    if NATURAL_LANGUAGE_KEYWORDS.iter().any(|keyword| lowered.contains(keyword)) {
        return true;
    }
    lowered.split_whitespace().count() > MAX_KEYWORD_QUERY_WORDS
}
