use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    Author,
    Genre,
    Search,
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Author => "author",
            QueryKind::Genre => "genre",
            QueryKind::Search => "search",
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Query {
    pub kind: QueryKind,
    pub term: String, // e.g. "j.k. rowling", "mystery"
}

impl Query {
    pub fn new(kind: QueryKind, term: impl Into<String>) -> Self {
        Self {
            kind,
            term: term.into(),
        }
    }

    /// Term in the Google Books query grammar
    pub fn search_term(&self) -> String {
        match self.kind {
            QueryKind::Author => format!("inauthor:{}", self.term),
            QueryKind::Genre => format!("{}+books", self.term),
            QueryKind::Search => self.term.clone(),
        }
    }
}
