use serde::{Deserialize, Serialize};

/// The questions the tutor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Query {
    Area,
    Perimeter,
    Classify,
    Help,
}

impl Query {
    /// Keyword table, checked in order; the first keyword found wins.
    const KEYWORDS: [(&'static str, Query); 3] = [
        ("area", Query::Area),
        ("perimeter", Query::Perimeter),
        ("type", Query::Classify),
    ];

    /// Case-insensitive substring match against the keyword table.
    pub fn parse(text: &str) -> Self {
        let text = text.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| text.contains(keyword))
            .map(|(_, query)| *query)
            .unwrap_or(Query::Help)
    }
}
