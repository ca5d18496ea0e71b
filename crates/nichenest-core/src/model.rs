//! Value types received from the generative backend.
//!
//! Everything here is immutable value data: no entity has identity beyond
//! its fields. Wire names follow the JSON the backend is asked to produce
//! (camelCase, with the keyword length class serialized as `type`).

use serde::{Deserialize, Serialize};

/// Recency window the backend should reason over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "24hours")]
    Last24Hours,
    #[serde(rename = "week")]
    LastWeek,
    #[serde(rename = "month")]
    LastMonth,
    #[serde(rename = "3months")]
    LastThreeMonths,
}

impl TimeRange {
    /// All ranges in display order.
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Last24Hours,
        TimeRange::LastWeek,
        TimeRange::LastMonth,
        TimeRange::LastThreeMonths,
    ];

    /// Phrase spliced into the outbound prompt.
    pub fn prompt_phrase(&self) -> &'static str {
        match self {
            TimeRange::Last24Hours => "last 24 hours",
            TimeRange::LastWeek => "last week",
            TimeRange::LastMonth => "last month",
            TimeRange::LastThreeMonths => "last 3 months",
        }
    }

    /// Label for the filter button.
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Last24Hours => "24 Hours",
            TimeRange::LastWeek => "Last Week",
            TimeRange::LastMonth => "Last Month",
            TimeRange::LastThreeMonths => "3 Months",
        }
    }
}

/// One ranked keyword opportunity shown on the main grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSummary {
    /// The search keyword. Non-empty; entries with an empty keyword are
    /// dropped during parsing.
    pub keyword: String,
    /// Estimated monthly search volume.
    pub volume: u64,
    /// Estimated monthly revenue potential, e.g. `"$5k - $10k"`.
    pub revenue: String,
}

/// Length class of a related keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordClass {
    Short,
    Long,
}

impl KeywordClass {
    pub fn label(&self) -> &'static str {
        match self {
            KeywordClass::Short => "Short",
            KeywordClass::Long => "Long",
        }
    }
}

/// A keyword related to the selected one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedKeyword {
    pub keyword: String,
    /// Estimated monthly search volume.
    pub volume: u64,
    /// Estimated number of competing titles. Required on the wire; a reply
    /// without it fails parsing rather than defaulting to zero.
    pub competitors: u64,
    /// Length class, serialized as `type` on the wire.
    #[serde(rename = "type")]
    pub class: KeywordClass,
}

/// Per-keyword insights, discarded whenever the selection changes.
///
/// All three fields are required. A reply missing any of them is treated as
/// malformed and rejected by the query service (fail closed, no silent
/// empty-list substitution).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordDetails {
    pub related_keywords: Vec<RelatedKeyword>,
    pub profitable_topics: Vec<String>,
    pub author_tips: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_range_wire_names() {
        let json = serde_json::to_string(&TimeRange::Last24Hours).unwrap();
        assert_eq!(json, "\"24hours\"");
        let back: TimeRange = serde_json::from_str("\"3months\"").unwrap();
        assert_eq!(back, TimeRange::LastThreeMonths);
    }

    #[test]
    fn related_keyword_uses_type_on_the_wire() {
        let kw: RelatedKeyword = serde_json::from_str(
            r#"{"keyword":"dark fantasy","volume":900,"competitors":35,"type":"long"}"#,
        )
        .unwrap();
        assert_eq!(kw.class, KeywordClass::Long);
        assert_eq!(kw.competitors, 35);
    }

    #[test]
    fn details_reject_missing_author_tips() {
        let result = serde_json::from_str::<KeywordDetails>(
            r#"{"relatedKeywords":[],"profitableTopics":[]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn details_reject_missing_competitors() {
        let result = serde_json::from_str::<KeywordDetails>(
            r#"{
                "relatedKeywords":[{"keyword":"a","volume":1,"type":"short"}],
                "profitableTopics":[],
                "authorTips":[]
            }"#,
        );
        assert!(result.is_err());
    }
}
