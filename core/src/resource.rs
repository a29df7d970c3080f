//! The eight analysis facets served by the remote API.
//!
//! # Design
//! Each resource carries everything the rest of the crate needs to know
//! about it: its URL path segment, the name of the state field it fills and
//! that field's initial value. Client, store and tests are written once
//! against `Resource` instead of once per facet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::UnknownResource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resource {
    HandDetails,
    HandStrength,
    HandRank,
    WinningProbability,
    SuggestedActions,
    OpponentAnalysis,
    HistoricalData,
    VisualElements,
}

impl Resource {
    pub const ALL: [Resource; 8] = [
        Resource::HandDetails,
        Resource::HandStrength,
        Resource::HandRank,
        Resource::WinningProbability,
        Resource::SuggestedActions,
        Resource::OpponentAnalysis,
        Resource::HistoricalData,
        Resource::VisualElements,
    ];

    /// Path segment under the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Resource::HandDetails => "hand-details",
            Resource::HandStrength => "hand-strength",
            Resource::HandRank => "hand-rank",
            Resource::WinningProbability => "winning-probability",
            Resource::SuggestedActions => "suggested-actions",
            Resource::OpponentAnalysis => "opponent-analysis",
            Resource::HistoricalData => "historical-data",
            Resource::VisualElements => "visual-elements",
        }
    }

    /// Name of the matching field in a serialized `AnalysisState`.
    pub fn field_name(self) -> &'static str {
        match self {
            Resource::HandDetails => "handDetails",
            Resource::HandStrength => "handStrength",
            Resource::HandRank => "handRank",
            Resource::WinningProbability => "winningProbability",
            Resource::SuggestedActions => "suggestedActions",
            Resource::OpponentAnalysis => "opponentAnalysis",
            Resource::HistoricalData => "historicalData",
            Resource::VisualElements => "visualElements",
        }
    }

    /// Value the state field holds before its first successful fetch.
    pub fn initial_value(self) -> Value {
        match self {
            Resource::HandDetails | Resource::OpponentAnalysis | Resource::VisualElements => {
                json!({})
            }
            Resource::HandStrength | Resource::HandRank => json!(""),
            Resource::WinningProbability => json!(0),
            Resource::SuggestedActions | Resource::HistoricalData => json!([]),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Accepts either the path segment (`hand-rank`) or the field name
/// (`handRank`).
impl FromStr for Resource {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|r| r.path() == s || r.field_name() == s)
            .ok_or_else(|| UnknownResource(s.to_string()))
    }
}
