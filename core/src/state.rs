//! The dashboard's view of the analysis API.
//!
//! # Design
//! `AnalysisState` is a plain value holding the latest payload of each
//! resource. The only way to change a field is `commit`, and each
//! `Mutation` variant writes exactly one field. Payloads are kept as opaque
//! JSON; a fetched value replaces the field whatever its shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resource::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisState {
    hand_details: Value,
    hand_strength: Value,
    hand_rank: Value,
    winning_probability: Value,
    suggested_actions: Value,
    opponent_analysis: Value,
    historical_data: Value,
    visual_elements: Value,
}

/// A synchronous overwrite of one state field.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    SetHandDetails(Value),
    SetHandStrength(Value),
    SetHandRank(Value),
    SetWinningProbability(Value),
    SetSuggestedActions(Value),
    SetOpponentAnalysis(Value),
    SetHistoricalData(Value),
    SetVisualElements(Value),
}

impl Mutation {
    /// The mutation that stores `value` in `resource`'s field.
    pub fn set(resource: Resource, value: Value) -> Self {
        match resource {
            Resource::HandDetails => Mutation::SetHandDetails(value),
            Resource::HandStrength => Mutation::SetHandStrength(value),
            Resource::HandRank => Mutation::SetHandRank(value),
            Resource::WinningProbability => Mutation::SetWinningProbability(value),
            Resource::SuggestedActions => Mutation::SetSuggestedActions(value),
            Resource::OpponentAnalysis => Mutation::SetOpponentAnalysis(value),
            Resource::HistoricalData => Mutation::SetHistoricalData(value),
            Resource::VisualElements => Mutation::SetVisualElements(value),
        }
    }

    pub fn resource(&self) -> Resource {
        match self {
            Mutation::SetHandDetails(_) => Resource::HandDetails,
            Mutation::SetHandStrength(_) => Resource::HandStrength,
            Mutation::SetHandRank(_) => Resource::HandRank,
            Mutation::SetWinningProbability(_) => Resource::WinningProbability,
            Mutation::SetSuggestedActions(_) => Resource::SuggestedActions,
            Mutation::SetOpponentAnalysis(_) => Resource::OpponentAnalysis,
            Mutation::SetHistoricalData(_) => Resource::HistoricalData,
            Mutation::SetVisualElements(_) => Resource::VisualElements,
        }
    }

    fn into_value(self) -> Value {
        match self {
            Mutation::SetHandDetails(v)
            | Mutation::SetHandStrength(v)
            | Mutation::SetHandRank(v)
            | Mutation::SetWinningProbability(v)
            | Mutation::SetSuggestedActions(v)
            | Mutation::SetOpponentAnalysis(v)
            | Mutation::SetHistoricalData(v)
            | Mutation::SetVisualElements(v) => v,
        }
    }
}

impl Default for AnalysisState {
    fn default() -> Self {
        Self {
            hand_details: Resource::HandDetails.initial_value(),
            hand_strength: Resource::HandStrength.initial_value(),
            hand_rank: Resource::HandRank.initial_value(),
            winning_probability: Resource::WinningProbability.initial_value(),
            suggested_actions: Resource::SuggestedActions.initial_value(),
            opponent_analysis: Resource::OpponentAnalysis.initial_value(),
            historical_data: Resource::HistoricalData.initial_value(),
            visual_elements: Resource::VisualElements.initial_value(),
        }
    }
}

impl AnalysisState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the mutation's field. Never fails.
    pub fn commit(&mut self, mutation: Mutation) {
        let resource = mutation.resource();
        *self.slot_mut(resource) = mutation.into_value();
    }

    pub fn get(&self, resource: Resource) -> &Value {
        match resource {
            Resource::HandDetails => &self.hand_details,
            Resource::HandStrength => &self.hand_strength,
            Resource::HandRank => &self.hand_rank,
            Resource::WinningProbability => &self.winning_probability,
            Resource::SuggestedActions => &self.suggested_actions,
            Resource::OpponentAnalysis => &self.opponent_analysis,
            Resource::HistoricalData => &self.historical_data,
            Resource::VisualElements => &self.visual_elements,
        }
    }

    fn slot_mut(&mut self, resource: Resource) -> &mut Value {
        match resource {
            Resource::HandDetails => &mut self.hand_details,
            Resource::HandStrength => &mut self.hand_strength,
            Resource::HandRank => &mut self.hand_rank,
            Resource::WinningProbability => &mut self.winning_probability,
            Resource::SuggestedActions => &mut self.suggested_actions,
            Resource::OpponentAnalysis => &mut self.opponent_analysis,
            Resource::HistoricalData => &mut self.historical_data,
            Resource::VisualElements => &mut self.visual_elements,
        }
    }

    pub fn hand_details(&self) -> &Value {
        &self.hand_details
    }

    pub fn hand_strength(&self) -> &Value {
        &self.hand_strength
    }

    pub fn hand_rank(&self) -> &Value {
        &self.hand_rank
    }

    pub fn winning_probability(&self) -> &Value {
        &self.winning_probability
    }

    pub fn suggested_actions(&self) -> &Value {
        &self.suggested_actions
    }

    pub fn opponent_analysis(&self) -> &Value {
        &self.opponent_analysis
    }

    pub fn historical_data(&self) -> &Value {
        &self.historical_data
    }

    pub fn visual_elements(&self) -> &Value {
        &self.visual_elements
    }
}
