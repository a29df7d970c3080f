//! Fetch-and-store container backing the dashboard.
//!
//! # Design
//! `AnalysisStore` owns an `AnalysisApi` and one `AnalysisState`. Actions
//! take `&self`, so several may be in flight at once; each one awaits the
//! network without holding the state lock and then commits a single field.
//! A failed action commits nothing and hands the error back to the caller.
//! Lock poisoning is recovered: every write is a single field assignment.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use futures::future::join_all;
use serde_json::Value;

use crate::api::AnalysisApi;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::Transport;
use crate::resource::Resource;
use crate::state::{AnalysisState, Mutation};
use crate::transport::ReqwestTransport;

#[derive(Debug)]
pub struct AnalysisStore<T> {
    api: AnalysisApi<T>,
    state: RwLock<AnalysisState>,
}

/// Outcome of `AnalysisStore::fetch_all`, one entry per resource in
/// `Resource::ALL` order.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchReport {
    outcomes: Vec<(Resource, Result<(), ApiError>)>,
}

impl FetchReport {
    pub fn outcomes(&self) -> &[(Resource, Result<(), ApiError>)] {
        &self.outcomes
    }

    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (Resource, &ApiError)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|(resource, outcome)| outcome.as_ref().err().map(|e| (*resource, e)))
    }
}

impl AnalysisStore<ReqwestTransport> {
    pub fn connect(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::new(AnalysisApi::connect(config)?))
    }
}

impl<T: Transport> AnalysisStore<T> {
    pub fn new(api: AnalysisApi<T>) -> Self {
        Self {
            api,
            state: RwLock::new(AnalysisState::default()),
        }
    }

    pub fn api(&self) -> &AnalysisApi<T> {
        &self.api
    }

    fn read(&self) -> RwLockReadGuard<'_, AnalysisState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, AnalysisState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn commit(&self, mutation: Mutation) {
        log::debug!("commit {}", mutation.resource());
        self.write().commit(mutation);
    }

    /// Fetch `resource` and store the result. On error the field keeps its
    /// previous value.
    pub async fn fetch(&self, resource: Resource) -> Result<(), ApiError> {
        match self.api.get(resource).await {
            Ok(value) => {
                self.commit(Mutation::set(resource, value));
                Ok(())
            }
            Err(e) => {
                log::warn!("fetch {resource} failed: {e}");
                Err(e)
            }
        }
    }

    /// Fetch every resource concurrently. One failure does not stop the
    /// others from committing.
    pub async fn fetch_all(&self) -> FetchReport {
        let results = join_all(Resource::ALL.map(|r| self.fetch(r))).await;
        FetchReport {
            outcomes: Resource::ALL.into_iter().zip(results).collect(),
        }
    }

    pub async fn fetch_hand_details(&self) -> Result<(), ApiError> {
        self.fetch(Resource::HandDetails).await
    }

    pub async fn fetch_hand_strength(&self) -> Result<(), ApiError> {
        self.fetch(Resource::HandStrength).await
    }

    pub async fn fetch_hand_rank(&self) -> Result<(), ApiError> {
        self.fetch(Resource::HandRank).await
    }

    pub async fn fetch_winning_probability(&self) -> Result<(), ApiError> {
        self.fetch(Resource::WinningProbability).await
    }

    pub async fn fetch_suggested_actions(&self) -> Result<(), ApiError> {
        self.fetch(Resource::SuggestedActions).await
    }

    pub async fn fetch_opponent_analysis(&self) -> Result<(), ApiError> {
        self.fetch(Resource::OpponentAnalysis).await
    }

    pub async fn fetch_historical_data(&self) -> Result<(), ApiError> {
        self.fetch(Resource::HistoricalData).await
    }

    pub async fn fetch_visual_elements(&self) -> Result<(), ApiError> {
        self.fetch(Resource::VisualElements).await
    }

    pub fn get(&self, resource: Resource) -> Value {
        self.read().get(resource).clone()
    }

    /// Copy of the whole state, e.g. for rendering or serialization.
    pub fn snapshot(&self) -> AnalysisState {
        self.read().clone()
    }

    pub fn hand_details(&self) -> Value {
        self.get(Resource::HandDetails)
    }

    pub fn hand_strength(&self) -> Value {
        self.get(Resource::HandStrength)
    }

    pub fn hand_rank(&self) -> Value {
        self.get(Resource::HandRank)
    }

    pub fn winning_probability(&self) -> Value {
        self.get(Resource::WinningProbability)
    }

    pub fn suggested_actions(&self) -> Value {
        self.get(Resource::SuggestedActions)
    }

    pub fn opponent_analysis(&self) -> Value {
        self.get(Resource::OpponentAnalysis)
    }

    pub fn historical_data(&self) -> Value {
        self.get(Resource::HistoricalData)
    }

    pub fn visual_elements(&self) -> Value {
        self.get(Resource::VisualElements)
    }
}
