//! One async call per analysis resource.
//!
//! `AnalysisApi` pairs the stateless `AnalysisClient` with a `Transport`.
//! Every call is a single GET with no caching: calling twice hits the
//! network twice.

use serde_json::Value;

use crate::client::AnalysisClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::Transport;
use crate::resource::Resource;
use crate::transport::ReqwestTransport;

#[derive(Debug, Clone)]
pub struct AnalysisApi<T> {
    client: AnalysisClient,
    transport: T,
}

impl AnalysisApi<ReqwestTransport> {
    /// An API backed by `reqwest`, configured from `config`.
    pub fn connect(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::new(
            AnalysisClient::from_config(config),
            ReqwestTransport::new(config)?,
        ))
    }
}

impl<T: Transport> AnalysisApi<T> {
    pub fn new(client: AnalysisClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET the resource and return its body as decoded JSON.
    pub async fn get(&self, resource: Resource) -> Result<Value, ApiError> {
        let request = self.client.build_request(resource);
        let response = self.transport.execute(request).await?;
        self.client.parse_response(resource, response)
    }

    pub async fn get_hand_details(&self) -> Result<Value, ApiError> {
        self.get(Resource::HandDetails).await
    }

    pub async fn get_hand_strength(&self) -> Result<Value, ApiError> {
        self.get(Resource::HandStrength).await
    }

    pub async fn get_hand_rank(&self) -> Result<Value, ApiError> {
        self.get(Resource::HandRank).await
    }

    pub async fn get_winning_probability(&self) -> Result<Value, ApiError> {
        self.get(Resource::WinningProbability).await
    }

    pub async fn get_suggested_actions(&self) -> Result<Value, ApiError> {
        self.get(Resource::SuggestedActions).await
    }

    pub async fn get_opponent_analysis(&self) -> Result<Value, ApiError> {
        self.get(Resource::OpponentAnalysis).await
    }

    pub async fn get_historical_data(&self) -> Result<Value, ApiError> {
        self.get(Resource::HistoricalData).await
    }

    pub async fn get_visual_elements(&self) -> Result<Value, ApiError> {
        self.get(Resource::VisualElements).await
    }
}
