// ABOUTME: Async PlanCompute seam and its reqwest-backed HTTP implementation
// ABOUTME: Posts versioned requests to the compute service and maps failures to ComputeError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planilha Project

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use tracing::{debug, warn};

use crate::errors::ComputeError;
use crate::request::ComputeRequest;
use crate::response::{decode_error_message, ComputeResponse};

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Path of the compute endpoint on the service
const CALCULATE_PATH: &str = "/calculate";

/// The opaque plan-compute collaborator.
///
/// One call per submission: a versioned request in, a decoded plan
/// response or a [`ComputeError`] out. Tests substitute a stub; the
/// production implementation is [`HttpPlanCompute`].
#[async_trait]
pub trait PlanCompute: Send + Sync {
    /// Request a computed training plan.
    ///
    /// # Errors
    ///
    /// Returns [`ComputeError`] when the service is unreachable, rejects
    /// the request, or answers with an unrecognized body shape.
    async fn compute(&self, request: &ComputeRequest) -> Result<ComputeResponse, ComputeError>;
}

/// Connection settings for the HTTP compute client.
#[derive(Debug, Clone)]
pub struct ComputeConfig {
    /// Service base URL, without the endpoint path
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for ComputeConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5001".into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// `reqwest`-backed [`PlanCompute`] implementation.
#[derive(Debug, Clone)]
pub struct HttpPlanCompute {
    client: Client,
    config: ComputeConfig,
}

impl HttpPlanCompute {
    /// Build a client with the given connection settings.
    #[must_use]
    pub fn new(config: ComputeConfig) -> Self {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client, config }
    }

    fn endpoint(&self) -> String {
        format!("{}{CALCULATE_PATH}", self.config.base_url.trim_end_matches('/'))
    }
}

impl Default for HttpPlanCompute {
    fn default() -> Self {
        Self::new(ComputeConfig::default())
    }
}

#[async_trait]
impl PlanCompute for HttpPlanCompute {
    async fn compute(&self, request: &ComputeRequest) -> Result<ComputeResponse, ComputeError> {
        let url = self.endpoint();
        debug!(%url, version = ?request.version(), "requesting training plan");

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|error| {
                warn!(%error, "failed to read compute error body");
                String::new()
            });
            return Err(ComputeError::Rejected {
                status: status.as_u16(),
                message: decode_error_message(&body),
            });
        }

        let body = response.text().await?;
        ComputeResponse::decode(&body)
    }
}
