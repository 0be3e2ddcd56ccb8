// ABOUTME: Error types for plan-compute service calls
// ABOUTME: Distinguishes transport failures, service rejections, and response shape mismatches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planilha Project

/// Failure of a plan-compute call.
#[derive(Debug, thiserror::Error)]
pub enum ComputeError {
    /// The request never produced a usable HTTP response
    #[error("compute service unreachable")]
    Transport {
        /// Underlying transport error
        #[from]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status
    #[error("compute service rejected the request (status {status})")]
    Rejected {
        /// HTTP status code of the response
        status: u16,
        /// Service-supplied error message, when the body carried one
        message: Option<String>,
    },

    /// The response body does not match any documented success shape
    #[error("compute service returned an unrecognized response shape")]
    Shape {
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },
}

impl ComputeError {
    /// The message the service itself supplied, if any.
    #[must_use]
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            Self::Transport { .. } | Self::Shape { .. } => None,
        }
    }
}
