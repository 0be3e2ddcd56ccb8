// ABOUTME: Client boundary for the remote plan-compute service
// ABOUTME: Versioned request schema, response envelope decoding, and the PlanCompute trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planilha Project

#![deny(unsafe_code)]

//! # Planilha Compute Client
//!
//! The plan-compute service is an external collaborator: it turns a
//! validated pace/length/distance request into a full training plan. This
//! crate owns that boundary and nothing else — the generation algorithm
//! itself lives on the service side.
//!
//! ## Modules
//!
//! - **request**: one explicit versioned request schema (no duck-typed
//!   payload negotiation)
//! - **response**: fail-fast decoding of the service's response envelope
//! - **client**: the async [`PlanCompute`] seam and its `reqwest`-backed
//!   HTTP implementation
//! - **errors**: `ComputeError` taxonomy for transport, rejection, and
//!   shape failures

/// ComputeError taxonomy for transport, rejection, and shape failures
pub mod errors;

/// The async `PlanCompute` seam and its HTTP implementation
pub mod client;

/// Versioned request schema for the compute service
pub mod request;

/// Fail-fast decoding of the service's response envelope
pub mod response;

pub use client::{ComputeConfig, HttpPlanCompute, PlanCompute};
pub use errors::ComputeError;
pub use request::{ComputeRequest, ServiceVersion};
pub use response::ComputeResponse;
