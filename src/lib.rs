// ABOUTME: Main library entry point for the Planilha training plan client
// ABOUTME: Form state machine, time input normalization, and plan request coordination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planilha Project

#![deny(unsafe_code)]

//! # Planilha
//!
//! Client core of the Planilha running-training plan generator. The user
//! supplies three numeric inputs — a target 5k time, a plan length, and a
//! weekly base distance — and a remote compute service answers with a
//! multi-week plan. This crate owns everything around that call: the form
//! state machine, the `mm:ss` time-input normalizer, validation, and the
//! mapping of the service's answer (or failure) into view state. The plan
//! model and its display rendering live in `planilha-core`; the service
//! boundary lives in `planilha-compute`.
//!
//! ## Shape
//!
//! View state is an explicit immutable [`form::FormState`] value threaded
//! through a reducer: every keystroke, submission, and completion is a
//! [`form::FormEvent`], and `reduce(state, event)` is the only way state
//! changes. The one suspension point is the compute call itself, driven
//! by [`coordinator::RequestCoordinator`] and fed back into the reducer
//! as a completion event.

/// Request validation and plan-compute coordination
pub mod coordinator;

/// Form state reducer and time-input normalization
pub mod form;

/// Logging configuration and setup
pub mod logging;

pub use coordinator::{
    PlanOutcome, RawFields, RemoteError, RequestCoordinator, SubmitError, ValidationError,
};
pub use form::{reduce, FormEvent, FormState, TimeInput};

// Re-exported so consumers render plans without naming the foundation
// crates directly.
pub use planilha_compute::{ComputeConfig, HttpPlanCompute, PlanCompute, ServiceVersion};
pub use planilha_core::{render, Plan, RenderLine};
