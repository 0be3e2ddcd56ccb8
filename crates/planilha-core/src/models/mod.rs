// ABOUTME: Data models for the Planilha training plan client
// ABOUTME: Re-exports Plan, Session, and the recursive Activity union
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planilha Project

//! # Data Models
//!
//! Core data structures for a computed training plan as returned by the
//! plan-compute service.
//!
//! ## Design Principles
//!
//! - **Self-similar**: an `Activity` nests further activities under a
//!   repetition count, to arbitrary (practically shallow) depth
//! - **Atomic ownership**: a `Plan` and its descendants belong to the
//!   request/response cycle that produced them; a new result replaces the
//!   previous one wholesale, there is no incremental mutation
//! - **Order-agnostic keys**: the plan's week-label map carries no
//!   meaningful iteration order of its own; display order is derived by
//!   the renderer, never by insertion order

mod plan;

pub use plan::{Activity, ActivityBlock, ActivityDetails, Plan, Session};
