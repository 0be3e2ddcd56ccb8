// ABOUTME: Error types for plan rendering and week ordering
// ABOUTME: Defines MalformedLabelError for week labels that break the collaborator contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planilha Project

/// A week label that violates the collaborator contract.
///
/// The compute service guarantees every week label contains at least one
/// digit denoting the week number. A label without one cannot be ordered.
/// Rendering treats this as a partial failure: the offending week is
/// skipped with a warning while the rest of the plan still displays.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("week label '{label}' contains no week number")]
pub struct MalformedLabelError {
    /// The offending week label, verbatim
    pub label: String,
}
