// ABOUTME: Response envelope decoding for the plan-compute service
// ABOUTME: Accepts the documented enveloped and bare plan shapes, fails fast on anything else
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planilha Project

use planilha_core::Plan;
use serde::Deserialize;

use crate::errors::ComputeError;

/// A successful plan-compute result.
///
/// The newer service generation wraps the plan in an envelope that echoes
/// the average pace and base distance; the older one returns the plan
/// mapping directly. Both decode into this one type.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputeResponse {
    /// The computed training plan
    pub plan: Plan,
    /// Average pace echo (e.g. `"5:06 min/km"`), enveloped shape only
    pub pace: Option<String>,
    /// Base distance echo (e.g. `"10.0 km"`), enveloped shape only
    pub base_distance: Option<String>,
}

/// Enveloped success shape: `{ "pace": ..., "base_distance"?: ..., "plan": ... }`.
#[derive(Debug, Deserialize)]
struct Envelope {
    pace: String,
    #[serde(default)]
    base_distance: Option<String>,
    plan: Plan,
}

/// Failure body shape: `{ "error": ... }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl ComputeResponse {
    /// Decode a success body.
    ///
    /// A top-level `plan` key selects the enveloped shape; otherwise the
    /// whole body must be a bare plan mapping. A body matching neither is
    /// a shape error, never a silent partial read.
    ///
    /// # Errors
    ///
    /// Returns [`ComputeError::Shape`] when the body is not valid JSON or
    /// matches neither documented shape.
    pub fn decode(body: &str) -> Result<Self, ComputeError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|source| ComputeError::Shape { source })?;

        if value.get("plan").is_some() {
            let envelope: Envelope = serde_json::from_value(value)
                .map_err(|source| ComputeError::Shape { source })?;
            return Ok(Self {
                plan: envelope.plan,
                pace: Some(envelope.pace),
                base_distance: envelope.base_distance,
            });
        }

        let plan: Plan =
            serde_json::from_value(value).map_err(|source| ComputeError::Shape { source })?;
        Ok(Self {
            plan,
            pace: None,
            base_distance: None,
        })
    }
}

/// Extract the service-supplied message from a failure body, if the body
/// matches the documented `{ "error": ... }` shape.
#[must_use]
pub(crate) fn decode_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|error_body| error_body.error)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn enveloped_shape_decodes_with_pace() {
        let body = r#"{
            "pace": "5:06 min/km",
            "base_distance": "10.0 km",
            "plan": {"Semana 1": [{"type": "Longo", "activities": []}]}
        }"#;
        let response = ComputeResponse::decode(body).unwrap();
        assert_eq!(response.pace.as_deref(), Some("5:06 min/km"));
        assert_eq!(response.base_distance.as_deref(), Some("10.0 km"));
        assert_eq!(response.plan.len(), 1);
    }

    #[test]
    fn bare_plan_shape_decodes_without_pace() {
        let body = r#"{"Semana 1": [], "Semana 2": []}"#;
        let response = ComputeResponse::decode(body).unwrap();
        assert!(response.pace.is_none());
        assert_eq!(response.plan.len(), 2);
    }

    #[test]
    fn unrecognized_shape_is_rejected() {
        assert!(ComputeResponse::decode("[1, 2, 3]").is_err());
        assert!(ComputeResponse::decode("not json").is_err());
        // Envelope with a plan key but a missing pace is malformed, not a
        // bare plan.
        assert!(ComputeResponse::decode(r#"{"plan": {}}"#).is_err());
    }

    #[test]
    fn error_body_message_is_extracted() {
        assert_eq!(
            decode_error_message(r#"{"error": "bad date"}"#).as_deref(),
            Some("bad date")
        );
        assert!(decode_error_message("oops").is_none());
    }
}
