// ABOUTME: Versioned request schema for the plan-compute service
// ABOUTME: Exactly one wire shape per configured service version, no payload negotiation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planilha Project

use serde::Serialize;

/// Which wire schema the configured compute service speaks.
///
/// The two deployed service generations accept incompatible payloads; the
/// client is told which one it talks to and always emits exactly that
/// shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceVersion {
    /// Pace components plus base distance (`minutes`/`seconds`/
    /// `num_weeks`/`base_distance`)
    #[default]
    V1,
    /// Total 5k seconds plus start date (`time5k`/`startDate`/`numWeeks`)
    V2,
}

/// A plan-compute request, serialized flat in the wire shape of its
/// version.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComputeRequest {
    /// [`ServiceVersion::V1`] payload
    V1 {
        /// Minutes component of the target 5k time
        minutes: u32,
        /// Seconds component of the target 5k time
        seconds: u32,
        /// Requested plan length in weeks
        num_weeks: u32,
        /// Weekly base distance in kilometers
        base_distance: f64,
    },
    /// [`ServiceVersion::V2`] payload
    V2 {
        /// Target 5k time in total seconds
        time5k: u32,
        /// Plan start date, `DD/MM/YYYY`
        #[serde(rename = "startDate")]
        start_date: String,
        /// Requested plan length in weeks
        #[serde(rename = "numWeeks")]
        num_weeks: u32,
    },
}

impl ComputeRequest {
    /// The schema version this payload belongs to.
    #[must_use]
    pub fn version(&self) -> ServiceVersion {
        match self {
            Self::V1 { .. } => ServiceVersion::V1,
            Self::V2 { .. } => ServiceVersion::V2,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn v1_serializes_to_pace_component_shape() {
        let request = ComputeRequest::V1 {
            minutes: 25,
            seconds: 30,
            num_weeks: 6,
            base_distance: 10.0,
        };
        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(
            wire,
            serde_json::json!({
                "minutes": 25,
                "seconds": 30,
                "num_weeks": 6,
                "base_distance": 10.0,
            })
        );
    }

    #[test]
    fn v2_serializes_to_total_seconds_shape() {
        let request = ComputeRequest::V2 {
            time5k: 1530,
            start_date: "06/08/2026".to_owned(),
            num_weeks: 6,
        };
        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(
            wire,
            serde_json::json!({
                "time5k": 1530,
                "startDate": "06/08/2026",
                "numWeeks": 6,
            })
        );
    }
}
