// ABOUTME: Request validation and plan-compute coordination
// ABOUTME: Validates raw form fields, builds the versioned payload, and maps service results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planilha Project

//! # Request Coordination
//!
//! The coordinator sits between the form and the compute collaborator.
//! `submit` validates the raw field strings (short-circuiting on the
//! first failure), builds the request payload for the configured service
//! version, performs the one async call, and maps the result into either
//! a [`PlanOutcome`] or a [`SubmitError`]. Validation failures never
//! reach the service.

use std::sync::Arc;

use chrono::NaiveDate;
use planilha_compute::{
    ComputeConfig, ComputeError, ComputeRequest, HttpPlanCompute, PlanCompute, ServiceVersion,
};
use planilha_core::Plan;
use tracing::{debug, error};

/// Fallback user-facing message when the service supplies none
const GENERIC_REMOTE_MESSAGE: &str = "An error occurred while generating the training plan.";

/// Inclusive bounds on the requested plan length
const WEEK_RANGE: std::ops::RangeInclusive<i64> = 1..=52;

/// The form's raw field strings, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    /// Target 5k time, `mm:ss`
    pub time: String,
    /// Requested plan length in weeks
    pub weeks: String,
    /// Weekly base distance in kilometers
    pub base_distance: String,
}

/// Locally rejected input. Never sent to the remote service.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A field failed numeric parsing
    #[error("'{field}' is not a number")]
    NotANumber {
        /// Name of the offending field
        field: &'static str,
    },

    /// Seconds component outside `[0, 59]`
    #[error("seconds must be between 0 and 59")]
    SecondsOutOfRange {
        /// The rejected seconds value
        seconds: u32,
    },

    /// Week count outside `[1, 52]`
    #[error("number of weeks must be between 1 and 52")]
    WeeksOutOfRange {
        /// The rejected week count
        weeks: i64,
    },

    /// Base distance not a positive number of kilometers
    #[error("base distance must be greater than zero")]
    DistanceOutOfRange {
        /// The rejected distance value
        base_distance: f64,
    },
}

/// The remote side failed: rejection, bad response shape, or transport.
///
/// Carries the service-supplied message when there was one, else a
/// generic one; either way it is user-facing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RemoteError {
    /// User-facing failure message
    pub message: String,
}

impl From<ComputeError> for RemoteError {
    fn from(error: ComputeError) -> Self {
        let message = error
            .remote_message()
            .map_or_else(|| GENERIC_REMOTE_MESSAGE.to_owned(), ToOwned::to_owned);
        Self { message }
    }
}

/// Failure of one submission, either side of the wire.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    /// Rejected locally before any remote call
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The remote call failed
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Validated numeric form input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedInput {
    /// Minutes component of the target 5k time
    pub minutes: u32,
    /// Seconds component of the target 5k time
    pub seconds: u32,
    /// Requested plan length in weeks
    pub weeks: u32,
    /// Weekly base distance in kilometers
    pub base_distance: f64,
}

/// One successful submission: the computed plan plus the summary values
/// the form displays above it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanOutcome {
    /// The computed training plan
    pub plan: Plan,
    /// Average pace echoed by the service, when enveloped
    pub pace: Option<String>,
    /// Base distance echoed by the service, when enveloped
    pub base_distance: Option<String>,
    /// The week count that was submitted
    pub requested_weeks: u32,
    /// The base distance that was submitted, in kilometers
    pub requested_distance: f64,
}

/// Validate raw form fields, short-circuiting at the first failure.
///
/// Check order: numeric parsing of every field, then the seconds range,
/// then week and distance bounds.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate(fields: &RawFields) -> Result<ValidatedInput, ValidationError> {
    let (minutes, seconds) = parse_time(&fields.time)?;
    let weeks: i64 = fields
        .weeks
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber { field: "weeks" })?;
    let base_distance: f64 = fields
        .base_distance
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber {
            field: "base distance",
        })?;

    if seconds > 59 {
        return Err(ValidationError::SecondsOutOfRange { seconds });
    }
    if !WEEK_RANGE.contains(&weeks) {
        return Err(ValidationError::WeeksOutOfRange { weeks });
    }
    if !base_distance.is_finite() || base_distance <= 0.0 {
        return Err(ValidationError::DistanceOutOfRange { base_distance });
    }

    Ok(ValidatedInput {
        minutes,
        seconds,
        weeks: weeks as u32,
        base_distance,
    })
}

/// Split a `mm:ss` string into its integer components.
fn parse_time(time: &str) -> Result<(u32, u32), ValidationError> {
    let field = "time";
    let (minutes, seconds) = time
        .trim()
        .split_once(':')
        .ok_or(ValidationError::NotANumber { field })?;
    let minutes = minutes
        .parse()
        .map_err(|_| ValidationError::NotANumber { field })?;
    let seconds = seconds
        .parse()
        .map_err(|_| ValidationError::NotANumber { field })?;
    Ok((minutes, seconds))
}

/// Drives one submission end to end.
///
/// Holds the collaborator behind the [`PlanCompute`] seam and the wire
/// schema version the service speaks. The coordinator itself is
/// stateless; view state belongs to the form reducer.
pub struct RequestCoordinator {
    compute: Arc<dyn PlanCompute>,
    version: ServiceVersion,
}

impl RequestCoordinator {
    /// Coordinator over an arbitrary collaborator implementation.
    #[must_use]
    pub fn new(compute: Arc<dyn PlanCompute>, version: ServiceVersion) -> Self {
        Self { compute, version }
    }

    /// Coordinator over the HTTP collaborator with the given settings.
    #[must_use]
    pub fn over_http(config: ComputeConfig, version: ServiceVersion) -> Self {
        Self::new(Arc::new(HttpPlanCompute::new(config)), version)
    }

    /// Validate the fields and request a plan.
    ///
    /// `today` feeds the start-date string of the V2 payload; callers
    /// pass the current local date.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Validation`] without touching the network
    /// when the fields are locally invalid, and [`SubmitError::Remote`]
    /// when the collaborator call fails in any way.
    pub async fn submit(
        &self,
        fields: &RawFields,
        today: NaiveDate,
    ) -> Result<PlanOutcome, SubmitError> {
        let input = validate(fields)?;
        let request = build_request(self.version, input, today);
        debug!(weeks = input.weeks, "submitting plan request");

        match self.compute.compute(&request).await {
            Ok(response) => Ok(PlanOutcome {
                plan: response.plan,
                pace: response.pace,
                base_distance: response.base_distance,
                requested_weeks: input.weeks,
                requested_distance: input.base_distance,
            }),
            Err(compute_error) => {
                error!(%compute_error, "plan compute call failed");
                Err(SubmitError::Remote(RemoteError::from(compute_error)))
            }
        }
    }
}

/// Build the wire payload for the configured service version.
fn build_request(
    version: ServiceVersion,
    input: ValidatedInput,
    today: NaiveDate,
) -> ComputeRequest {
    match version {
        ServiceVersion::V1 => ComputeRequest::V1 {
            minutes: input.minutes,
            seconds: input.seconds,
            num_weeks: input.weeks,
            base_distance: input.base_distance,
        },
        ServiceVersion::V2 => ComputeRequest::V2 {
            time5k: input.minutes * 60 + input.seconds,
            start_date: today.format("%d/%m/%Y").to_string(),
            num_weeks: input.weeks,
        },
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn fields(time: &str, weeks: &str, base_distance: &str) -> RawFields {
        RawFields {
            time: time.to_owned(),
            weeks: weeks.to_owned(),
            base_distance: base_distance.to_owned(),
        }
    }

    #[test]
    fn numeric_parsing_is_checked_first() {
        let error = validate(&fields("25-30", "banana", "10")).unwrap_err();
        assert_eq!(error, ValidationError::NotANumber { field: "time" });
    }

    #[test]
    fn seconds_sixty_is_out_of_range() {
        let error = validate(&fields("25:60", "6", "10")).unwrap_err();
        assert_eq!(error, ValidationError::SecondsOutOfRange { seconds: 60 });
    }

    #[test]
    fn week_bounds_are_inclusive() {
        assert!(validate(&fields("25:30", "1", "10")).is_ok());
        assert!(validate(&fields("25:30", "52", "10")).is_ok());
        assert_eq!(
            validate(&fields("25:30", "0", "10")).unwrap_err(),
            ValidationError::WeeksOutOfRange { weeks: 0 }
        );
        assert_eq!(
            validate(&fields("25:30", "53", "10")).unwrap_err(),
            ValidationError::WeeksOutOfRange { weeks: 53 }
        );
    }

    #[test]
    fn distance_must_be_positive() {
        assert!(matches!(
            validate(&fields("25:30", "6", "0")).unwrap_err(),
            ValidationError::DistanceOutOfRange { .. }
        ));
        assert!(matches!(
            validate(&fields("25:30", "6", "-2.5")).unwrap_err(),
            ValidationError::DistanceOutOfRange { .. }
        ));
    }

    #[test]
    fn v2_payload_carries_total_seconds_and_date() {
        let input = validate(&fields("25:30", "6", "10")).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let request = build_request(ServiceVersion::V2, input, today);
        assert_eq!(
            request,
            ComputeRequest::V2 {
                time5k: 1530,
                start_date: "06/08/2026".to_owned(),
                num_weeks: 6,
            }
        );
    }
}
