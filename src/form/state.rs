// ABOUTME: Immutable form state and the reducer that folds events into it
// ABOUTME: Guards in-flight submissions with a generation counter so stale completions never apply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planilha Project

use tracing::debug;

use crate::coordinator::{PlanOutcome, RawFields, SubmitError};
use crate::form::TimeInput;

/// Identifier of one submission attempt.
///
/// Monotonically increasing per form instance. A completion event must
/// carry the generation of the in-flight submission to apply; anything
/// else is stale and dropped, which also covers responses arriving after
/// a teardown or reset.
pub type Generation = u64;

/// The whole state of one plan request form.
///
/// Owned by exactly one form instance and replaced, never mutated: the
/// only way forward is [`reduce`]. The plan and the error slot are
/// mutually exclusive — a success clears the error, a failure clears the
/// plan.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// The time field's normalized buffer
    pub time: TimeInput,
    /// The weeks field, as typed
    pub weeks: String,
    /// The base distance field, as typed
    pub base_distance: String,
    /// The last successful submission, if any
    pub outcome: Option<PlanOutcome>,
    /// The last failure's user-facing message, if any
    pub error: Option<String>,
    in_flight: Option<Generation>,
    next_generation: Generation,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            time: TimeInput::default(),
            weeks: "6".into(),
            base_distance: "10".into(),
            outcome: None,
            error: None,
            in_flight: None,
            next_generation: 0,
        }
    }
}

impl FormState {
    /// Fresh form state with the default week count and base distance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation of the in-flight submission, if one is pending.
    ///
    /// Callers dispatch [`FormEvent::SubmitStarted`] only when this is
    /// `None`, then read the assigned generation here to tag the
    /// eventual completion event.
    #[must_use]
    pub fn in_flight(&self) -> Option<Generation> {
        self.in_flight
    }

    /// Whether a submission is pending.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Snapshot the raw field strings for validation.
    #[must_use]
    pub fn raw_fields(&self) -> RawFields {
        RawFields {
            time: self.time.as_str().to_owned(),
            weeks: self.weeks.clone(),
            base_distance: self.base_distance.clone(),
        }
    }
}

/// Everything that can happen to the form.
#[derive(Debug, Clone)]
pub enum FormEvent {
    /// The time field received an edit; the raw proposed text runs
    /// through the normalizer
    TimeEdited(String),
    /// The weeks field received an edit
    WeeksEdited(String),
    /// The base distance field received an edit
    BaseDistanceEdited(String),
    /// A submission was dispatched; ignored while one is in flight
    SubmitStarted,
    /// A submission finished; ignored unless `generation` matches the
    /// in-flight one
    SubmitFinished {
        /// Generation the submission was started under
        generation: Generation,
        /// What the coordinator returned
        result: Result<PlanOutcome, SubmitError>,
    },
    /// Explicit form reset
    Reset,
}

/// Fold one event into the form state.
#[must_use]
pub fn reduce(state: FormState, event: FormEvent) -> FormState {
    match event {
        FormEvent::TimeEdited(raw) => FormState {
            time: state.time.transition(&raw),
            ..state
        },
        FormEvent::WeeksEdited(raw) => FormState { weeks: raw, ..state },
        FormEvent::BaseDistanceEdited(raw) => FormState {
            base_distance: raw,
            ..state
        },
        FormEvent::SubmitStarted => {
            if state.in_flight.is_some() {
                debug!("ignoring submit while a request is in flight");
                return state;
            }
            let generation = state.next_generation;
            FormState {
                in_flight: Some(generation),
                next_generation: generation + 1,
                ..state
            }
        }
        FormEvent::SubmitFinished { generation, result } => {
            if state.in_flight != Some(generation) {
                debug!(generation, "dropping stale submission result");
                return state;
            }
            match result {
                Ok(outcome) => FormState {
                    outcome: Some(outcome),
                    error: None,
                    in_flight: None,
                    ..state
                },
                Err(submit_error) => FormState {
                    outcome: None,
                    error: Some(submit_error.to_string()),
                    in_flight: None,
                    ..state
                },
            }
        }
        FormEvent::Reset => FormState::default(),
    }
}
