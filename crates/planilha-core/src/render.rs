// ABOUTME: Week ordering and lazy display-line rendering for training plans
// ABOUTME: Flattens the recursive plan tree into an ordered sequence of RenderLine values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planilha Project

//! # Plan Rendering
//!
//! Turns a [`Plan`] into a flat, ordered sequence of display lines. Weeks
//! are ordered by the number embedded in their label, sessions and
//! activities stay in the order the compute service produced them, and
//! nested activity blocks are walked depth-first with an explicit stack.
//!
//! Rendering is pure and restartable: [`render`] borrows the plan, builds
//! a fresh iterator per call, and the same plan always yields the same
//! sequence.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::warn;

use crate::errors::MalformedLabelError;
use crate::format::format_distance;
use crate::models::{Activity, Plan, Session};

/// Separator between the segments of an activity line
const SEGMENT_SEPARATOR: &str = " - ";

/// First run of digits in a week label
static WEEK_NUMBER_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\d+").ok());

/// One node of the rendered display tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "line", rename_all = "snake_case")]
pub enum RenderLine {
    /// Header for a week, label shown verbatim
    WeekHeader {
        /// Week label as sent by the service
        label: String,
    },
    /// Header for a session within the current week
    SessionHeader {
        /// Session type label
        kind: String,
        /// Session date stamp, when the service provides one
        date: Option<String>,
    },
    /// A single activity instruction
    Activity {
        /// Nesting depth; 0 for session-level activities
        depth: usize,
        /// Assembled display text for the activity
        text: String,
        /// Whether nested child lines follow at `depth + 1`
        has_children: bool,
        /// Repetition count for a nested block; `None` on leaves
        repetitions: Option<u32>,
    },
}

/// Extract the week number from a week label.
///
/// The number is the first run of digits in the label, wherever it sits
/// (`"Week 3"`, `"Semana 12"`, `"3ª semana"`).
///
/// # Errors
///
/// Returns [`MalformedLabelError`] when the label contains no digits, or
/// the digit run does not fit a week number.
pub fn week_number(label: &str) -> Result<u32, MalformedLabelError> {
    WEEK_NUMBER_PATTERN
        .as_ref()
        .and_then(|pattern| pattern.find(label))
        .and_then(|digits| digits.as_str().parse().ok())
        .ok_or_else(|| MalformedLabelError {
            label: label.to_owned(),
        })
}

/// Order a plan's weeks ascending by week number.
///
/// The sort is stable: weeks sharing a number keep their relative input
/// order.
///
/// # Errors
///
/// Returns the first [`MalformedLabelError`] encountered. Callers that
/// prefer partial output over failure should use [`render`], which skips
/// offending weeks instead.
pub fn ordered_weeks(plan: &Plan) -> Result<Vec<(&str, &[Session])>, MalformedLabelError> {
    let mut weeks = Vec::with_capacity(plan.len());
    for (label, sessions) in plan.iter() {
        weeks.push((week_number(label)?, label, sessions));
    }
    weeks.sort_by_key(|&(number, _, _)| number);
    Ok(weeks
        .into_iter()
        .map(|(_, label, sessions)| (label, sessions))
        .collect())
}

/// Render a plan into its display-line sequence.
///
/// Weeks whose label breaks the collaborator contract (no digits) are
/// skipped with a warning; the rest of the plan still renders.
#[must_use]
pub fn render(plan: &Plan) -> Render<'_> {
    let mut weeks = Vec::with_capacity(plan.len());
    for (label, sessions) in plan.iter() {
        match week_number(label) {
            Ok(number) => weeks.push((number, label, sessions)),
            Err(error) => warn!(%error, "skipping unorderable week"),
        }
    }
    weeks.sort_by_key(|&(number, _, _)| number);

    Render {
        stack: vec![Frame::Weeks(
            weeks
                .into_iter()
                .map(|(_, label, sessions)| (label, sessions))
                .collect::<Vec<_>>()
                .into_iter(),
        )],
    }
}

/// Lazy iterator over a plan's display lines. Created by [`render`].
#[derive(Debug)]
pub struct Render<'a> {
    stack: Vec<Frame<'a>>,
}

/// One level of the depth-first walk.
#[derive(Debug)]
enum Frame<'a> {
    Weeks(std::vec::IntoIter<(&'a str, &'a [Session])>),
    Sessions(std::slice::Iter<'a, Session>),
    Activities {
        depth: usize,
        iter: std::slice::Iter<'a, Activity>,
    },
}

impl Iterator for Render<'_> {
    type Item = RenderLine;

    fn next(&mut self) -> Option<RenderLine> {
        loop {
            match self.stack.pop()? {
                Frame::Weeks(mut weeks) => {
                    if let Some((label, sessions)) = weeks.next() {
                        self.stack.push(Frame::Weeks(weeks));
                        self.stack.push(Frame::Sessions(sessions.iter()));
                        return Some(RenderLine::WeekHeader {
                            label: label.to_owned(),
                        });
                    }
                }
                Frame::Sessions(mut sessions) => {
                    if let Some(session) = sessions.next() {
                        self.stack.push(Frame::Sessions(sessions));
                        self.stack.push(Frame::Activities {
                            depth: 0,
                            iter: session.activities.iter(),
                        });
                        return Some(RenderLine::SessionHeader {
                            kind: session.kind.clone(),
                            date: session.date.clone(),
                        });
                    }
                }
                Frame::Activities { depth, mut iter } => {
                    if let Some(activity) = iter.next() {
                        self.stack.push(Frame::Activities { depth, iter });
                        let repetitions = match activity {
                            Activity::Leaf(_) => None,
                            Activity::Block(block) => {
                                self.stack.push(Frame::Activities {
                                    depth: depth + 1,
                                    iter: block.activities.iter(),
                                });
                                Some(block.repetitions)
                            }
                        };
                        return Some(RenderLine::Activity {
                            depth,
                            text: activity_text(activity),
                            has_children: activity.has_children(),
                            repetitions,
                        });
                    }
                }
            }
            // Frame exhausted; drop it and resume the one below.
        }
    }
}

/// Assemble an activity's display text.
///
/// Fixed segment order: description, distance, duration, pace, intensity.
/// Absent fields are omitted entirely; pace and intensity carry their
/// field label, distance and duration are bare values.
fn activity_text(activity: &Activity) -> String {
    let details = activity.details();
    let mut text = details.description.clone();
    if let Some(distance) = &details.distance {
        text.push_str(SEGMENT_SEPARATOR);
        text.push_str(&format_distance(distance));
    }
    if let Some(duration) = &details.duration {
        text.push_str(SEGMENT_SEPARATOR);
        text.push_str(duration);
    }
    if let Some(pace) = &details.pace {
        text.push_str(SEGMENT_SEPARATOR);
        text.push_str("Pace: ");
        text.push_str(pace);
    }
    if let Some(intensity) = &details.intensity {
        text.push_str(SEGMENT_SEPARATOR);
        text.push_str("Intensity: ");
        text.push_str(intensity);
    }
    text
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::models::{ActivityBlock, ActivityDetails};

    #[test]
    fn week_number_takes_first_digit_run() {
        assert_eq!(week_number("Week 3").unwrap(), 3);
        assert_eq!(week_number("Semana 12").unwrap(), 12);
        assert_eq!(week_number("3ª semana de 2026").unwrap(), 3);
    }

    #[test]
    fn digitless_label_is_malformed() {
        let error = week_number("taper week").unwrap_err();
        assert_eq!(error.label, "taper week");
    }

    #[test]
    fn activity_text_skips_absent_fields() {
        let activity = Activity::Leaf(ActivityDetails {
            description: "Correr".to_owned(),
            distance: Some("0.5km".to_owned()),
            duration: None,
            pace: Some("4:30 min/km".to_owned()),
            intensity: None,
        });
        assert_eq!(activity_text(&activity), "Correr - 500m - Pace: 4:30 min/km");
    }

    #[test]
    fn block_line_carries_count_and_children_flag() {
        let block = Activity::Block(ActivityBlock {
            details: ActivityDetails::described("Repetir 4x"),
            repetitions: 4,
            activities: vec![Activity::described("Correr")],
        });
        let plan: Plan = [(
            "Semana 1".to_owned(),
            vec![Session {
                kind: "Intervalado".to_owned(),
                date: None,
                activities: vec![block],
            }],
        )]
        .into_iter()
        .collect();

        let lines: Vec<_> = render(&plan).collect();
        assert_eq!(
            lines[2],
            RenderLine::Activity {
                depth: 0,
                text: "Repetir 4x".to_owned(),
                has_children: true,
                repetitions: Some(4),
            }
        );
        assert_eq!(
            lines[3],
            RenderLine::Activity {
                depth: 1,
                text: "Correr".to_owned(),
                has_children: false,
                repetitions: None,
            }
        );
    }
}
