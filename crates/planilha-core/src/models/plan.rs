// ABOUTME: Training plan models including Plan, Session, and the recursive Activity union
// ABOUTME: Enforces the composite-iff-children invariant during deserialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planilha Project

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A complete multi-week training plan.
///
/// Maps week labels (e.g. `"Week 3"`, `"Semana 3"`) to the sessions of
/// that week. Labels are unique. Entries keep the order the collaborator
/// sent them in, but that order carries no meaning: display order is
/// always derived from the week number embedded in each label.
///
/// # Examples
///
/// ```rust
/// use planilha_core::models::{Plan, Session};
///
/// let plan: Plan = [
///     ("Semana 1".to_owned(), vec![Session::new("Regenerativo")]),
///     ("Semana 2".to_owned(), vec![Session::new("Intervalado")]),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(plan.len(), 2);
/// assert!(plan.get("Semana 1").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    weeks: Vec<(String, Vec<Session>)>,
}

impl Plan {
    /// Create an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of weeks in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    /// Whether the plan has no weeks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Sessions for the given week label, if present.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&[Session]> {
        self.weeks
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, sessions)| sessions.as_slice())
    }

    /// Insert a week. Replaces the sessions of an existing label.
    pub fn insert(&mut self, label: impl Into<String>, sessions: Vec<Session>) {
        let label = label.into();
        match self.weeks.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, slot)) => *slot = sessions,
            None => self.weeks.push((label, sessions)),
        }
    }

    /// Iterate over `(label, sessions)` entries in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Session])> {
        self.weeks
            .iter()
            .map(|(label, sessions)| (label.as_str(), sessions.as_slice()))
    }
}

impl FromIterator<(String, Vec<Session>)> for Plan {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Session>)>>(iter: I) -> Self {
        let mut plan = Self::new();
        for (label, sessions) in iter {
            plan.insert(label, sessions);
        }
        plan
    }
}

impl Serialize for Plan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.weeks.len()))?;
        for (label, sessions) in &self.weeks {
            map.serialize_entry(label, sessions)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Plan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PlanVisitor;

        impl<'de> Visitor<'de> for PlanVisitor {
            type Value = Plan;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map from week label to a list of sessions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Plan, A::Error> {
                let mut weeks: Vec<(String, Vec<Session>)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, sessions)) = access.next_entry::<String, Vec<Session>>()? {
                    if weeks.iter().any(|(existing, _)| *existing == label) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate week label '{label}'"
                        )));
                    }
                    weeks.push((label, sessions));
                }
                Ok(Plan { weeks })
            }
        }

        deserializer.deserialize_map(PlanVisitor)
    }
}

/// One training event within a week (e.g. a single run workout).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Session type label (e.g. "Intervalado", "Longo")
    #[serde(rename = "type")]
    pub kind: String,
    /// Short date stamp for the session (`"DD/MM"`), when the service
    /// provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Ordered instructions making up the session; may be empty
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Session {
    /// Create a session with the given type label and no activities.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            date: None,
            activities: Vec::new(),
        }
    }
}

/// Detail fields shared by every activity.
///
/// Only `description` is mandatory; the rest are independently present.
/// `distance` is a display string, either free-form or the canonical
/// `"<number>km"` the formatter recognizes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityDetails {
    /// What to do (e.g. "Correr", "Descansar")
    pub description: String,
    /// Distance to cover, display string
    pub distance: Option<String>,
    /// How long, display string (e.g. "8min")
    pub duration: Option<String>,
    /// Target pace, display string (e.g. "4:30 a 4:35 min/km")
    pub pace: Option<String>,
    /// Effort level, display string (e.g. "Leve")
    pub intensity: Option<String>,
}

impl ActivityDetails {
    /// Details with only a description set.
    #[must_use]
    pub fn described(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }
}

/// A repeated block of nested activities.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityBlock {
    /// The block's own detail fields (description at minimum)
    pub details: ActivityDetails,
    /// How many times the nested block conceptually repeats; at least 1.
    /// Display shows the nested list once, annotated by this count.
    pub repetitions: u32,
    /// The nested activities, in order; never empty
    pub activities: Vec<Activity>,
}

/// One instruction within a session.
///
/// Recursive tagged union: a `Leaf` is a single instruction, a `Block`
/// nests further activities under a repetition count. An activity is a
/// `Block` exactly when the source payload carries a non-empty
/// `activities` list; that invariant is enforced at decode time, so a
/// constructed `Block` always has children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawActivity", into = "RawActivity")]
pub enum Activity {
    /// A single instruction
    Leaf(ActivityDetails),
    /// A repeated block of nested instructions
    Block(ActivityBlock),
}

impl Activity {
    /// A leaf activity with only a description.
    #[must_use]
    pub fn described(description: impl Into<String>) -> Self {
        Self::Leaf(ActivityDetails::described(description))
    }

    /// The detail fields, for either variant.
    #[must_use]
    pub fn details(&self) -> &ActivityDetails {
        match self {
            Self::Leaf(details) => details,
            Self::Block(block) => &block.details,
        }
    }

    /// Whether this activity nests children.
    #[must_use]
    pub fn has_children(&self) -> bool {
        matches!(self, Self::Block(_))
    }
}

/// Wire-shape mirror of [`Activity`].
///
/// The service serializes both variants as one flat object; which variant
/// applies is decided by whether `activities` is non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawActivity {
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    distance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    intensity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    repetitions: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    activities: Vec<RawActivity>,
}

impl TryFrom<RawActivity> for Activity {
    type Error = String;

    fn try_from(raw: RawActivity) -> Result<Self, Self::Error> {
        let details = ActivityDetails {
            description: raw.description,
            distance: raw.distance,
            duration: raw.duration,
            pace: raw.pace,
            intensity: raw.intensity,
        };
        if raw.activities.is_empty() {
            // A repetition count without children is meaningless; drop it.
            return Ok(Self::Leaf(details));
        }
        let repetitions = raw.repetitions.unwrap_or(1);
        if repetitions == 0 {
            return Err(format!(
                "activity '{}' has a repetition count of zero",
                details.description
            ));
        }
        let activities = raw
            .activities
            .into_iter()
            .map(Self::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::Block(ActivityBlock {
            details,
            repetitions,
            activities,
        }))
    }
}

impl From<Activity> for RawActivity {
    fn from(activity: Activity) -> Self {
        match activity {
            Activity::Leaf(details) => raw_from_details(details, None, Vec::new()),
            Activity::Block(block) => raw_from_details(
                block.details,
                Some(block.repetitions),
                block.activities.into_iter().map(Self::from).collect(),
            ),
        }
    }
}

fn raw_from_details(
    details: ActivityDetails,
    repetitions: Option<u32>,
    activities: Vec<RawActivity>,
) -> RawActivity {
    RawActivity {
        description: details.description,
        distance: details.distance,
        duration: details.duration,
        pace: details.pace,
        intensity: details.intensity,
        repetitions,
        activities,
    }
}
