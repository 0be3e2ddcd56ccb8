// ABOUTME: Form state for the plan request form
// ABOUTME: Re-exports the reducer, its events, and the time-input normalizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planilha Project

//! # Form State
//!
//! The plan request form holds all of its state in one immutable
//! [`FormState`] value. Field edits, submissions, and completions arrive
//! as [`FormEvent`]s; [`reduce`] folds them into the next state. The time
//! field is special-cased through [`TimeInput`], the keystroke-level
//! `mm:ss` normalizer.

mod state;
mod time_input;

pub use state::{reduce, FormEvent, FormState, Generation};
pub use time_input::TimeInput;
