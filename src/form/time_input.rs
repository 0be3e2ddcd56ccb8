// ABOUTME: Keystroke-level normalizer for the mm:ss time input field
// ABOUTME: Pure transition function that sanitizes any proposed text into a bounded buffer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planilha Project

use std::fmt;

/// The time field's text buffer.
///
/// Created empty at form mount and mutated only through [`transition`],
/// which sanitizes the field's full proposed text on every edit event.
/// There is no failure path: any input, however malformed, produces some
/// valid-shaped buffer (possibly empty), and a stabilized buffer is a
/// fixed point of the transition.
///
/// # Examples
///
/// ```rust
/// use planilha::form::TimeInput;
///
/// let buffer = TimeInput::default();
/// assert_eq!(buffer.transition("500").as_str(), "5:00");
/// assert_eq!(buffer.transition("99:99").as_str(), "59:59");
/// ```
///
/// [`transition`]: TimeInput::transition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeInput(String);

impl TimeInput {
    /// The current buffer text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Apply one edit event, producing the next buffer.
    ///
    /// Sanitization steps, in order:
    ///
    /// 1. keep only digits and colons
    /// 2. keep only the first colon
    /// 3. with more than two characters and no colon, insert one two
    ///    characters from the end (trailing digits read as seconds)
    /// 4. clamp a minutes segment above 59 to `59`
    /// 5. clamp a seconds segment above 59 to `59`
    #[must_use]
    pub fn transition(&self, proposed: &str) -> Self {
        let mut buffer = String::with_capacity(proposed.len() + 1);
        let mut seen_colon = false;
        for character in proposed.chars() {
            if character.is_ascii_digit() {
                buffer.push(character);
            } else if character == ':' && !seen_colon {
                buffer.push(character);
                seen_colon = true;
            }
        }

        if !seen_colon && buffer.len() > 2 {
            buffer.insert(buffer.len() - 2, ':');
        }

        match buffer.split_once(':') {
            Some((minutes, seconds)) => {
                Self(format!("{}:{}", clamp_segment(minutes), clamp_segment(seconds)))
            }
            None => Self(buffer),
        }
    }
}

impl fmt::Display for TimeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Clamp a minutes or seconds segment to 59.
///
/// Empty and sub-limit segments pass through verbatim, leading zeros
/// included.
fn clamp_segment(segment: &str) -> &str {
    let significant = segment.trim_start_matches('0');
    let exceeds =
        significant.len() > 2 || significant.parse::<u8>().is_ok_and(|value| value > 59);
    if exceeds {
        "59"
    } else {
        segment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(current: &str, proposed: &str) -> String {
        TimeInput(current.to_owned()).transition(proposed).0
    }

    #[test]
    fn bare_digits_gain_a_colon() {
        assert_eq!(transition("", "500"), "5:00");
        assert_eq!(transition("", "2530"), "25:30");
        assert_eq!(transition("", "50"), "50");
    }

    #[test]
    fn out_of_range_segments_clamp_to_59() {
        assert_eq!(transition("", "99:99"), "59:59");
        assert_eq!(transition("", "60:00"), "59:00");
        assert_eq!(transition("", "5:70"), "5:59");
        assert_eq!(transition("", "123:456"), "59:59");
    }

    #[test]
    fn non_time_characters_are_stripped() {
        assert_eq!(transition("5:0", "5:0a"), "5:0");
        assert_eq!(transition("", "m5.3:0 0"), "53:00");
    }

    #[test]
    fn only_the_first_colon_survives() {
        assert_eq!(transition("", "5:00:00"), "5:0000");
    }

    #[test]
    fn transition_is_idempotent_on_stabilized_buffers() {
        for raw in ["500", "99:99", "5:0a", "abc", "", "12:34:56", "0:00"] {
            let once = transition("", raw);
            assert_eq!(transition(&once, &once), once, "input {raw:?}");
        }
    }
}
