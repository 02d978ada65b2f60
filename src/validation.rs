//! Input validation for saved schedules.
//!
//! Hydration is lenient: it skips bad slots and clips out-of-window hours.
//! This module reports every such problem at once so callers can surface
//! them. Detects:
//! - Unknown day names
//! - Time strings without a readable hour
//! - Empty or inverted spans (`end <= start`)
//! - Hours outside the operating window
//! - Overlapping slots within the same set

use crate::config::TimetableConfig;
use crate::error::SlotError;
use crate::interchange::ScheduleSlot;
use crate::models::{Interval, FIRST_HOUR, LAST_HOUR};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Index of the offending slot in the input.
    pub index: usize,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Day name not recognised.
    UnknownDay,
    /// Start or end time has no readable hour.
    MalformedTime,
    /// `end <= start`.
    EmptySpan,
    /// Some covered hour lies outside 09:00-22:00.
    OutsideWindow,
    /// Shares an hour with an earlier slot of the same set.
    Overlap,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, index: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            index,
            message: message.into(),
        }
    }
}

/// Validates saved schedule slots.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_slots(slots: &[ScheduleSlot], config: &TimetableConfig) -> ValidationResult {
    let mut errors = Vec::new();
    let mut parsed: Vec<(usize, Interval)> = Vec::new();

    for (index, slot) in slots.iter().enumerate() {
        match slot.to_interval(config) {
            Ok(interval) => parsed.push((index, interval)),
            Err(e @ SlotError::UnknownDay(_)) => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDay,
                    index,
                    e.to_string(),
                ));
            }
            Err(e @ SlotError::Time { .. }) => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MalformedTime,
                    index,
                    e.to_string(),
                ));
            }
        }
    }

    for (index, interval) in &parsed {
        if !interval.is_well_formed() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptySpan,
                *index,
                format!(
                    "Slot on {} ends at {:02}:00, not after its start {:02}:00",
                    interval.day, interval.end, interval.start
                ),
            ));
        } else if !interval.within_window() {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutsideWindow,
                *index,
                format!(
                    "Slot on {} ({:02}:00-{:02}:00) extends outside {:02}:00-{:02}:00",
                    interval.day,
                    interval.start,
                    interval.end,
                    FIRST_HOUR,
                    LAST_HOUR + 1
                ),
            ));
        }
    }

    for (i, (index, interval)) in parsed.iter().enumerate() {
        if let Some((earlier, _)) = parsed[..i].iter().find(|(_, other)| other.overlaps(interval)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::Overlap,
                *index,
                format!("Slot {index} overlaps slot {earlier} on {}", interval.day),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(slots: &[ScheduleSlot]) -> ValidationResult {
        validate_slots(slots, &TimetableConfig::default())
    }

    #[test]
    fn test_valid_input() {
        let slots = vec![
            ScheduleSlot::new("Monday", "09:00", "11:00"),
            ScheduleSlot::new("Monday", "11:00", "12:00"),
            ScheduleSlot::new("Friday", "20:00:00", "22:00:00"),
        ];
        assert!(validate(&slots).is_ok());
    }

    #[test]
    fn test_unknown_day() {
        let errors = validate(&[ScheduleSlot::new("Mondy", "09:00", "10:00")]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::UnknownDay);
        assert_eq!(errors[0].index, 0);
    }

    #[test]
    fn test_malformed_time() {
        let errors = validate(&[
            ScheduleSlot::new("Monday", "09:00", "10:00"),
            ScheduleSlot::new("Monday", ":15", "10:00"),
        ])
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::MalformedTime);
        assert_eq!(errors[0].index, 1);
        assert!(errors[0].message.contains("start"));
    }

    #[test]
    fn test_empty_span() {
        let errors = validate(&[ScheduleSlot::new("Tuesday", "12:00", "12:00")]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptySpan);
    }

    #[test]
    fn test_outside_window() {
        let errors = validate(&[ScheduleSlot::new("Tuesday", "08:00", "10:00")]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::OutsideWindow);
        assert!(errors[0].message.contains("09:00-22:00"));
    }

    #[test]
    fn test_overlap() {
        let errors = validate(&[
            ScheduleSlot::new("Thursday", "09:00", "12:00"),
            ScheduleSlot::new("Friday", "10:00", "11:00"),
            ScheduleSlot::new("Thursday", "11:00", "13:00"),
        ])
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::Overlap);
        assert_eq!(errors[0].index, 2);
    }

    #[test]
    fn test_multiple_errors() {
        let errors = validate(&[
            ScheduleSlot::new("Nope", "09:00", "10:00"),
            ScheduleSlot::new("Monday", "x", "10:00"),
            ScheduleSlot::new("Monday", "22:00", "23:00"),
        ])
        .unwrap_err();
        assert!(errors.len() >= 3);
    }
}
