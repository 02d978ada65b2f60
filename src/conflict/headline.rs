//! Job-level headline verdict from advisory messages.
//!
//! The matching service attaches free-text advisory messages to each job.
//! An empty list means a perfect fit; a message containing the hard
//! conflict marker means a conflict; anything else means tight timing.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ScheduleComparison;
use crate::config::TimetableConfig;
use crate::models::Interval;

/// One-line compatibility summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Headline {
    /// No advisory messages.
    Perfect,
    /// Advisories present, none hard.
    Tight,
    /// At least one hard-conflict advisory.
    Conflict,
}

impl Headline {
    /// Classifies advisory messages.
    ///
    /// # Example
    /// ```
    /// use u_timetable::conflict::Headline;
    ///
    /// let none: [&str; 0] = [];
    /// assert_eq!(Headline::from_messages(&none, "❌"), Headline::Perfect);
    /// assert_eq!(
    ///     Headline::from_messages(&["❌ Shift overlaps class"], "❌"),
    ///     Headline::Conflict
    /// );
    /// ```
    pub fn from_messages<S: AsRef<str>>(messages: &[S], hard_marker: &str) -> Self {
        if messages.is_empty() {
            Headline::Perfect
        } else if messages.iter().any(|m| m.as_ref().contains(hard_marker)) {
            Headline::Conflict
        } else {
            Headline::Tight
        }
    }

    /// Display text.
    pub fn label(self) -> &'static str {
        match self {
            Headline::Perfect => "Perfect schedule fit",
            Headline::Tight => "Tight timing",
            Headline::Conflict => "Schedule conflict",
        }
    }
}

impl fmt::Display for Headline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Both views of one job's compatibility.
///
/// The local day comparison and the external headline are computed
/// independently and shown side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFit {
    pub comparison: ScheduleComparison,
    pub headline: Headline,
}

impl JobFit {
    /// Evaluates a job against the student's classes.
    pub fn evaluate<S: AsRef<str>>(
        classes: &[Interval],
        shifts: &[Interval],
        advisories: &[S],
        config: &TimetableConfig,
    ) -> Self {
        Self {
            comparison: ScheduleComparison::compare(classes, shifts),
            headline: Headline::from_messages(advisories, &config.hard_conflict_marker),
        }
    }

    /// Whether the headline and the day verdicts tell the same story
    /// about direct conflicts.
    pub fn views_agree(&self) -> bool {
        (self.headline == Headline::Conflict) == self.comparison.has_conflict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HARD_CONFLICT_MARKER;
    use crate::models::Day;

    #[test]
    fn test_headline_empty_is_perfect() {
        let msgs: Vec<String> = Vec::new();
        assert_eq!(
            Headline::from_messages(&msgs, HARD_CONFLICT_MARKER),
            Headline::Perfect
        );
        assert_eq!(Headline::Perfect.to_string(), "Perfect schedule fit");
    }

    #[test]
    fn test_headline_hard_conflict() {
        let msgs = vec![
            "⚠️ Tight timing on monday: 35m gap (Commute is 30m)".to_string(),
            "❌ Shift on monday (10:00-12:00) overlaps with class (09:00-11:00)".to_string(),
        ];
        let h = Headline::from_messages(&msgs, HARD_CONFLICT_MARKER);
        assert_eq!(h, Headline::Conflict);
        assert_eq!(h.label(), "Schedule conflict");
    }

    #[test]
    fn test_headline_tight() {
        let msgs = ["⚠️ Tight timing on friday: rushing from work to class."];
        assert_eq!(
            Headline::from_messages(&msgs, HARD_CONFLICT_MARKER),
            Headline::Tight
        );
    }

    #[test]
    fn test_custom_marker() {
        let msgs = ["[HARD] overlap"];
        assert_eq!(Headline::from_messages(&msgs, "[HARD]"), Headline::Conflict);
        assert_eq!(Headline::from_messages(&msgs, "❌"), Headline::Tight);
    }

    #[test]
    fn test_job_fit_views_may_disagree() {
        let classes = [Interval::new(Day::Monday, 9, 11, "Lecture")];
        let shifts = [Interval::new(Day::Monday, 12, 14, "Work Shift")];
        let advisories = ["❌ Impossible commute on monday"];

        let fit = JobFit::evaluate(&classes, &shifts, &advisories, &TimetableConfig::default());
        assert_eq!(fit.headline, Headline::Conflict);
        assert!(!fit.comparison.has_conflict());
        assert!(!fit.views_agree());
    }

    #[test]
    fn test_job_fit_agreeing() {
        let classes = [Interval::new(Day::Monday, 9, 11, "Lecture")];
        let shifts = [Interval::new(Day::Monday, 10, 14, "Work Shift")];
        let advisories = ["❌ Shift on monday overlaps with class"];

        let fit = JobFit::evaluate(&classes, &shifts, &advisories, &TimetableConfig::default());
        assert!(fit.views_agree());
    }
}
