//! Location-tier grouping and match labels for job listings.
//!
//! Both the tier and the match score are produced by the external
//! matching service; this module only buckets them for display.
//!
//! | Tier | Group |
//! |------|-------|
//! | 1 | Perfect Location |
//! | 2 | Preferred Cities |
//! | 3, 4 | Nearby |
//! | other / missing | Other |

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Tier assumed when the job record carries none.
pub const UNGROUPED_TIER: i64 = 5;

/// Display group for a job's location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LocationGroup {
    PerfectLocation,
    PreferredCities,
    Nearby,
    Other,
}

impl LocationGroup {
    /// All groups in display order.
    pub const ALL: [LocationGroup; 4] = [
        LocationGroup::PerfectLocation,
        LocationGroup::PreferredCities,
        LocationGroup::Nearby,
        LocationGroup::Other,
    ];

    /// Buckets a tier number.
    pub fn from_tier(tier: Option<i64>) -> Self {
        match tier.unwrap_or(UNGROUPED_TIER) {
            1 => LocationGroup::PerfectLocation,
            2 => LocationGroup::PreferredCities,
            3 | 4 => LocationGroup::Nearby,
            _ => LocationGroup::Other,
        }
    }

    /// Section heading.
    pub fn label(self) -> &'static str {
        match self {
            LocationGroup::PerfectLocation => "Perfect Location",
            LocationGroup::PreferredCities => "Preferred Cities",
            LocationGroup::Nearby => "Nearby",
            LocationGroup::Other => "Other",
        }
    }
}

impl fmt::Display for LocationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Location data attached by the matching service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    #[serde(default)]
    pub tier: Option<i64>,
}

/// Match breakdown wrapper, as nested on the job payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    #[serde(default)]
    pub location_data: Option<LocationData>,
}

/// The slice of a job record this crate reads.
///
/// Unknown fields are ignored. The tier may sit under
/// `match_breakdown.location_data` or directly under `location_data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub match_breakdown: Option<MatchBreakdown>,
    #[serde(default)]
    pub location_data: Option<LocationData>,
    /// Advisory messages from schedule analysis. `null` reads as none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub schedule_analysis: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl JobRecord {
    /// Tier from `match_breakdown.location_data`, else from `location_data`.
    pub fn tier(&self) -> Option<i64> {
        self.match_breakdown
            .as_ref()
            .and_then(|b| b.location_data.as_ref())
            .and_then(|l| l.tier)
            .or_else(|| self.location_data.as_ref().and_then(|l| l.tier))
    }

    /// Display group.
    pub fn location_group(&self) -> LocationGroup {
        LocationGroup::from_tier(self.tier())
    }

    /// Match label, when a positive score is present.
    pub fn match_label(&self) -> Option<MatchLabel> {
        self.match_score
            .filter(|score| *score > 0.0)
            .map(MatchLabel::from_score)
    }
}

/// Jobs partitioned by location group, input order kept in each group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedJobs<T> {
    pub perfect_location: Vec<T>,
    pub preferred_cities: Vec<T>,
    pub nearby: Vec<T>,
    pub other: Vec<T>,
}

impl<T> GroupedJobs<T> {
    /// Jobs of one group.
    pub fn group(&self, group: LocationGroup) -> &[T] {
        match group {
            LocationGroup::PerfectLocation => &self.perfect_location,
            LocationGroup::PreferredCities => &self.preferred_cities,
            LocationGroup::Nearby => &self.nearby,
            LocationGroup::Other => &self.other,
        }
    }

    /// Total number of jobs across all groups.
    pub fn len(&self) -> usize {
        LocationGroup::ALL.iter().map(|g| self.group(*g).len()).sum()
    }

    /// Whether every group is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, group: LocationGroup, job: T) {
        match group {
            LocationGroup::PerfectLocation => self.perfect_location.push(job),
            LocationGroup::PreferredCities => self.preferred_cities.push(job),
            LocationGroup::Nearby => self.nearby.push(job),
            LocationGroup::Other => self.other.push(job),
        }
    }
}

/// Partitions jobs by the tier `tier_of` reads from each.
pub fn group_by_tier<T, F>(jobs: impl IntoIterator<Item = T>, mut tier_of: F) -> GroupedJobs<T>
where
    F: FnMut(&T) -> Option<i64>,
{
    let mut grouped = GroupedJobs {
        perfect_location: Vec::new(),
        preferred_cities: Vec::new(),
        nearby: Vec::new(),
        other: Vec::new(),
    };
    for job in jobs {
        let group = LocationGroup::from_tier(tier_of(&job));
        grouped.push(group, job);
    }
    grouped
}

/// Partitions job records by location group.
pub fn group_jobs(jobs: Vec<JobRecord>) -> GroupedJobs<JobRecord> {
    group_by_tier(jobs, JobRecord::tier)
}

/// Badge text for an externally computed match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MatchLabel {
    Fair,
    Good,
    Great,
    Perfect,
}

impl MatchLabel {
    /// >= 90 Perfect, >= 80 Great, >= 70 Good, else Fair.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            MatchLabel::Perfect
        } else if score >= 80.0 {
            MatchLabel::Great
        } else if score >= 70.0 {
            MatchLabel::Good
        } else {
            MatchLabel::Fair
        }
    }

    /// Badge text.
    pub fn label(self) -> &'static str {
        match self {
            MatchLabel::Perfect => "Perfect Match",
            MatchLabel::Great => "Great Match",
            MatchLabel::Good => "Good Match",
            MatchLabel::Fair => "Fair Match",
        }
    }
}

impl fmt::Display for MatchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
