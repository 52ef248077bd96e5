//! Form control policy tying the time budget to the highway selector

use serde::{Deserialize, Serialize};

use crate::value_objects::{RoadPreference, TimeBudget};

/// State of the highway selector after applying the time-budget rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighwayControl {
    /// Selected value
    pub value: RoadPreference,
    /// Whether the user may change the value
    pub enabled: bool,
}

impl HighwayControl {
    /// Apply the rule for a time budget given in minutes
    ///
    /// Budgets of [`TimeBudget::SHORTEST_MINUTES`] or less force local roads
    /// and lock the selector, whatever was selected before. Anything longer
    /// unlocks it and keeps the current selection.
    ///
    /// The threshold is fixed rather than taken from the configured
    /// selector options, so a configured 15-minute option is locked as
    /// well as the 30-minute one.
    #[must_use]
    pub const fn for_minutes(minutes: u32, current: RoadPreference) -> Self {
        if minutes <= TimeBudget::SHORTEST_MINUTES {
            Self {
                value: RoadPreference::LocalRoads,
                enabled: false,
            }
        } else {
            Self {
                value: current,
                enabled: true,
            }
        }
    }

    /// Apply the rule for a validated time budget
    ///
    /// Same threshold as [`Self::for_minutes`].
    #[must_use]
    pub const fn for_time_budget(budget: TimeBudget, current: RoadPreference) -> Self {
        Self::for_minutes(budget.minutes(), current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_minutes_forces_local_roads_and_disables() {
        for current in [RoadPreference::Highway, RoadPreference::LocalRoads] {
            let control = HighwayControl::for_minutes(30, current);
            assert_eq!(control.value, RoadPreference::LocalRoads);
            assert!(!control.enabled);
        }
    }

    #[test]
    fn budgets_below_thirty_minutes_are_locked_too() {
        let control = HighwayControl::for_minutes(15, RoadPreference::Highway);
        assert_eq!(control.value, RoadPreference::LocalRoads);
        assert!(!control.enabled);

        let control = HighwayControl::for_minutes(31, RoadPreference::Highway);
        assert!(control.enabled);
    }

    #[test]
    fn validated_budget_uses_same_threshold() {
        for minutes in [15, 30, 45, 60] {
            let budget = TimeBudget::new(minutes).unwrap();
            assert_eq!(
                HighwayControl::for_time_budget(budget, RoadPreference::Highway),
                HighwayControl::for_minutes(minutes, RoadPreference::Highway)
            );
        }
    }

    #[test]
    fn longer_budgets_reenable_and_keep_selection() {
        let control = HighwayControl::for_minutes(60, RoadPreference::Highway);
        assert_eq!(control.value, RoadPreference::Highway);
        assert!(control.enabled);

        let control = HighwayControl::for_minutes(120, RoadPreference::LocalRoads);
        assert_eq!(control.value, RoadPreference::LocalRoads);
        assert!(control.enabled);
    }

    #[test]
    fn serializes_for_the_page() {
        let control = HighwayControl::for_minutes(30, RoadPreference::Highway);
        let json = serde_json::to_string(&control).unwrap();
        assert_eq!(json, r#"{"value":"no","enabled":false}"#);
    }
}
