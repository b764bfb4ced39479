//! Structured itinerary returned by the generation service
//!
//! These types mirror the response schema sent with the itinerary call.
//! The payload is trusted opaque data from the AI boundary: day numbers
//! are carried as returned, with no gap/duplicate/order enforcement.

use serde::{Deserialize, Serialize};

/// A multi-day trip plan, days ordered as returned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryPlan {
    pub days: Vec<DayPlan>,
}

impl ItineraryPlan {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total activity count across all days
    pub fn activity_count(&self) -> usize {
        self.days.iter().map(|d| d.activities.len()).sum()
    }
}

/// One day of the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    pub title: String,
    pub activities: Vec<Activity>,
}

/// A single scheduled activity
///
/// `time` is a free-form label like "9am" or "late afternoon", not a
/// parsed timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub time: String,
    pub location: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_plan() {
        let json = r#"{
            "days": [
                {
                    "day": 1,
                    "title": "Motor Valley",
                    "activities": [
                        {
                            "time": "9am",
                            "location": "Enzo Ferrari Museum",
                            "description": "Start under the yellow canopy."
                        }
                    ]
                }
            ]
        }"#;

        let plan: ItineraryPlan = serde_json::from_str(json).expect("plan should parse");
        assert_eq!(plan.days.len(), 1);
        assert_eq!(plan.days[0].day, 1);
        assert_eq!(plan.days[0].activities[0].time, "9am");
        assert_eq!(plan.activity_count(), 1);
    }

    #[test]
    fn test_day_numbering_not_enforced() {
        // Gaps and duplicates pass through untouched
        let json = r#"{
            "days": [
                {"day": 3, "title": "A", "activities": []},
                {"day": 3, "title": "B", "activities": []}
            ]
        }"#;

        let plan: ItineraryPlan = serde_json::from_str(json).expect("plan should parse");
        assert_eq!(plan.days[0].day, 3);
        assert_eq!(plan.days[1].day, 3);
    }

    #[test]
    fn test_missing_field_fails() {
        let json = r#"{"days": [{"day": 1, "activities": []}]}"#;
        assert!(serde_json::from_str::<ItineraryPlan>(json).is_err());
    }
}
