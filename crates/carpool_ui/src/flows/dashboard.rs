//! Rider dashboard presentation helpers.

use crate::{
    error::AppError,
    paths,
    session::SessionStore,
    types::{Activity, DashboardStats},
};

pub const DASHBOARD_FAILED: &str = "Could not load your dashboard. Please try again.";

const UNAUTHORIZED: u16 = 401;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
}

#[must_use]
pub fn stat_tiles(stats: &DashboardStats) -> Vec<StatTile> {
    vec![
        StatTile {
            label: "Total rides",
            value: stats.total_rides.to_string(),
        },
        StatTile {
            label: "Upcoming",
            value: stats.upcoming_rides.to_string(),
        },
        StatTile {
            label: "Completed",
            value: stats.completed_rides.to_string(),
        },
        StatTile {
            label: "Rides offered",
            value: stats.rides_offered.to_string(),
        },
        StatTile {
            label: "Money saved",
            value: format!("${:.2}", stats.money_saved),
        },
        StatTile {
            label: "CO\u{2082} saved",
            value: format!("{:.1} kg", stats.co2_saved_kg),
        },
    ]
}

/// Human label for an activity kind such as `ride_completed`.
#[must_use]
pub fn activity_label(activity: &Activity) -> String {
    let words: Vec<String> = activity
        .kind
        .split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .collect();

    let mut label = words.join(" ");
    if let Some(first) = label.get(..1) {
        label = format!("{}{}", first.to_uppercase(), &label[1..]);
    }
    if label.is_empty() {
        "Activity".to_string()
    } else {
        label
    }
}

/// A rejected token ends the session. Returns the route to leave for, if any.
pub fn handle_failure(store: &mut SessionStore, err: &AppError) -> Option<&'static str> {
    if err.status() == Some(UNAUTHORIZED) {
        store.logout();
        Some(paths::LOGIN)
    } else {
        None
    }
}
