//! Promotional event calendar shown in the client.

use chrono::{DateTime, NaiveTime, Utc};

use crate::config::EventConfig;
use crate::login::SECONDS_PER_DAY;

/// An event with absolute start and end times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub name: String,
    pub description: String,
    /// Start as a unix timestamp.
    pub start_date: i64,
    /// End as a unix timestamp.
    pub end_date: i64,
    pub special_event: i64,
    pub display_priority: i64,
    pub is_seasonal: bool,
    pub color_light: String,
    pub color_dark: String,
}

/// The calendar as sent to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSchedule {
    pub events: Vec<ScheduledEvent>,
    /// When the schedule was built, as a unix timestamp.
    pub last_update: i64,
}

/// Event calendar anchored to the current UTC day.
///
/// The client only shows dates, so events are configured as day offsets and
/// resolved against midnight UTC each time the schedule is requested.
#[derive(Debug, Clone)]
pub struct EventCalendar {
    events: Vec<EventConfig>,
}

impl EventCalendar {
    /// Create a calendar from configured events.
    ///
    /// An empty list selects the built-in demo calendar.
    pub fn new(events: Vec<EventConfig>) -> Self {
        if events.is_empty() {
            Self {
                events: default_events(),
            }
        } else {
            Self { events }
        }
    }

    /// Number of events in the calendar.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the calendar has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Build the schedule for the current time.
    pub fn schedule(&self) -> EventSchedule {
        self.schedule_at(Utc::now())
    }

    /// Build the schedule relative to `now`.
    pub fn schedule_at(&self, now: DateTime<Utc>) -> EventSchedule {
        let today = now.date_naive().and_time(NaiveTime::MIN).and_utc().timestamp();
        let at = |offset_days: i64| today.saturating_add(offset_days.saturating_mul(SECONDS_PER_DAY));

        let events = self
            .events
            .iter()
            .map(|event| ScheduledEvent {
                name: event.name.clone(),
                description: event.description.clone(),
                start_date: at(event.start_offset_days),
                end_date: at(event.end_offset_days),
                special_event: event.special_event,
                display_priority: event.display_priority,
                is_seasonal: event.is_seasonal,
                color_light: event.color_light.clone(),
                color_dark: event.color_dark.clone(),
            })
            .collect();

        EventSchedule {
            events,
            last_update: now.timestamp(),
        }
    }
}

impl Default for EventCalendar {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

fn demo_event(
    number: u32,
    start_offset_days: i64,
    end_offset_days: i64,
    colors: (&str, &str),
) -> EventConfig {
    EventConfig {
        name: format!("Test Event {number}"),
        description: format!("Test Event {number} Description"),
        start_offset_days,
        end_offset_days,
        special_event: 0,
        display_priority: 0,
        is_seasonal: false,
        color_light: colors.0.to_string(),
        color_dark: colors.1.to_string(),
    }
}

/// Demo calendar used when no events are configured.
fn default_events() -> Vec<EventConfig> {
    let green = ("#2D7400", "#235C00");
    let blue = ("#2D74FF", "#235CFF");
    let orange = ("#FF7423", "#FF5C23");

    vec![
        EventConfig {
            display_priority: 1,
            ..demo_event(1, 0, 1, green)
        },
        demo_event(2, 2, 4, blue),
        EventConfig {
            is_seasonal: true,
            ..demo_event(3, 3, 5, blue)
        },
        demo_event(4, -15, 1, orange),
    ]
}
