use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::EnumString;

// Session Types

/// The locally persisted sign-in session. Its presence is what makes the
/// client "signed in"; the shell never mutates it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub account: String,
    pub instance_url: String,
    pub last_login: DateTime<Utc>,
}

// Page Types

/// The closed set of pages the client knows how to show.
#[derive(Display, EnumString, EnumIter, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[strum(serialize_all = "kebab-case")]
pub enum PageName {
    PublicTimeline,
    Timeline,
    NewPost,
    User,
    Notices,
    Login,
}

/// Names which view is currently active, plus optional parameters.
/// Supplied by the shared store and treated as an immutable snapshot per
/// render pass. The name stays a raw string here; anything outside the
/// `PageName` set falls out during resolution.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PageDescriptor {
    pub name: Option<String>,
    pub params: im::HashMap<String, String>,
}

impl PageDescriptor {
    pub fn page(name: PageName) -> Self {
        Self {
            name: Some(name.to_string()),
            params: im::HashMap::new(),
        }
    }

    pub fn page_with_params(name: PageName, params: im::HashMap<String, String>) -> Self {
        Self {
            name: Some(name.to_string()),
            params,
        }
    }
}

// Notice Types

/// Unread counters owned by the store, one per notice category.
/// Refreshed wholesale with every snapshot.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NoticeCounts {
    pub favorites: u32,
    pub follows: u32,
    pub addressed: u32,
}

/// The combined unread indicator next to the notices control.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Badge {
    pub total: u32,
    pub visible: bool,
}

impl Badge {
    /// Collapse the three independent counters into one number. The badge
    /// only shows once at least one notice is unread.
    pub fn aggregate(counts: &NoticeCounts) -> Self {
        let total = counts.favorites + counts.follows + counts.addressed;
        Self {
            total,
            visible: total >= 1,
        }
    }
}

// App Events

#[derive(Clone, Debug)]
pub enum AppEvent {
    FocusChange(bool),
    ClosingWindow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_totals_the_three_counters() {
        let counts = NoticeCounts {
            favorites: 2,
            follows: 0,
            addressed: 1,
        };
        let badge = Badge::aggregate(&counts);
        assert_eq!(badge.total, 3);
        assert!(badge.visible);
    }

    #[test]
    fn badge_hides_at_zero() {
        let badge = Badge::aggregate(&NoticeCounts::default());
        assert_eq!(badge.total, 0);
        assert!(!badge.visible);
    }

    #[test]
    fn badge_shows_from_one_onwards() {
        let counts = NoticeCounts {
            favorites: 0,
            follows: 1,
            addressed: 0,
        };
        assert!(Badge::aggregate(&counts).visible);
    }

    #[test]
    fn page_names_round_trip_through_their_string_form() {
        use strum::IntoEnumIterator;
        for name in PageName::iter() {
            assert_eq!(name.to_string().parse::<PageName>(), Ok(name));
        }
    }
}
