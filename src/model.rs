use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Activity as served by `GET /activities`. The name is the map key on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

impl Activity {
    /// Capacity minus enrollment. Not clamped: the server owns that contract.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ActivityDetails {
    #[serde(default)]
    description: String,
    #[serde(default)]
    schedule: String,
    max_participants: i64,
    #[serde(default)]
    participants: Vec<String>,
}

/// The whole roster, in the key order the server sent it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    activities: Vec<Activity>,
}

impl Roster {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

// serde_json's default Map sorts keys; walk the object by hand to keep server order.
impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RosterVisitor;

        impl<'de> Visitor<'de> for RosterVisitor {
            type Value = Roster;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object keyed by activity name")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Roster, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut activities = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, d)) = map.next_entry::<String, ActivityDetails>()? {
                    activities.push(Activity {
                        name,
                        description: d.description,
                        schedule: d.schedule,
                        max_participants: d.max_participants,
                        participants: d.participants,
                    });
                }
                Ok(Roster { activities })
            }
        }

        deserializer.deserialize_map(RosterVisitor)
    }
}

/// Body of a mutation response. Success carries `message`, rejection carries `detail`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Reply {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl Reply {
    /// An empty message counts as absent.
    pub fn message(&self) -> Option<String> {
        self.message.clone().filter(|m| !m.is_empty())
    }

    /// Only non-empty string details are shown; validation lists and the like
    /// count as absent.
    pub fn detail(&self) -> Option<String> {
        self.detail
            .as_ref()
            .and_then(|d| d.as_str())
            .filter(|d| !d.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_keeps_server_order() {
        let raw = r#"{
            "Programming Class": {"description": "Learn", "schedule": "Tue", "max_participants": 20, "participants": []},
            "Chess Club": {"description": "Play", "schedule": "Fri", "max_participants": 12, "participants": ["a@x.edu"]},
            "Art": {"description": "Paint", "schedule": "Mon", "max_participants": 5, "participants": []}
        }"#;
        let roster: Roster = serde_json::from_str(raw).unwrap();
        let names: Vec<&str> = roster.names().collect();
        assert_eq!(names, vec!["Programming Class", "Chess Club", "Art"]);
        assert_eq!(roster.activities()[1].participants, vec!["a@x.edu".to_string()]);
    }

    #[test]
    fn missing_participants_is_empty() {
        let raw = r#"{"Chess Club": {"description": "Play", "schedule": "Fri", "max_participants": 3}}"#;
        let roster: Roster = serde_json::from_str(raw).unwrap();
        assert!(roster.activities()[0].participants.is_empty());
        assert_eq!(roster.activities()[0].spots_left(), 3);
    }

    #[test]
    fn spots_left_is_capacity_minus_enrollment() {
        let a = Activity {
            name: "Gym".into(),
            description: String::new(),
            schedule: String::new(),
            max_participants: 2,
            participants: vec!["a".into(), "b".into(), "c".into()],
        };
        assert_eq!(a.spots_left(), -1);
    }

    #[test]
    fn non_object_roster_is_an_error() {
        assert!(serde_json::from_str::<Roster>("[1, 2]").is_err());
        assert!(serde_json::from_str::<Roster>(r#"{"x": {"description": "d"}}"#).is_err());
    }

    #[test]
    fn reply_detail_only_when_string() {
        let r: Reply = serde_json::from_str(r#"{"detail": "Activity full"}"#).unwrap();
        assert_eq!(r.detail().as_deref(), Some("Activity full"));
        assert_eq!(r.message(), None);

        let raw = r#"{"detail": [{"loc": ["query", "email"]}]}"#;
        let r: Reply = serde_json::from_str(raw).unwrap();
        assert_eq!(r.detail(), None);
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let r: Reply = serde_json::from_str(r#"{"message": "", "detail": ""}"#).unwrap();
        assert_eq!(r.message(), None);
        assert_eq!(r.detail(), None);
    }
}
