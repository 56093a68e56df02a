//models.rs
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Server-assigned identifier. The backend may hand these out as strings or
/// as integers, both decode here.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct EntityId(pub String);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => EntityId(s),
            Raw::Int(n) => EntityId(n.to_string()),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(alias = "_id")]
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Exercise {
    /// "Chest • Barbell" style caption, skipping missing parts.
    pub fn caption(&self) -> String {
        [self.muscle_group.as_deref(), self.equipment.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" • ")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewExercise {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutItem {
    pub exercise_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sets: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reps: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rest_seconds: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    #[serde(alias = "_id")]
    pub id: EntityId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<WorkoutItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewWorkoutTemplate<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub items: &'a [WorkoutItem],
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerformedSet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub set_number: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weight: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reps: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionItem {
    pub exercise_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target_sets: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target_reps: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub performed_sets: Vec<PerformedSet>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(alias = "_id")]
    pub id: EntityId,
    pub date_str: NaiveDate,
    pub workout_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<SessionItem>,
}

/// Creation payload for a session: the whole item/set tree in one body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewSession<'a> {
    pub date_str: NaiveDate,
    pub workout_title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'a str>,
    pub items: &'a [Arc<SessionItem>],
}

/// Trims `value` and maps blank input to `None`.
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    null_as_default(deserializer)
}

// `null` numbers from the backend read as zero; zero target reps later
// falls back to the editor's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids_decode_from_strings_and_integers() {
        let a: Exercise = serde_json::from_value(json!({"id": "abc", "name": "Squat"})).unwrap();
        let b: Exercise = serde_json::from_value(json!({"_id": 7, "name": "Row"})).unwrap();
        assert_eq!(a.id, EntityId("abc".into()));
        assert_eq!(b.id, EntityId("7".into()));
    }

    #[test]
    fn missing_or_null_collections_decode_as_empty() {
        let t: WorkoutTemplate =
            serde_json::from_value(json!({"id": "t1", "title": "Push", "items": null})).unwrap();
        assert!(t.items.is_empty());

        let s: Session = serde_json::from_value(json!({
            "id": "s1",
            "date_str": "2024-05-01",
            "workout_title": "Push",
            "items": [{"exercise_name": "Bench", "target_sets": 3, "target_reps": 10}]
        }))
        .unwrap();
        assert!(s.items[0].performed_sets.is_empty());
        assert_eq!(s.date_str, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn null_numbers_decode_as_zero() {
        let item: WorkoutItem = serde_json::from_value(json!({
            "exercise_name": "Plank", "sets": 3, "reps": null, "rest_seconds": null
        }))
        .unwrap();
        assert_eq!((item.sets, item.reps, item.rest_seconds), (3, 0, 0));

        let session: Session = serde_json::from_value(json!({
            "id": "s1",
            "date_str": "2024-05-01",
            "workout_title": "Push",
            "items": [{
                "exercise_name": "Bench",
                "target_sets": null,
                "target_reps": null,
                "performed_sets": [{"set_number": 1, "weight": null, "reps": 8, "rpe": null}]
            }]
        }))
        .unwrap();
        let item = &session.items[0];
        assert_eq!((item.target_sets, item.target_reps), (0, 0));
        assert_eq!(item.performed_sets[0].weight, 0.0);
        assert_eq!(item.performed_sets[0].rpe, None);
    }

    #[test]
    fn absent_optionals_are_left_off_the_wire() {
        let body = serde_json::to_value(NewExercise {
            name: "Squat".into(),
            muscle_group: Some("Legs".into()),
            equipment: None,
            notes: None,
        })
        .unwrap();
        assert_eq!(body, json!({"name": "Squat", "muscle_group": "Legs"}));

        let set = PerformedSet { set_number: 1, weight: 60.0, reps: 10, rpe: None };
        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            json!({"set_number": 1, "weight": 60.0, "reps": 10})
        );
    }

    #[test]
    fn caption_skips_missing_parts() {
        let ex = Exercise {
            id: EntityId::default(),
            name: "Bench".into(),
            muscle_group: None,
            equipment: Some("Barbell".into()),
            notes: None,
        };
        assert_eq!(ex.caption(), "Barbell");
    }

    #[test]
    fn non_blank_trims() {
        assert_eq!(non_blank("  Chest "), Some("Chest"));
        assert_eq!(non_blank("   "), None);
    }
}
