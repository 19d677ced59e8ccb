// crates/travelog-core/src/model.rs
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier assigned to a city by the backend.
///
/// Backends disagree on whether ids are numbers or strings, so both are
/// accepted and the id is kept (and compared) in its textual form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityId(String);

impl CityId {
    /// Surrounding whitespace is dropped.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for CityId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CityId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<u64> for CityId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl Serialize for CityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Num(serde_json::Number),
            Str(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Num(n) => CityId(n.to_string()),
            RawId::Str(s) => CityId::from(s),
        })
    }
}

/// Map coordinates of a visited city.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

/// A visited city as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: CityId,
    pub city_name: String,
    pub country: String,
    #[serde(default)]
    pub emoji: String,
    /// ISO-8601 timestamp of the visit.
    pub date: String,
    #[serde(default)]
    pub notes: String,
    pub position: Position,
}

/// A city that has not been stored yet; the backend assigns the id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCity {
    pub city_name: String,
    pub country: String,
    pub emoji: String,
    pub date: String,
    #[serde(default)]
    pub notes: String,
    pub position: Position,
}

impl NewCity {
    /// Attach a server-assigned id.
    pub fn with_id(self, id: impl Into<CityId>) -> City {
        City {
            id: id.into(),
            city_name: self.city_name,
            country: self.country,
            emoji: self.emoji,
            date: self.date,
            notes: self.notes,
            position: self.position,
        }
    }
}

/// Current time in the backend's date format (`2027-10-31T15:59:59.138Z`).
pub fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Convert an ISO-3166 alpha-2 country code (e.g. "PT") to its flag emoji.
///
/// Returns `None` unless the input is exactly two ASCII letters.
///
/// ```rust
/// use travelog_core::model::flag_emoji;
///
/// assert_eq!(flag_emoji("pt").as_deref(), Some("🇵🇹"));
/// assert_eq!(flag_emoji("PRT"), None);
/// ```
pub fn flag_emoji(country_code: &str) -> Option<String> {
    let code = country_code.trim();
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    code.chars()
        .map(|c| char::from_u32(0x1F1E6 + (c.to_ascii_uppercase() as u32 - 'A' as u32)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn city_reads_camel_case_and_numeric_id() {
        let city: City = serde_json::from_value(json!({
            "cityName": "Lisbon",
            "country": "Portugal",
            "emoji": "🇵🇹",
            "date": "2027-10-31T15:59:59.138Z",
            "notes": "My favorite city so far!",
            "position": { "lat": 38.727881642324164, "lng": -9.140900099907554 },
            "id": 73930385
        }))
        .unwrap();

        assert_eq!(city.id, CityId::new("73930385"));
        assert_eq!(city.city_name, "Lisbon");
        assert_eq!(city.position.lng, -9.140900099907554);
    }

    #[test]
    fn string_and_numeric_ids_compare_equal() {
        let a: CityId = serde_json::from_value(json!(17806751)).unwrap();
        let b: CityId = serde_json::from_value(json!("17806751")).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, CityId::from(17806751_u64));
    }

    #[test]
    fn every_constructor_trims_the_id() {
        let padded = CityId::new(" 1 ");
        assert_eq!(padded, CityId::from(" 1"));
        assert_eq!(padded, CityId::from(String::from("1 ")));
        assert_eq!(padded, serde_json::from_value::<CityId>(json!(" 1")).unwrap());
        assert_eq!(padded.as_str(), "1");
    }

    #[test]
    fn missing_notes_default_to_empty() {
        let city: City = serde_json::from_value(json!({
            "id": "a1",
            "cityName": "Berlin",
            "country": "Germany",
            "emoji": "🇩🇪",
            "date": "2027-02-12T09:24:11.863Z",
            "position": { "lat": 52.53586782505711, "lng": 13.376933665713324 }
        }))
        .unwrap();
        assert!(city.notes.is_empty());
    }

    #[test]
    fn new_city_serializes_without_id() {
        let new_city = NewCity {
            city_name: "Madrid".into(),
            country: "Spain".into(),
            emoji: "🇪🇸".into(),
            date: "2027-07-15T08:22:53.976Z".into(),
            notes: String::new(),
            position: Position {
                lat: 40.46,
                lng: -3.68,
            },
        };
        let value = serde_json::to_value(&new_city).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["cityName"], "Madrid");
    }

    #[test]
    fn flag_emoji_handles_case_and_rejects_garbage() {
        assert_eq!(flag_emoji("de").as_deref(), Some("🇩🇪"));
        assert_eq!(flag_emoji(" FR ").as_deref(), Some("🇫🇷"));
        assert_eq!(flag_emoji(""), None);
        assert_eq!(flag_emoji("1A"), None);
        assert_eq!(flag_emoji("ñe"), None);
    }
}
