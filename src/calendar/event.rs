use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Shown in place of a display field the data file left out.
pub const MISSING_FIELD: &str = "undefined";

/// One planner activity as it appears in the event file.
///
/// Records are never mutated after load; everything the views show is
/// derived from these fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawEventRecord")]
pub struct EventRecord {
    pub date_text: Option<String>,
    pub date: Option<NaiveDate>,
    pub name: Option<String>,
    pub service: Option<String>,
    pub color: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
    pub cost: Option<String>,
}

impl EventRecord {
    pub fn date_label(&self) -> &str {
        self.date_text.as_deref().unwrap_or(MISSING_FIELD)
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(MISSING_FIELD)
    }

    /// Category label; records without one are grouped under `undefined`.
    pub fn category(&self) -> &str {
        self.service.as_deref().unwrap_or(MISSING_FIELD)
    }

    pub fn time(&self) -> &str {
        self.time.as_deref().unwrap_or(MISSING_FIELD)
    }

    pub fn notes(&self) -> &str {
        self.notes.as_deref().unwrap_or(MISSING_FIELD)
    }

    pub fn cost(&self) -> &str {
        self.cost.as_deref().unwrap_or(MISSING_FIELD)
    }

    /// The record's own colour, or `fallback` when it has none.
    pub fn color_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.color.as_deref().unwrap_or(fallback)
    }

    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.date == Some(date)
    }

    pub fn occurs_in(&self, year: i32, month: u32) -> bool {
        self.date
            .is_some_and(|d| d.year() == year && d.month() == month)
    }
}

// ── JSON shape ──

#[derive(Debug, Deserialize)]
struct RawEventRecord {
    #[serde(rename = "ActivityDate", default, deserialize_with = "display_field")]
    date: Option<String>,
    #[serde(rename = "ActivityName", default, deserialize_with = "display_field")]
    name: Option<String>,
    #[serde(rename = "ActivityService", default, deserialize_with = "display_field")]
    service: Option<String>,
    #[serde(rename = "ActSerColor", default, deserialize_with = "display_field")]
    color: Option<String>,
    #[serde(rename = "ActivityTime", default, deserialize_with = "display_field")]
    time: Option<String>,
    #[serde(rename = "ActivityNotes", default, deserialize_with = "display_field")]
    notes: Option<String>,
    #[serde(rename = "ActivityCost", default, deserialize_with = "display_field")]
    cost: Option<String>,
}

impl From<RawEventRecord> for EventRecord {
    fn from(raw: RawEventRecord) -> Self {
        let date = raw.date.as_deref().and_then(parse_date);
        Self {
            date_text: raw.date,
            date,
            name: raw.name,
            service: raw.service,
            color: raw.color.filter(|c| !c.trim().is_empty()),
            time: raw.time,
            notes: raw.notes,
            cost: raw.cost,
        }
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Accept any scalar for a display field: strings verbatim, numbers and
/// booleans by their JSON text, `null` as absent.
fn display_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_source_field_names() {
        let json = r##"{
            "ActivityDate": "2024-03-15",
            "ActivityName": "Art Class",
            "ActivityService": "Art",
            "ActSerColor": "#ff0000",
            "ActivityTime": "10:00",
            "ActivityNotes": "Bring an apron",
            "ActivityCost": 12.5
        }"##;
        let ev: EventRecord = serde_json::from_str(json).unwrap();

        assert_eq!(ev.date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(ev.name(), "Art Class");
        assert_eq!(ev.category(), "Art");
        assert_eq!(ev.color_or("#000"), "#ff0000");
        assert_eq!(ev.cost(), "12.5");
        assert!(ev.occurs_in(2024, 3));
        assert!(!ev.occurs_in(2024, 4));
    }

    #[test]
    fn missing_fields_fall_back() {
        let ev: EventRecord =
            serde_json::from_str(r#"{"ActivityDate": "2024-03-15", "ActSerColor": ""}"#).unwrap();

        assert_eq!(ev.color, None);
        assert_eq!(ev.color_or("#000"), "#000");
        assert_eq!(ev.name(), MISSING_FIELD);
        assert_eq!(ev.time(), MISSING_FIELD);
        assert_eq!(ev.category(), MISSING_FIELD);
    }

    #[test]
    fn unparseable_date_keeps_text_but_never_matches() {
        let ev: EventRecord =
            serde_json::from_str(r#"{"ActivityDate": "next tuesday", "ActivityName": "x"}"#)
                .unwrap();

        assert_eq!(ev.date, None);
        assert_eq!(ev.date_label(), "next tuesday");
        assert!(!ev.occurs_on(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
    }
}
