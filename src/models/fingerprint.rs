use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Record attribute that receives the dominant icon color
pub const COLOR_FIELD: &str = "color";

/// Record attribute naming the technology's icon file
pub const ICON_FIELD: &str = "icon";

/// The fingerprint database: technologies keyed by name
///
/// Only `apps` is interpreted. Every other top-level key, and every field of
/// every record, is carried through untouched so a load/save cycle loses
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FingerprintDatabase {
    #[serde(default)]
    pub apps: IndexMap<String, FingerprintRecord>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One technology entry. The schema is owned by the fingerprint database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FingerprintRecord(Map<String, Value>);

impl FingerprintRecord {
    /// Icon file name, if the record names one
    pub fn icon(&self) -> Option<&str> {
        self.0.get(ICON_FIELD).and_then(Value::as_str)
    }

    /// Hex color previously attached to this record
    pub fn color(&self) -> Option<&str> {
        self.0.get(COLOR_FIELD).and_then(Value::as_str)
    }

    /// Attach a hex color, replacing any previous value in place
    pub fn set_color(&mut self, hex: impl Into<String>) {
        self.0
            .insert(COLOR_FIELD.to_string(), Value::String(hex.into()));
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl FingerprintDatabase {
    /// Technology name that owns the icon `file_name`
    ///
    /// A record whose `icon` equals the file name wins. Otherwise the record
    /// keyed by the file stem (the name without its last extension) is used.
    pub fn technology_for_icon(&self, file_name: &str) -> Option<&str> {
        if let Some((name, _)) = self
            .apps
            .iter()
            .find(|(_, record)| record.icon() == Some(file_name))
        {
            return Some(name.as_str());
        }

        let stem = Path::new(file_name).file_stem()?.to_str()?;
        self.apps.get_key_value(stem).map(|(name, _)| name.as_str())
    }

    /// Attach `hex` to the record owning `file_name`
    ///
    /// Returns the technology name, or `None` when no record matches.
    pub fn set_icon_color(&mut self, file_name: &str, hex: &str) -> Option<String> {
        let name = self.technology_for_icon(file_name)?.to_string();
        if let Some(record) = self.apps.get_mut(&name) {
            record.set_color(hex);
        }
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> FingerprintDatabase {
        serde_json::from_value(json!({
            "apps": {
                "Adobe Flash": {
                    "cats": [19],
                    "icon": "Adobe Flash.svg",
                    "website": "https://www.adobe.com/products/flashplayer.html"
                },
                "jQuery": {
                    "cats": [59],
                    "icon": "jQuery.svg"
                },
                "Nginx": {
                    "cats": [22],
                    "headers": { "server": "nginx(?:/([\\d.]+))?\\;version:\\1" }
                }
            },
            "categories": { "19": { "name": "Miscellaneous" } }
        }))
        .unwrap()
    }

    #[test]
    fn test_technology_for_icon_by_icon_field() {
        let db = sample();
        assert_eq!(db.technology_for_icon("Adobe Flash.svg"), Some("Adobe Flash"));
        assert_eq!(db.technology_for_icon("jQuery.svg"), Some("jQuery"));
    }

    #[test]
    fn test_technology_for_icon_falls_back_to_stem() {
        let db = sample();
        assert_eq!(db.technology_for_icon("Nginx.png"), Some("Nginx"));
        // Converted siblings keep the original name as their stem
        assert_eq!(db.technology_for_icon("Nginx.svg"), Some("Nginx"));
    }

    #[test]
    fn test_technology_for_icon_is_case_sensitive() {
        let db = sample();
        assert_eq!(db.technology_for_icon("jquery.svg"), None);
        assert_eq!(db.technology_for_icon("unknown.png"), None);
    }

    #[test]
    fn test_set_icon_color() {
        let mut db = sample();
        assert_eq!(
            db.set_icon_color("jQuery.svg", "#0868ac"),
            Some("jQuery".to_string())
        );
        assert_eq!(db.apps["jQuery"].color(), Some("#0868ac"));

        // Overwrites in place
        db.set_icon_color("jQuery.svg", "#000000");
        assert_eq!(db.apps["jQuery"].color(), Some("#000000"));
    }

    #[test]
    fn test_set_icon_color_unmatched_is_noop() {
        let mut db = sample();
        let before = db.clone();
        assert_eq!(db.set_icon_color("Missing.svg", "#ffffff"), None);
        assert_eq!(db, before);
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let db = sample();
        let value = serde_json::to_value(&db).unwrap();

        assert_eq!(value["categories"]["19"]["name"], json!("Miscellaneous"));
        assert_eq!(value["apps"]["Nginx"]["cats"], json!([22]));
        assert_eq!(
            value["apps"]["Adobe Flash"]["website"],
            json!("https://www.adobe.com/products/flashplayer.html")
        );

        let reparsed: FingerprintDatabase = serde_json::from_value(value).unwrap();
        assert_eq!(reparsed, db);
    }

    #[test]
    fn test_record_key_order_is_preserved() {
        let db = sample();
        let keys: Vec<&str> = db.apps.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Adobe Flash", "jQuery", "Nginx"]);

        let fields: Vec<&str> = db.apps["Adobe Flash"]
            .fields()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(fields, vec!["cats", "icon", "website"]);
    }
}
