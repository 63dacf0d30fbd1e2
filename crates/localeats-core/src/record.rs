use serde::{Deserialize, Serialize};

/// Display-ready representation of one suggested restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRecord {
    pub name: String,
    pub cuisine: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Never populated by the maps grounding pipeline; kept for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Successful result of one recommendation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalFoodAnswer {
    pub explanation: String,
    pub records: Vec<RecommendationRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_camel_case_and_skips_missing_fields() {
        let record = RecommendationRecord {
            name: "Jay Fai".to_owned(),
            cuisine: "Local Authentic".to_owned(),
            description: "Found via Google Maps search. Reliable local choice.".to_owned(),
            address: Some(String::new()),
            rating: None,
            map_url: Some("https://maps.google.com/?cid=1".to_owned()),
            image: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["mapUrl"], "https://maps.google.com/?cid=1");
        assert_eq!(json["address"], "");
        assert!(json.get("map_url").is_none());
        assert!(json.get("rating").is_none());
        assert!(json.get("image").is_none());
    }

    #[test]
    fn record_reads_payload_without_optional_fields() {
        let record: RecommendationRecord = serde_json::from_str(
            r#"{"name":"Thip Samai","cuisine":"Thai","description":"Pad thai","mapUrl":"https://maps.google.com/?cid=2"}"#,
        )
        .unwrap();
        assert_eq!(record.map_url.as_deref(), Some("https://maps.google.com/?cid=2"));
        assert!(record.address.is_none());
        assert!(record.rating.is_none());
    }
}
