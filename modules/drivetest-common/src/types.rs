use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One ingested drive-test result. The nested result payloads are
/// backend-shaped JSON; the console renders them without interpreting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    #[serde(default)]
    pub id: i64,
    pub filename: String,
    /// Ingestion timestamp as the backend serialized it. Rendered verbatim,
    /// never parsed.
    pub timestamp: String,
    #[serde(default)]
    pub summary_results: Value,
    #[serde(default)]
    pub dl_test_results: Value,
    #[serde(default)]
    pub ul_test_results: Value,
    #[serde(default)]
    pub ookla_test_results: Value,
    #[serde(default)]
    pub evaluation_results: Value,
}

/// A cell site sector with its evaluation criteria reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    #[serde(default)]
    pub id: i64,
    pub siteid_sectorid: String,
    pub market: String,
    pub site_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub criteria: String,
    pub criteria_value: String,
}

/// Payload for `PUT /site/{siteid_sectorid}`. The key travels in the path,
/// not the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteUpdate {
    pub market: String,
    pub site_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub criteria: String,
    pub criteria_value: String,
}

/// A KPI pass/fail criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub kpi_name: String,
    pub pass_condition: String,
    pub pass_value: f64,
    pub conditional_pass_condition: String,
    pub conditional_pass_value: f64,
    pub unit: String,
}

/// Payload for `PUT /criteria/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaUpdate {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub kpi_name: String,
    pub pass_condition: String,
    pub pass_value: f64,
    pub conditional_pass_condition: String,
    pub conditional_pass_value: f64,
    pub unit: String,
}

/// Time-series payload for one test result: one trace per KPI column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub data: Vec<Trace>,
    #[serde(default)]
    pub time_range: Option<TimeRange>,
}

/// A single plotted series. Samples can be numeric or categorical
/// (modulation labels), so `y` stays as raw JSON values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub x: Vec<String>,
    pub y: Vec<Value>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criteria_serializes_type_field() {
        let update = CriteriaUpdate {
            kind: "market".to_string(),
            value: "Dallas".to_string(),
            kpi_name: "NR_PCell_SS-RSRP".to_string(),
            pass_condition: ">=".to_string(),
            pass_value: -95.0,
            conditional_pass_condition: ">=".to_string(),
            conditional_pass_value: -100.0,
            unit: "dBm".to_string(),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["type"], "market");
        assert!(json.get("kind").is_none());
        assert_eq!(json["pass_value"], -95.0);
    }

    #[test]
    fn site_update_omits_key_and_id() {
        let update = SiteUpdate {
            market: "Dallas".to_string(),
            site_name: "DAL001".to_string(),
            latitude: 32.7767,
            longitude: -96.797,
            criteria: "market".to_string(),
            criteria_value: "Dallas".to_string(),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("siteid_sectorid").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_result_tolerates_missing_payload_sections() {
        let raw = r#"{"filename":"1234-1_Summary.csv","timestamp":"2024-06-01T12:00:00"}"#;
        let result: TestResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.filename, "1234-1_Summary.csv");
        assert!(result.summary_results.is_null());
    }

    #[test]
    fn timeseries_time_range_is_optional() {
        let raw = r#"{"data":[{"x":["10:00:00.0"],"y":[42.5],"name":"NR_PCell_SS-SINR"}]}"#;
        let series: TimeSeries = serde_json::from_str(raw).unwrap();
        assert_eq!(series.data.len(), 1);
        assert!(series.time_range.is_none());
    }
}
