use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Upstream status code for a monitor that is being checked.
pub const ACTIVE_STATUS: &str = "ACTIVE";

// Monitor record as returned by the UptimeRobot v3 API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorRecord {
    pub id: i64,
    pub friendly_name: String,
    #[serde(default)]
    pub status: Option<String>,
    pub url: String,
    #[serde(default)]
    pub last_day_uptimes: Option<UptimeWindow>,
    #[serde(default)]
    pub create_date_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UptimeWindow {
    #[serde(default)]
    pub bucket_size: u64,
    #[serde(default)]
    pub histogram: Vec<HistogramBucket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBucket {
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub uptime: f64,
}

// Buckets without a sample carry `"uptime": null`; they count as 0 in the mean.
fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `GET /v3/monitors`.
///
/// Entries stay as raw JSON so that a malformed record only affects the
/// service that asks for it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorListResponse {
    #[serde(default)]
    pub data: Option<Vec<Value>>,
    #[serde(default)]
    pub next_link: Option<String>,
}

/// Pick the raw entry with the given `id` out of a monitor listing.
pub fn find_entry(entries: Vec<Value>, id: i64) -> Option<Value> {
    entries
        .into_iter()
        .find(|entry| entry.get("id").and_then(Value::as_i64) == Some(id))
}

impl MonitorRecord {
    pub fn histogram(&self) -> &[HistogramBucket] {
        self.last_day_uptimes
            .as_ref()
            .map(|window| window.histogram.as_slice())
            .unwrap_or_default()
    }

    /// Unweighted mean of the histogram's uptime values, 0 when empty.
    pub fn uptime_percentage(&self) -> f64 {
        mean_uptime(self.histogram())
    }

    pub fn is_active(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|code| code.eq_ignore_ascii_case(ACTIVE_STATUS))
    }

    /// Creation time, accepting RFC 3339 or a bare `YYYY-MM-DD HH:MM:SS` in UTC.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.create_date_time.as_deref()?.trim();

        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }

        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

pub fn mean_uptime(buckets: &[HistogramBucket]) -> f64 {
    if buckets.is_empty() {
        return 0.0;
    }

    let total: f64 = buckets.iter().map(|b| b.uptime).sum();
    total / buckets.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_with_uptimes(uptimes: &[f64]) -> MonitorRecord {
        MonitorRecord {
            id: 1,
            friendly_name: "api".to_string(),
            status: Some("ACTIVE".to_string()),
            url: "https://api.example.com".to_string(),
            last_day_uptimes: Some(UptimeWindow {
                bucket_size: 3600,
                histogram: uptimes
                    .iter()
                    .enumerate()
                    .map(|(i, uptime)| HistogramBucket {
                        timestamp: 1_700_000_000 + i as i64 * 3600,
                        uptime: *uptime,
                    })
                    .collect(),
            }),
            create_date_time: None,
        }
    }

    #[test]
    fn test_uptime_is_plain_mean() {
        assert_eq!(record_with_uptimes(&[100.0, 80.0]).uptime_percentage(), 90.0);
        assert_eq!(record_with_uptimes(&[100.0, 100.0, 97.0]).uptime_percentage(), 99.0);
    }

    #[test]
    fn test_uptime_empty_or_missing_histogram() {
        assert_eq!(record_with_uptimes(&[]).uptime_percentage(), 0.0);

        let mut record = record_with_uptimes(&[50.0]);
        record.last_day_uptimes = None;
        assert_eq!(record.uptime_percentage(), 0.0);
    }

    #[test]
    fn test_is_active_ignores_case() {
        let mut record = record_with_uptimes(&[]);
        assert!(record.is_active());

        record.status = Some("active".to_string());
        assert!(record.is_active());

        record.status = Some("PAUSED".to_string());
        assert!(!record.is_active());

        record.status = None;
        assert!(!record.is_active());
    }

    #[test]
    fn test_deserialize_upstream_payload() {
        let payload = json!({
            "data": [
                {
                    "id": 800123,
                    "friendlyName": "Main API",
                    "status": "ACTIVE",
                    "url": "https://api.example.com/health",
                    "lastDayUptimes": {
                        "bucketSize": 3600,
                        "histogram": [
                            { "timestamp": 1700000000, "uptime": 100 },
                            { "timestamp": 1700003600, "uptime": 99.5 }
                        ]
                    },
                    "createDateTime": "2024-03-01T10:00:00Z"
                },
                {
                    "id": 800124,
                    "friendlyName": "Docs",
                    "status": null,
                    "url": "https://docs.example.com"
                }
            ],
            "nextLink": null
        });

        let response: MonitorListResponse = serde_json::from_value(payload).unwrap();
        let data: Vec<MonitorRecord> = response
            .data
            .unwrap()
            .into_iter()
            .map(|entry| serde_json::from_value(entry).unwrap())
            .collect();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].friendly_name, "Main API");
        assert_eq!(data[0].histogram().len(), 2);
        assert_eq!(data[0].uptime_percentage(), 99.75);
        assert!(data[1].last_day_uptimes.is_none());
        assert!(data[1].status.is_none());
        assert!(response.next_link.is_none());
    }

    #[test]
    fn test_null_bucket_uptime_counts_as_zero() {
        let record: MonitorRecord = serde_json::from_value(json!({
            "id": 7,
            "friendlyName": "Queue",
            "status": "ACTIVE",
            "url": "https://queue.example.com",
            "lastDayUptimes": {
                "bucketSize": 3600,
                "histogram": [
                    { "timestamp": 1700000000, "uptime": 100 },
                    { "timestamp": 1700003600, "uptime": null }
                ]
            }
        }))
        .unwrap();

        assert_eq!(record.uptime_percentage(), 50.0);
    }

    #[test]
    fn test_find_entry_ignores_other_records() {
        let entries = vec![
            json!({ "id": 1, "friendlyName": null }),
            json!({ "id": "2" }),
            json!({ "id": 3, "friendlyName": "Docs" }),
        ];

        let entry = find_entry(entries.clone(), 3).unwrap();
        assert_eq!(entry["friendlyName"], "Docs");
        assert!(find_entry(entries, 2).is_none());
    }

    #[test]
    fn test_missing_data_field() {
        let response: MonitorListResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.data.is_none());
    }

    #[test]
    fn test_created_at_formats() {
        let mut record = record_with_uptimes(&[]);
        record.create_date_time = Some("2024-03-01T10:00:00+02:00".to_string());
        assert_eq!(
            record.created_at().unwrap().to_rfc3339(),
            "2024-03-01T08:00:00+00:00"
        );

        record.create_date_time = Some("2024-03-01 10:00:00".to_string());
        assert_eq!(
            record.created_at().unwrap().to_rfc3339(),
            "2024-03-01T10:00:00+00:00"
        );

        record.create_date_time = Some("yesterday".to_string());
        assert!(record.created_at().is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(record_with_uptimes(&[100.0])).unwrap();
        assert_eq!(value["friendlyName"], "api");
        assert_eq!(value["lastDayUptimes"]["bucketSize"], 3600);
        assert!(value.get("createDateTime").is_some());
    }
}
