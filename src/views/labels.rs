use chrono::{DateTime, Utc};

/// Human label for an upstream monitor status code.
pub fn monitor_status_label(status_code: Option<&str>) -> &'static str {
    let Some(code) = status_code else {
        return "unknown";
    };

    match code.to_ascii_uppercase().as_str() {
        "ACTIVE" => "online",
        "PAUSED" => "paused",
        "INACTIVE" => "offline",
        _ => "unknown",
    }
}

/// Badge classes for a service status or a monitor label.
pub fn status_color(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "online" | "active" => "bg-green-100 text-green-800 border-green-300",
        "down" | "offline" | "inactive" => "bg-red-100 text-red-800 border-red-300",
        "paused" => "bg-yellow-100 text-yellow-800 border-yellow-300",
        "error" => "bg-gray-100 text-gray-800 border-gray-300",
        _ => "bg-blue-100 text-blue-800 border-blue-300",
    }
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}
