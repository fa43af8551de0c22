use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{query::date_range::deserialize_timestamp, store::entities::Stored};

/// Service a recording was made with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    Jitsi,
    Zoom,
    #[serde(rename = "MS Teams")]
    MsTeams,
    Offline,
    Autorecord,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Jitsi => "Jitsi",
            RecordKind::Zoom => "Zoom",
            RecordKind::MsTeams => "MS Teams",
            RecordKind::Offline => "Offline",
            RecordKind::Autorecord => "Autorecord",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Jitsi" => Some(RecordKind::Jitsi),
            "Zoom" => Some(RecordKind::Zoom),
            "MS Teams" => Some(RecordKind::MsTeams),
            "Offline" => Some(RecordKind::Offline),
            "Autorecord" => Some(RecordKind::Autorecord),
            _ => None,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordFields {
    pub room_name: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub end_time: DateTime<Utc>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RecordKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Emotion graph rendered for the recording.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotions_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_ip: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RecordFields {
    pub fn is_autorecord(&self) -> bool {
        self.kind == Some(RecordKind::Autorecord)
    }

    /// The url, unless it is absent or blank.
    pub fn published_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

pub type Record = Stored<RecordFields>;
