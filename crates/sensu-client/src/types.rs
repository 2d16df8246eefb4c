//! Sensu API request and response types.

use serde::{Deserialize, Serialize};

/// A monitored client as returned by `GET /clients`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Client {
    pub name: String,
    pub address: Option<String>,
    pub subscriptions: Vec<String>,
    pub version: Option<String>,
    pub timestamp: Option<i64>,
}

/// One check's result history for a client (`GET /clients/:name/history`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HistoryEntry {
    pub check: String,
    pub history: Vec<i64>,
    pub last_execution: Option<i64>,
    pub last_status: Option<i64>,
}

/// An active event (`GET /events`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Event {
    pub id: Option<String>,
    pub client: EventClient,
    pub check: EventCheck,
    pub occurrences: u64,
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EventClient {
    pub name: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EventCheck {
    pub name: String,
    pub output: String,
    pub status: i64,
}

/// A stash record (`GET /stashes`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Stash {
    pub path: String,
    pub content: serde_json::Value,
    /// Seconds until expiry, `-1` when the stash never expires.
    pub expire: i64,
}

/// Body of `POST /resolve`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolveRequest {
    pub client: String,
    pub check: String,
}

/// Body of `POST /stashes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StashRequest {
    pub content: StashContent,
    pub expire: u64,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StashContent {
    pub username: String,
    pub reason: String,
    pub source: String,
    pub timestamp: i64,
}
