//! Signal REST API types.

use serde::{Deserialize, Serialize};

/// Envelope wrapper returned by `GET /v1/receive/:number`.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub envelope: Envelope,
    pub account: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub source: String,
    pub source_number: Option<String>,
    pub source_name: Option<String>,
    pub timestamp: i64,
    pub data_message: Option<DataMessage>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataMessage {
    pub message: Option<String>,
    pub timestamp: i64,
    pub group_info: Option<GroupInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInfo {
    pub group_id: String,
}

/// Body of `POST /v2/send`.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub message: String,
    pub number: String,
    pub recipients: Vec<String>,
}

/// A chat message the bot can act on.
#[derive(Debug, Clone)]
pub struct BotMessage {
    /// Sender's number (or other stable id).
    pub source: String,
    /// Sender's display name, when the chat surface knows it.
    pub sender_name: Option<String>,
    pub text: String,
    pub timestamp: i64,
    pub is_group: bool,
    pub group_id: Option<String>,
}

impl BotMessage {
    /// Build a direct message, e.g. for the shell adapter or tests.
    pub fn direct(
        source: impl Into<String>,
        sender_name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            sender_name: Some(sender_name.into()),
            text: text.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            is_group: false,
            group_id: None,
        }
    }

    /// Extract a bot message from an envelope. Envelopes without text
    /// (receipts, typing notifications) yield `None`.
    pub fn from_incoming(msg: &IncomingMessage) -> Option<Self> {
        let data = msg.envelope.data_message.as_ref()?;
        let text = data.message.clone()?;

        Some(Self {
            source: msg.envelope.source.clone(),
            sender_name: msg
                .envelope
                .source_name
                .clone()
                .filter(|name| !name.trim().is_empty()),
            text,
            timestamp: msg.envelope.timestamp,
            is_group: data.group_info.is_some(),
            group_id: data.group_info.as_ref().map(|g| g.group_id.clone()),
        })
    }

    /// Name used when attributing actions to the sender.
    pub fn user_name(&self) -> &str {
        self.sender_name.as_deref().unwrap_or(&self.source)
    }

    /// Group id for group messages, otherwise the sender.
    pub fn reply_target(&self) -> &str {
        self.group_id.as_deref().unwrap_or(&self.source)
    }
}
