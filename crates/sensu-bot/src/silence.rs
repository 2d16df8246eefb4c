//! Silence duration parsing and stash paths.

use thiserror::Error;

/// Expiry used when no duration is given.
pub const DEFAULT_EXPIRE_SECONDS: u64 = 3600;
const DEFAULT_HUMAN: &str = "1h";

/// Prefix of every silence stash path.
pub const STASH_PREFIX: &str = "silence";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SilenceError {
    #[error("Unknown unit ({0}).  I know s (seconds), m (minutes), h (hours), and d(days)")]
    UnknownUnit(String),

    #[error("Invalid duration ({0}). Give a whole number followed by s, m, h or d.")]
    InvalidDuration(String),
}

/// How long a silence lasts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SilenceDuration {
    pub expire_seconds: u64,
    /// As the user typed it, e.g. `10m`.
    pub human: String,
}

impl SilenceDuration {
    /// Parse the captured amount and unit letter.
    ///
    /// Without a unit the default of one hour applies. A unit without an
    /// amount counts as zero.
    pub fn parse(amount: Option<&str>, unit: Option<&str>) -> Result<Self, SilenceError> {
        let Some(unit) = unit.filter(|u| !u.is_empty()) else {
            return Ok(Self::default());
        };

        let amount = amount.unwrap_or("0");
        let multiplier: u64 = match unit {
            "s" => 1,
            "m" => 60,
            "h" => 60 * 60,
            "d" => 60 * 60 * 24,
            other => return Err(SilenceError::UnknownUnit(other.to_string())),
        };

        let human = format!("{}{}", amount, unit);
        let expire_seconds = amount
            .parse::<u64>()
            .ok()
            .and_then(|n| n.checked_mul(multiplier))
            .ok_or_else(|| SilenceError::InvalidDuration(human.clone()))?;

        Ok(Self {
            expire_seconds,
            human,
        })
    }
}

impl Default for SilenceDuration {
    fn default() -> Self {
        Self {
            expire_seconds: DEFAULT_EXPIRE_SECONDS,
            human: DEFAULT_HUMAN.into(),
        }
    }
}

/// `client/check`, or just `client` when no check is named.
pub fn silence_path(client: &str, check: Option<&str>) -> String {
    match check {
        Some(check) if !check.is_empty() => format!("{}/{}", client, check),
        _ => client.to_string(),
    }
}

/// Full stash path for a silence target.
pub fn stash_path(path: &str) -> String {
    format!("{}/{}", STASH_PREFIX, path)
}
