//! Text rendering of list replies.
//!
//! Handlers sort records with the `sort_*` helpers, then pass them to the
//! matching render function. Templates live in `templates/` and only see
//! pre-formatted rows.

use askama::Template;
use chrono::DateTime;
use sensu_client::{Client, Event, HistoryEntry, Stash};

pub fn sort_clients(clients: &mut [Client]) {
    clients.sort_by(|a, b| a.name.cmp(&b.name));
}

pub fn sort_history(history: &mut [HistoryEntry]) {
    history.sort_by(|a, b| a.check.cmp(&b.check));
}

pub fn sort_events(events: &mut [Event]) {
    events.sort_by(|a, b| a.client.name.cmp(&b.client.name));
}

/// Stashes carry no name field; the path identifies them.
pub fn sort_stashes(stashes: &mut [Stash]) {
    stashes.sort_by(|a, b| a.path.cmp(&b.path));
}

struct ClientRow {
    name: String,
    address: String,
    subscriptions: String,
    version: String,
    last_seen: String,
}

#[derive(Template)]
#[template(path = "clients.txt")]
struct ClientsTemplate {
    clients: Vec<ClientRow>,
}

struct HistoryRow {
    check: String,
    status: String,
    last_execution: String,
    history: String,
}

#[derive(Template)]
#[template(path = "client_history.txt")]
struct HistoryTemplate {
    history: Vec<HistoryRow>,
}

struct EventRow {
    client: String,
    check: String,
    status: String,
    occurrences: u64,
    output: String,
}

#[derive(Template)]
#[template(path = "events.txt")]
struct EventsTemplate {
    events: Vec<EventRow>,
}

struct StashRow {
    path: String,
    expires: String,
    note: String,
}

#[derive(Template)]
#[template(path = "stashes.txt")]
struct StashesTemplate {
    stashes: Vec<StashRow>,
}

pub fn clients(clients: &[Client]) -> askama::Result<String> {
    let clients = clients
        .iter()
        .map(|c| ClientRow {
            name: c.name.clone(),
            address: c.address.clone().unwrap_or_else(|| "no address".into()),
            subscriptions: c.subscriptions.join(", "),
            version: c.version.clone().unwrap_or_else(|| "unknown".into()),
            last_seen: format_timestamp(c.timestamp),
        })
        .collect();

    finish(ClientsTemplate { clients }.render()?)
}

pub fn client_history(history: &[HistoryEntry]) -> askama::Result<String> {
    let history = history
        .iter()
        .map(|h| HistoryRow {
            check: h.check.clone(),
            status: h
                .last_status
                .map(status_name)
                .unwrap_or("UNKNOWN")
                .to_string(),
            last_execution: format_timestamp(h.last_execution),
            history: h
                .history
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(","),
        })
        .collect();

    finish(HistoryTemplate { history }.render()?)
}

pub fn events(events: &[Event]) -> askama::Result<String> {
    let events = events
        .iter()
        .map(|e| EventRow {
            client: e.client.name.clone(),
            check: e.check.name.clone(),
            status: status_name(e.check.status).to_string(),
            occurrences: e.occurrences,
            output: e.check.output.trim().to_string(),
        })
        .collect();

    finish(EventsTemplate { events }.render()?)
}

pub fn stashes(stashes: &[Stash]) -> askama::Result<String> {
    let stashes = stashes
        .iter()
        .map(|s| StashRow {
            path: s.path.clone(),
            expires: if s.expire < 0 {
                "never".into()
            } else {
                format!("in {}s", s.expire)
            },
            note: stash_note(&s.content),
        })
        .collect();

    finish(StashesTemplate { stashes }.render()?)
}

fn finish(rendered: String) -> askama::Result<String> {
    Ok(rendered.trim_end().to_string())
}

/// Sensu check status code as a word.
fn status_name(status: i64) -> &'static str {
    match status {
        0 => "OK",
        1 => "WARNING",
        2 => "CRITICAL",
        _ => "UNKNOWN",
    }
}

fn format_timestamp(timestamp: Option<i64>) -> String {
    timestamp
        .and_then(|ts| DateTime::from_timestamp(ts, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".into())
}

/// "reason (username)" from a silence stash's content, when present.
fn stash_note(content: &serde_json::Value) -> String {
    let field = |key: &str| content.get(key).and_then(|v| v.as_str());

    match (field("reason"), field("username")) {
        (Some(reason), Some(user)) => format!("{} ({})", reason, user),
        (Some(reason), None) => reason.to_string(),
        (None, Some(user)) => format!("by {}", user),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensu_client::{EventCheck, EventClient};

    fn client(name: &str) -> Client {
        Client {
            name: name.into(),
            address: Some("10.0.0.1".into()),
            subscriptions: vec!["base".into(), "web".into()],
            version: Some("1.9.0".into()),
            timestamp: Some(0),
        }
    }

    fn event(client: &str, check: &str, status: i64) -> Event {
        Event {
            client: EventClient {
                name: client.into(),
                address: None,
            },
            check: EventCheck {
                name: check.into(),
                output: "output\n".into(),
                status,
            },
            occurrences: 3,
            ..Default::default()
        }
    }

    #[test]
    fn test_sort_clients_by_name() {
        let mut clients = vec![client("web02"), client("db01"), client("web01")];
        sort_clients(&mut clients);
        let names: Vec<_> = clients.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["db01", "web01", "web02"]);
    }

    #[test]
    fn test_sort_events_by_client_name() {
        let mut events = vec![event("web01", "a", 2), event("db01", "z", 1)];
        sort_events(&mut events);
        assert_eq!(events[0].client.name, "db01");
        assert_eq!(events[1].client.name, "web01");
    }

    #[test]
    fn test_sort_history_and_stashes() {
        let mut history = vec![
            HistoryEntry {
                check: "nginx".into(),
                ..Default::default()
            },
            HistoryEntry {
                check: "disk".into(),
                ..Default::default()
            },
        ];
        sort_history(&mut history);
        assert_eq!(history[0].check, "disk");

        let mut stashes = vec![
            Stash {
                path: "silence/web02".into(),
                ..Default::default()
            },
            Stash {
                path: "silence/web01".into(),
                ..Default::default()
            },
        ];
        sort_stashes(&mut stashes);
        assert_eq!(stashes[0].path, "silence/web01");
    }

    #[test]
    fn test_render_clients() {
        let rendered = clients(&[client("db01"), client("web01")]).unwrap();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "db01 (10.0.0.1) [base, web] version 1.9.0, last check-in 1970-01-01 00:00:00 UTC"
        );
        assert!(lines[1].starts_with("web01 "));
    }

    #[test]
    fn test_render_events() {
        let rendered = events(&[event("web01", "nginx", 2)]).unwrap();
        assert_eq!(rendered, "web01/nginx CRITICAL x3: output");
    }

    #[test]
    fn test_render_history() {
        let entry = HistoryEntry {
            check: "disk".into(),
            history: vec![0, 0, 1],
            last_execution: None,
            last_status: Some(1),
        };
        let rendered = client_history(&[entry]).unwrap();
        assert_eq!(rendered, "disk: WARNING (last run never) history 0,0,1");
    }

    #[test]
    fn test_render_stashes() {
        let stash = Stash {
            path: "silence/web01/nginx".into(),
            content: serde_json::json!({"reason": "testing", "username": "alice"}),
            expire: 600,
        };
        let forever = Stash {
            path: "other".into(),
            content: serde_json::json!({}),
            expire: -1,
        };
        let rendered = stashes(&[stash, forever]).unwrap();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines[0], "silence/web01/nginx expires in 600s - testing (alice)");
        assert_eq!(lines[1], "other expires never");
    }

    #[test]
    fn test_render_empty_lists() {
        assert_eq!(clients(&[]).unwrap(), "No clients found");
        assert_eq!(events(&[]).unwrap(), "No events found");
        assert_eq!(client_history(&[]).unwrap(), "No history found");
        assert_eq!(stashes(&[]).unwrap(), "No stashes found");
    }
}
