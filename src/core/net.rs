// src/core/net.rs
//
// Team number → display name.
// Lookups never fail from the caller's point of view: any problem
// turns into a placeholder name so one bad team can't sink a refresh.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;

use crate::config::consts::{NO_TEAM_FOUND, UNKNOWN_NAME, USER_AGENT};
use crate::config::options::NameSource;

pub trait NameResolver {
    fn resolve(&self, team: u32) -> String;
}

/// Any `Fn(u32) -> String` works as a resolver (tests, fixed tables).
impl<F> NameResolver for F
where
    F: Fn(u32) -> String,
{
    fn resolve(&self, team: u32) -> String {
        self(team)
    }
}

/// No network: every team is "Unknown".
pub struct Offline;

impl NameResolver for Offline {
    fn resolve(&self, _team: u32) -> String {
        s!(UNKNOWN_NAME)
    }
}

#[derive(Serialize)]
struct GraphQlRequest {
    query: String,
}

/// FTCScout GraphQL API.
pub struct FtcScout {
    client: Client,
    endpoint: String,
}

impl FtcScout {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, endpoint: endpoint.into() })
    }

    fn lookup(&self, team: u32) -> reqwest::Result<String> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&GraphQlRequest { query: team_query(team) })
            .send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        Ok(name_from_response(status, &body))
    }
}

impl NameResolver for FtcScout {
    fn resolve(&self, team: u32) -> String {
        match self.lookup(team) {
            Ok(name) => name,
            Err(e) => {
                logd!("Names: lookup for team {} failed: {}", team, e);
                s!(UNKNOWN_NAME)
            }
        }
    }
}

pub fn team_query(team: u32) -> String {
    format!("{{ teamByNumber(number: {team}) {{ name }} }}")
}

/// Pull `data.teamByNumber.name` out of a response.
///
/// - non-200, bad JSON, or a `null` along the path → "Unknown"
/// - a key missing along the path → "No team found"
pub fn name_from_response(status: u16, body: &str) -> String {
    if status != 200 {
        return s!(UNKNOWN_NAME);
    }
    let Ok(Value::Object(root)) = serde_json::from_str::<Value>(body) else {
        return s!(UNKNOWN_NAME);
    };
    let data = match root.get("data") {
        None => return s!(NO_TEAM_FOUND),
        Some(Value::Object(d)) => d,
        Some(_) => return s!(UNKNOWN_NAME),
    };
    let team = match data.get("teamByNumber") {
        None => return s!(NO_TEAM_FOUND),
        Some(Value::Object(t)) => t,
        Some(_) => return s!(UNKNOWN_NAME),
    };
    match team.get("name") {
        None => s!(NO_TEAM_FOUND),
        Some(Value::String(name)) => name.clone(),
        Some(_) => s!(UNKNOWN_NAME),
    }
}

/// Build the resolver an `AppOptions` asks for.
/// A client that can't be built (TLS backend trouble) degrades to `Offline`.
pub fn resolver_for(source: &NameSource) -> Box<dyn NameResolver> {
    match source {
        NameSource::Remote { endpoint, timeout } => match FtcScout::new(endpoint.as_str(), *timeout) {
            Ok(client) => Box::new(client),
            Err(e) => {
                loge!("Names: HTTP client unavailable ({}); names disabled", e);
                Box::new(Offline)
            }
        },
        NameSource::Offline => Box::new(Offline),
    }
}
