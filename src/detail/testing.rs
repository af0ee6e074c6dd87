//! In-memory `JsonSource` for pipeline tests

use crate::detail::JsonSource;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

pub(crate) const BASE: &str = "http://pokeapi.test";

enum Canned {
    Body(Value),
    Delayed(Duration, Value),
    Status(u16),
    Pending,
}

/// Answers from a URL table and records every URL requested
#[derive(Default)]
pub(crate) struct StubSource {
    responses: HashMap<String, Canned>,
    requests: Mutex<Vec<String>>,
}

impl StubSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Respond to `BASE + path` with a JSON body
    pub(crate) fn with_body(mut self, path: &str, body: Value) -> Self {
        self.responses.insert(format!("{}{}", BASE, path), Canned::Body(body));
        self
    }

    /// Respond to `BASE + path` with a bare status code
    pub(crate) fn with_status(mut self, path: &str, status: u16) -> Self {
        self.responses.insert(format!("{}{}", BASE, path), Canned::Status(status));
        self
    }

    /// Respond to `BASE + path` with a JSON body after `delay`
    pub(crate) fn with_delayed_body(mut self, path: &str, delay: Duration, body: Value) -> Self {
        self.responses.insert(format!("{}{}", BASE, path), Canned::Delayed(delay, body));
        self
    }

    /// Never respond to `BASE + path`
    pub(crate) fn with_pending(mut self, path: &str) -> Self {
        self.responses.insert(format!("{}{}", BASE, path), Canned::Pending);
        self
    }

    /// Full PokeAPI answers for one name: record, sprite and description
    pub(crate) fn with_pokemon(self, key: &str, id: u32, description: &str) -> Self {
        let sprite = format!("/api/v1/sprite/{}/", id);
        let desc = format!("/api/v1/description/{}/", id);

        self.with_body(
            &format!("/api/v1/pokemon/{}", key),
            json!({
                "hp": 45, "attack": 49, "defense": 49,
                "sp_atk": 65, "sp_def": 65, "speed": 45,
                "sprites": [{"resource_uri": sprite}],
                "descriptions": [
                    {"name": format!("{}_gen_1", key), "resource_uri": "/api/v1/description/999/"},
                    {"name": format!("{}_gen_6", key), "resource_uri": desc}
                ]
            }),
        )
        .with_body(&sprite, json!({"image": format!("/media/img/{}.png", id)}))
        .with_body(&desc, json!({"description": description}))
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl JsonSource for StubSource {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &str) -> Result<T> {
        self.requests.lock().unwrap().push(url.to_string());

        match self.responses.get(url) {
            Some(Canned::Body(body)) => decode(url, body),
            Some(Canned::Delayed(delay, body)) => {
                tokio::time::sleep(*delay).await;
                decode(url, body)
            }
            Some(Canned::Pending) => std::future::pending().await,
            Some(Canned::Status(status)) => Err(Error::DetailFetch(format!(
                "{} returned status: {}",
                url, status
            ))),
            None => Err(Error::DetailFetch(format!("{} returned status: 404", url))),
        }
    }
}

fn decode<T: DeserializeOwned>(url: &str, body: &Value) -> Result<T> {
    serde_json::from_value(body.clone())
        .map_err(|e| Error::DetailFetch(format!("Failed to parse response from {}: {}", url, e)))
}
