//! Messages exchanged with the experiment server over the page's live channel.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProtocolError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outbound {
    /// Asks the server for the first order.
    Start,
    /// Submits the current assembly, most recent component first.
    Sandwich { components: Vec<String> },
}

impl Outbound {
    pub fn kind(&self) -> &'static str {
        match self {
            Outbound::Start => "start",
            Outbound::Sandwich { .. } => "sandwich",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inbound {
    Status { performed: u32 },
    Order { order: String },
    Error { mismatches: u32 },
}

const INBOUND_KINDS: [&str; 3] = ["status", "order", "error"];

impl Inbound {
    pub fn kind(&self) -> &'static str {
        match self {
            Inbound::Status { .. } => "status",
            Inbound::Order { .. } => "order",
            Inbound::Error { .. } => "error",
        }
    }

    pub fn from_value(value: Value) -> Result<Self, ProtocolError> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(ProtocolError::NotAnObject)?;
        if !INBOUND_KINDS.contains(&kind) {
            return Err(ProtocolError::Unrecognized {
                kind: kind.to_string(),
            });
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Splits a delivery into its messages. The server sends either a single message
/// or an ordered list; each entry decodes independently so one bad entry does not
/// drop the rest of the batch.
pub fn decode_batch(delivery: Value) -> Vec<Result<Inbound, ProtocolError>> {
    match delivery {
        Value::Array(items) => items.into_iter().map(Inbound::from_value).collect(),
        single => vec![Inbound::from_value(single)],
    }
}
