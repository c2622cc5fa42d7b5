//! Replay of recorded call history
//!
//! Reconstructs the ordered call history of a tracked method from the
//! backing store and renders it in a fixed textual form.

use crate::cache::middleware::{counter_key, inputs_key, outputs_key};
use crate::error::Result;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use std::fmt;
use tracing::debug;

/// Recorded call history of a tracked method, captured at read time
#[derive(Debug, Clone, PartialEq)]
pub struct Replay {
    /// Tracked method name
    pub method: String,
    /// Invocation counter value at the moment of the read
    pub count: u64,
    /// (input, output) pairs in original call order
    pub pairs: Vec<(String, String)>,
}

impl Replay {
    /// Read the full history of a tracked method from the backing store
    ///
    /// Inputs and outputs are paired positionally. If the two lists have
    /// unequal length (a call whose inner store failed after the input was
    /// appended), the shorter list wins and the excess entries are dropped
    /// from the replay.
    pub async fn read(mut conn: MultiplexedConnection, method: &str) -> Result<Self> {
        debug!("Reading call history for {}", method);

        let inputs: Vec<String> = conn.lrange(inputs_key(method), 0, -1).await?;
        let outputs: Vec<String> = conn.lrange(outputs_key(method), 0, -1).await?;
        let count: Option<u64> = conn.get(counter_key(method)).await?;

        let pairs = inputs.into_iter().zip(outputs).collect();

        Ok(Self {
            method: method.to_string(),
            count: count.unwrap_or(0),
            pairs,
        })
    }

    /// Number of (input, output) pairs in the replay
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the replay holds no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for Replay {
    /// One header line with the call count, then one line per pair in
    /// original call order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} was called {} times:", self.method, self.count)?;
        for (input, output) in &self.pairs {
            writeln!(f, "{}({}) -> {}", self.method, input, output)?;
        }
        Ok(())
    }
}
