//! Composable instrumentation layers around the storage interface
//!
//! Call counting and call-history recording are explicit wrapper objects
//! over the [`Store`] trait. Layers nest and forward, so adding or removing
//! an instrumentation behavior never touches the storage code itself.
//!
//! Usage metadata lives in the backing store itself, under keys derived
//! from the tracked method name:
//! - `<method>` — the invocation counter (INCR per call)
//! - `<method>:inputs` — list of rendered call arguments (RPUSH per call)
//! - `<method>:outputs` — list of stringified results (RPUSH after the
//!   inner store completes)

use crate::cache::payload::Payload;
use crate::error::Result;
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use tracing::debug;

/// Storage interface wrapped by the instrumentation layers
#[async_trait]
pub trait Store: Send {
    /// Store a payload and return the key it was written under
    async fn store(&mut self, payload: &Payload) -> Result<String>;
}

/// Counter key for a tracked method
pub fn counter_key(method: &str) -> String {
    method.to_string()
}

/// Inputs history key for a tracked method
pub fn inputs_key(method: &str) -> String {
    format!("{}:inputs", method)
}

/// Outputs history key for a tracked method
pub fn outputs_key(method: &str) -> String {
    format!("{}:outputs", method)
}

/// Layer that increments a per-method invocation counter before forwarding
pub struct CallCount<S> {
    inner: S,
    conn: MultiplexedConnection,
    counter_key: String,
}

impl<S: Store> CallCount<S> {
    /// Wrap `inner`, counting calls under the given tracked method name
    pub fn new(inner: S, conn: MultiplexedConnection, method: &str) -> Self {
        Self {
            inner,
            conn,
            counter_key: counter_key(method),
        }
    }
}

#[async_trait]
impl<S: Store> Store for CallCount<S> {
    async fn store(&mut self, payload: &Payload) -> Result<String> {
        let count: i64 = self.conn.incr(&self.counter_key, 1).await?;
        debug!("Call {} of {}", count, self.counter_key);

        self.inner.store(payload).await
    }
}

/// Layer that records call inputs and outputs as parallel history lists
///
/// The input is appended before the inner store runs, the output after it
/// completes. A failed inner store therefore leaves the inputs list one
/// element longer than the outputs list; replay pairs positionally and
/// truncates to the shorter list.
pub struct CallHistory<S> {
    inner: S,
    conn: MultiplexedConnection,
    inputs_key: String,
    outputs_key: String,
}

impl<S: Store> CallHistory<S> {
    /// Wrap `inner`, recording history under the given tracked method name
    pub fn new(inner: S, conn: MultiplexedConnection, method: &str) -> Self {
        Self {
            inner,
            conn,
            inputs_key: inputs_key(method),
            outputs_key: outputs_key(method),
        }
    }
}

#[async_trait]
impl<S: Store> Store for CallHistory<S> {
    async fn store(&mut self, payload: &Payload) -> Result<String> {
        let _: i64 = self.conn.rpush(&self.inputs_key, payload.to_string()).await?;

        let output = self.inner.store(payload).await?;

        let _: i64 = self.conn.rpush(&self.outputs_key, &output).await?;
        debug!("Recorded call history entry under {}", self.inputs_key);

        Ok(output)
    }
}
