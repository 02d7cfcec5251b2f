//! Background fetch machinery bridging the UI thread and the variant service.
//!
//! The UI never blocks on the network. It sends [`FetchCommand`]s to a worker
//! thread, tags each one with a monotonically increasing request id, and
//! applies a [`FetchEvent`] only when its id still matches the newest issued
//! request. Everything slower than a channel send lives behind the
//! [`VariantSource`] trait so tests can swap the HTTP client out.

mod client;
mod commands;
mod worker;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS, EndpointConfig, FetchError,
    HttpVariantSource, VariantSource,
};
pub(crate) use commands::{FetchCommand, FetchEvent};
pub(crate) use worker::spawn;
