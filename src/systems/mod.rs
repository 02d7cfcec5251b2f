//! Background subsystems that run off the UI thread.

pub mod fetch;
