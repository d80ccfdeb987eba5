//! Control-plane client for the external realtime agent runtime.
//!
//! The worker dials the runtime, registers itself under an agent name, and
//! exchanges JSON control events: job assignments in, session commands out.
//! Media stays inside the runtime; nothing here touches audio.

mod client;

pub use cafevoice_types as types;
pub use client::{Client, ClientTx, Config, ConfigBuilder, ServerRx, Stats, connect, connect_with_config};
