//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `chat`) so individual components
//! can depend on small focused models. Each is provided in context by
//! `App` as an `RwSignal`.

pub mod chat;
pub mod session;
