//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome while reading/writing shared state
//! from Leptos context providers.

pub mod top_bar;
