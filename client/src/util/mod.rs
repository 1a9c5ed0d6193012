//! Browser helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so the measurable parts stay testable natively.

pub mod scroll;
