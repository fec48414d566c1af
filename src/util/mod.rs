//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! layout logic to improve reuse and testability.

pub mod guard;
pub mod storage;
pub mod title;
