//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, wall clock) from the
//! adapter and page logic so those stay testable on the host.

pub mod clock;
pub mod storage;
