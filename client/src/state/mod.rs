//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The page has no domain state beyond the UI chrome; static content lives in
//! `content` and never changes.

pub mod ui;
