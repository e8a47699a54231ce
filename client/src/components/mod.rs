//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Section components take their slice of the rendered `PageView` as props;
//! only `navbar` reads shared state from Leptos context.

pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod link;
pub mod navbar;
pub mod projects;
pub mod section_title;
pub mod skills;
