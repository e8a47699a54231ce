//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is one page; section navigation uses in-page anchors, not routes.

pub mod home;
