//! Scroll-spy navigation: which section is the reader looking at.
//!
//! [`tracker`] holds the pure selection logic, [`spy`] adds debouncing and
//! [`dom`] wires both to the browser window.

pub mod dom;
pub mod spy;
pub mod tracker;
