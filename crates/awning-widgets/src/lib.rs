//! Popup widgets for the **awning** library.
//!
//! Two user-facing widgets share one state machine: an action [`menu`]
//! (commit dispatches a command id) and a single-choice [`select`] (commit
//! updates a durable value). Both implement [`awning_core::Component`], so
//! they can be embedded inside any [`awning_core::Model`] and composed
//! freely within [`ratatui`] layouts.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`menu`] | Action menu: trigger + popup list of commands |
//! | [`select`] | Single-select: trigger shows the committed choice |
//!
//! # Building blocks
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entry`] | Entry model: items, separators, the navigable index space |
//! | [`nav`] | Wrapping keyboard focus traversal |
//! | [`outside`] | Pointer hit classification for outside-click dismissal |
//! | [`placement`] | Corner-anchored popup placement |
//! | [`popup`] | The shared popup engine both widgets wrap |
//! | [`textutil`] | Unicode-aware width and truncation helpers |

pub mod entry;
pub mod menu;
pub mod nav;
pub mod outside;
pub mod placement;
pub mod popup;
pub mod select;
pub mod textutil;
