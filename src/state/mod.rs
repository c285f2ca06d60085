//! Client-side state.
//!
//! Plain structs holding the view selector, the wallet connection and the
//! in-memory fixture lists. Components wrap them in `RwSignal`s; nothing
//! here touches the DOM, so the logic is tested natively.

pub mod admin;
pub mod app;
pub mod dashboard;
pub mod quests;
pub mod wallet;
