//! Views shown by the root page.

pub mod about;
pub mod admin;
pub mod community;
pub mod dashboard;
pub mod documentation;
pub mod hero;
pub mod home;
pub mod not_found;
pub mod product;
pub mod quest_panel;
