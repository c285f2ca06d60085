//! Shared UI building blocks.

pub mod brand;
pub mod cards;
pub mod footer;
pub mod nav;
pub mod page_layout;
pub mod wallet_connect;
pub mod web3_background;
