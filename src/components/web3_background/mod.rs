mod component;
mod render;
mod state;
mod types;

pub use component::{FloatingElements, Web3Background};
