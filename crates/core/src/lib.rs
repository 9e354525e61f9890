//! Core game logic. Keep this crate free of IO and platform concerns.

pub mod config;
pub mod events;
pub mod game;
pub mod hand;
pub mod rng;
pub mod session;

pub use config::*;
pub use events::*;
pub use game::*;
pub use hand::*;
pub use rng::*;
pub use session::*;
