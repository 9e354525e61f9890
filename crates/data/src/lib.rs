//! Data loading and locale resolution for the janken front ends.

pub mod i18n;
pub mod load;
pub mod schema;

pub use i18n::*;
pub use load::*;
pub use schema::*;
