//! Prelude module for calendar_picker crate.
//!
//! Re-exports the derive_more derives shared by the date and range types.

#[allow(unused_imports)]
pub use derive_more::{Deref, Display, Into};
