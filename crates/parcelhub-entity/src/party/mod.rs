//! Sender and receiver entities.
//!
//! Both tables share one row shape, so a single [`Party`] model backs them.

pub mod model;

pub use model::{NewParty, Party, Receiver, Sender};
