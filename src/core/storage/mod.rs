//! In-memory document storage.
//!
//! - **Store**: raw text, ordered chunks and term index for one
//!   document
//! - **Session**: holds the current store and swaps it atomically on
//!   re-ingestion
//!
//! Nothing is persisted; a store lives as long as the session that
//! holds it.

mod session;
mod store;

pub use session::Session;
pub use store::{Store, StoreInfo};
