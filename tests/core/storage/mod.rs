//! Storage layer tests
//!
//! Session replacement semantics and document loading through services.

mod test_loading;
