//! Search layer tests
//!
//! TF-IDF ranking through stores and the search service.

mod test_ranking;
mod test_service;
