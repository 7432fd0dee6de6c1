//! Study tools built on top of retrieval.
//!
//! Every tool is a deterministic function of a [`Store`](crate::core::storage::Store)
//! and its inputs, producing markdown-flavored text. None of them fail
//! once a store exists.
//!
//! - **answer**: top passages for a question
//! - **summary**: leading sentences as bullets
//! - **keywords**: frequency-ranked terms
//! - **quiz**: open questions around keywords
//! - **plan**: day-by-day schedule over chunks

pub mod answer;
pub mod keywords;
pub mod plan;
pub mod quiz;
pub mod summary;
pub mod text;

pub use answer::answer_question;
pub use keywords::extract_keywords;
pub use plan::{generate_study_plan, Level, PlanRequest, PlanSettings};
pub use quiz::{generate_quiz, Difficulty};
pub use summary::{summarize, SummaryDetail};
pub use text::{first_sentences, lead_sentence, split_sentences};
