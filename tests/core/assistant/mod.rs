//! Study tool tests
//!
//! Answers, summaries, keywords, quizzes and study plans over real
//! lecture text.

mod test_plan;
