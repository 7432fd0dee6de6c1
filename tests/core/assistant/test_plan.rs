// Study plan scheduling over lecture chunks

use crate::common::{build_store, numbered_words};
use chrono::{Duration, Local, NaiveDate};
use studymate::core::assistant::{generate_study_plan, Level, PlanRequest, PlanSettings};
use studymate::core::config::RemainderPolicy;
use studymate::core::storage::Store;

fn request(exam_date: &str) -> PlanRequest {
    PlanRequest {
        exam_date: exam_date.to_string(),
        hours_per_day: 3,
        level: Level::Beginner,
        weak_topics: String::new(),
    }
}

/// One chunk per sentence: "Topic0 basics. Topic1 basics. ..."
fn sentence_store(chunks: usize) -> Store {
    let text: Vec<String> = (0..chunks).map(|i| format!("Topic{i} basics.")).collect();
    build_store(&text.join(" "), 2, 0)
}

fn days(plan: &str) -> Vec<Vec<String>> {
    let mut days: Vec<Vec<String>> = Vec::new();
    for line in plan.lines() {
        if line.starts_with("**Day ") {
            days.push(Vec::new());
        } else if let Some(day) = days.last_mut() {
            if line.starts_with("- ") {
                day.push(line.to_string());
            }
        }
    }
    days
}

#[test]
fn test_exam_in_three_days_gives_three_days() {
    let store = sentence_store(9);
    let today = Local::now().date_naive();
    let exam = (today + Duration::days(3)).format("%Y-%m-%d").to_string();

    let plan = generate_study_plan(&store, &request(&exam), today, PlanSettings::default());

    let days = days(&plan);
    assert_eq!(days.len(), 3);
    assert_eq!(days[0], vec!["- Topic0 basics.", "- Topic1 basics.", "- Topic2 basics."]);
    assert_eq!(days[2][2], "- Topic8 basics.");
    assert!(plan.contains("(3 day(s) left)"));
    assert!(plan.contains("about **3h/day**, level: **beginner**"));
}

#[test]
fn test_past_exam_plans_single_day() {
    let store = sentence_store(4);
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

    let plan = generate_study_plan(&store, &request("2025-05-01"), today, PlanSettings::default());

    let days = days(&plan);
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].len(), 4);
}

#[test]
fn test_more_days_than_chunks_uses_placeholder() {
    let store = sentence_store(2);
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

    let plan = generate_study_plan(&store, &request("2025-06-05"), today, PlanSettings::default());

    let days = days(&plan);
    assert_eq!(days.len(), 4);
    assert_eq!(days[2], vec!["- Review previous material or do practice problems."]);
    assert_eq!(days[3], vec!["- Review previous material or do practice problems."]);
}

#[test]
fn test_remainder_policies() {
    let store = sentence_store(7);
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let exam = request("2025-06-04");

    let dropped = generate_study_plan(&store, &exam, today, PlanSettings::default());
    let dropped = days(&dropped);
    assert_eq!(dropped.iter().map(Vec::len).collect::<Vec<_>>(), vec![2, 2, 2]);

    let settings = PlanSettings {
        remainder: RemainderPolicy::LastDay,
        ..PlanSettings::default()
    };
    let kept = days(&generate_study_plan(&store, &exam, today, settings));
    assert_eq!(kept.iter().map(Vec::len).collect::<Vec<_>>(), vec![2, 2, 3]);
    assert_eq!(kept[2][2], "- Topic6 basics.");
}

#[test]
fn test_unparseable_date_falls_back() {
    let store = sentence_store(3);
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let settings = PlanSettings {
        fallback_days: 5,
        ..PlanSettings::default()
    };

    let plan = generate_study_plan(&store, &request("next friday"), today, settings);
    assert!(plan.contains("until **2025-06-06** (5 day(s) left)"));
    assert_eq!(days(&plan).len(), 5);
}

#[test]
fn test_weak_topics_and_closing_lines() {
    let store = build_store(&numbered_words(30), 10, 0);
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let mut req = request("2025-06-03");
    req.weak_topics = "paging, TLB".to_string();

    let plan = generate_study_plan(&store, &req, today, PlanSettings::default());

    assert!(plan.contains("⚠️ Focus extra on your weak topics: paging, TLB"));
    assert!(plan.contains("✅ Last day before exam"));
    assert!(plan.ends_with("💡 Tip: study in 25-30 min focused blocks with short breaks."));
}
