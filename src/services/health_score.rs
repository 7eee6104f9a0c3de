//! Weekly health score over the trailing 7-day window of day entries.
//!
//! Each category (sleep, water, activity, mood) is scored per entry on a
//! 0-100 scale, averaged over the entries where the gating field was
//! recorded, then combined into a weighted overall score. A handful of
//! qualitative trend annotations are derived from the same window.

use serde::Serialize;

use crate::models::day_entry::{DayEntry, SleepQuality, WaterIntake};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScoreResult {
    pub overall_score: i32,
    pub categories: Vec<CategoryScore>,
    pub trends: Vec<Trend>,
    pub entries_count: usize,
    pub days_tracked: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryScore {
    pub name: &'static str,
    pub score: i32,
    pub weight: u32,
    pub description: &'static str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Trend {
    pub emoji: &'static str,
    pub text: &'static str,
    #[serde(rename = "type")]
    pub polarity: TrendPolarity,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendPolarity {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Sleep,
    Water,
    Activity,
    Mood,
}

impl Category {
    fn name(self) -> &'static str {
        match self {
            Category::Sleep => "Sleep",
            Category::Water => "Water",
            Category::Activity => "Activity",
            Category::Mood => "Mood",
        }
    }

    fn weight(self) -> u32 {
        match self {
            Category::Sleep => 40,
            Category::Water | Category::Activity | Category::Mood => 20,
        }
    }

    fn description(self, score: i32, entries_counted: usize) -> &'static str {
        if entries_counted == 0 {
            return "No data recorded";
        }
        match self {
            Category::Sleep => match score {
                s if s >= 80 => "Excellent sleep patterns",
                s if s >= 60 => "Good sleep habits",
                s if s >= 40 => "Average sleep quality",
                _ => "Needs improvement",
            },
            Category::Water => match score {
                s if s >= 80 => "Perfect hydration",
                s if s >= 60 => "Adequate hydration",
                s if s >= 40 => "Moderate hydration",
                _ => "Hydration needs attention",
            },
            Category::Activity => match score {
                s if s >= 80 => "Great activity levels",
                s if s >= 60 => "Good activity levels",
                s if s >= 40 => "Moderate activity",
                _ => "Activity needs increase",
            },
            Category::Mood => match score {
                s if s >= 80 => "Excellent mood balance",
                s if s >= 60 => "Good mood stability",
                s if s >= 40 => "Average mood levels",
                _ => "Mood needs attention",
            },
        }
    }
}

/// Running sum of per-entry scores for one category.
#[derive(Debug, Default)]
struct Tally {
    sum: i64,
    count: usize,
}

impl Tally {
    fn add(&mut self, score: i32) {
        self.sum += i64::from(score);
        self.count += 1;
    }

    fn average(&self) -> i32 {
        if self.count == 0 {
            0
        } else {
            (self.sum as f64 / self.count as f64).round() as i32
        }
    }
}

fn clamp_score(raw: i32) -> i32 {
    raw.clamp(0, 100)
}

/// 0-60 points from hours slept, 0-40 from reported quality, minus up to 30
/// for reported sleep issues.
fn sleep_entry_score(hours: f64, quality: Option<SleepQuality>, issue_count: usize) -> i32 {
    let hours_points = if (7.0..=9.0).contains(&hours) {
        60 // ideal range
    } else if (6.0..7.0).contains(&hours) {
        40
    } else if hours > 9.0 && hours <= 10.0 {
        40
    } else if (5.0..6.0).contains(&hours) {
        20
    } else if hours > 10.0 && hours <= 11.0 {
        20
    } else {
        0
    };

    let quality_points = match quality {
        Some(SleepQuality::SleptWell) => 40,
        Some(SleepQuality::PoorSleep) => 10,
        None => 0,
    };

    let penalty = (issue_count as i32 * 10).min(30);
    clamp_score(hours_points + quality_points - penalty)
}

fn water_entry_score(intake: WaterIntake, symptom_count: usize) -> i32 {
    let base = match intake {
        WaterIntake::Enough => 100,
        WaterIntake::TooLittle => 30,
    };
    let penalty = (symptom_count as i32 * 15).min(40);
    clamp_score(base - penalty)
}

fn activity_entry_score(level: i32, issue_count: usize) -> i32 {
    let base = match level {
        5..=7 => 100,
        8..=9 => 80,
        3..=4 => 70,
        10 => 60,
        1..=2 => 30,
        _ => 0,
    };
    let penalty = (issue_count as i32 * 8).min(40);
    clamp_score(base - penalty)
}

fn mood_entry_score(mood: i32, issue_count: usize) -> i32 {
    let mut score = 100;
    if mood <= 3 {
        score -= 40;
    } else if mood <= 5 {
        score -= 20;
    } else if mood <= 7 {
        score -= 10;
    }
    score -= (issue_count as i32 * 12).min(60);
    clamp_score(score)
}

/// Compute the weekly health score from the trailing 7-day window.
///
/// `entries` must be ordered most-recent-first (the order the persistence
/// layer returns them in). An empty window yields a zero score with no
/// categories or trends.
pub fn compute_score(entries: &[DayEntry]) -> HealthScoreResult {
    if entries.is_empty() {
        return HealthScoreResult {
            overall_score: 0,
            categories: Vec::new(),
            trends: Vec::new(),
            entries_count: 0,
            days_tracked: 0,
        };
    }

    let mut sleep = Tally::default();
    let mut water = Tally::default();
    let mut activity = Tally::default();
    let mut mood = Tally::default();
    let mut good_days = 0usize;
    let mut bad_days = 0usize;

    for entry in entries {
        if let Some(hours) = entry.sleep_hours {
            sleep.add(sleep_entry_score(
                hours,
                entry.sleep_quality,
                entry.sleep_issues.len(),
            ));
        }
        if let Some(intake) = entry.water_intake {
            water.add(water_entry_score(intake, entry.dehydration_symptoms.len()));
        }
        if let Some(level) = entry.activity_level {
            activity.add(activity_entry_score(level, entry.activity_issues.len()));
        }
        if let Some(value) = entry.mood {
            let score = mood_entry_score(value, entry.mood_related.len());
            mood.add(score);
            if score >= 60 {
                good_days += 1;
            } else if score < 40 {
                bad_days += 1;
            }
        }
    }

    let sleep_avg = sleep.average();
    let water_avg = water.average();
    let activity_avg = activity.average();
    let mood_avg = mood.average();

    let overall_score = (f64::from(sleep_avg) * 0.4
        + f64::from(water_avg) * 0.2
        + f64::from(activity_avg) * 0.2
        + f64::from(mood_avg) * 0.2)
        .round() as i32;

    let categories = vec![
        category_score(Category::Sleep, sleep_avg, sleep.count),
        category_score(Category::Water, water_avg, water.count),
        category_score(Category::Activity, activity_avg, activity.count),
        category_score(Category::Mood, mood_avg, mood.count),
    ];

    let trends = detect_trends(entries, sleep_avg, mood_avg, good_days, bad_days);

    HealthScoreResult {
        overall_score,
        categories,
        trends,
        entries_count: entries.len(),
        days_tracked: entries.len().min(7),
    }
}

fn category_score(category: Category, score: i32, entries_counted: usize) -> CategoryScore {
    CategoryScore {
        name: category.name(),
        score,
        weight: category.weight(),
        description: category.description(score, entries_counted),
    }
}

fn detect_trends(
    entries: &[DayEntry],
    sleep_avg: i32,
    mood_avg: i32,
    good_days: usize,
    bad_days: usize,
) -> Vec<Trend> {
    let mut trends = Vec::new();
    if entries.len() < 3 {
        return trends;
    }

    if good_days > bad_days && good_days >= 3 {
        trends.push(Trend {
            emoji: "📈",
            text: "Mostly good days this week!",
            polarity: TrendPolarity::Positive,
        });
    } else if bad_days > good_days && bad_days >= 3 {
        trends.push(Trend {
            emoji: "📉",
            text: "Consider taking more rest days",
            polarity: TrendPolarity::Negative,
        });
    }

    if entries.len() >= 5 {
        let consistent = entries[..5].iter().all(|e| {
            e.sleep_hours.is_some() && e.water_intake.is_some() && e.mood.is_some()
        });
        if consistent {
            trends.push(Trend {
                emoji: "⭐",
                text: "Great consistency in tracking!",
                polarity: TrendPolarity::Positive,
            });
        }
    }

    // Improvement: compare the combined sleep/mood average against the
    // oldest ~30% of the window.
    let recent_avg = f64::from(sleep_avg + mood_avg) / 2.0;
    let older_start = entries.len() * 7 / 10;
    let mut older_sum = 0.0;
    let mut older_count = 0usize;
    for entry in &entries[older_start..] {
        if let Some(value) = entry.mood {
            older_sum += f64::from(value) * 0.5;
            older_count += 1;
        }
        if let Some(hours) = entry.sleep_hours {
            let sleep_points = if hours >= 7.0 { 50.0 } else { 25.0 };
            older_sum += sleep_points * 0.5;
            older_count += 1;
        }
    }
    if older_count > 0 {
        let older_avg = older_sum / older_count as f64;
        if recent_avg > older_avg + 10.0 {
            trends.push(Trend {
                emoji: "🚀",
                text: "Great improvement this week!",
                polarity: TrendPolarity::Positive,
            });
        }
    }

    trends
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn blank_entry(day: u32) -> DayEntry {
        DayEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            entry_date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            sleep_hours: None,
            sleep_quality: None,
            water_intake: None,
            mood: None,
            activity_level: None,
            notes: None,
            sleep_issues: Vec::new(),
            dehydration_symptoms: Vec::new(),
            mood_related: Vec::new(),
            activity_issues: Vec::new(),
            negative_factors: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn tags(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("tag-{i}")).collect()
    }

    #[test]
    fn empty_window_scores_zero() {
        let result = compute_score(&[]);
        assert_eq!(result.overall_score, 0);
        assert!(result.categories.is_empty());
        assert!(result.trends.is_empty());
        assert_eq!(result.entries_count, 0);
        assert_eq!(result.days_tracked, 0);
    }

    #[test]
    fn ideal_sleep_alone_weights_into_overall() {
        let mut entry = blank_entry(1);
        entry.sleep_hours = Some(8.0);
        entry.sleep_quality = Some(SleepQuality::SleptWell);

        let result = compute_score(&[entry]);
        let sleep = &result.categories[0];
        assert_eq!(sleep.name, "Sleep");
        assert_eq!(sleep.score, 100);
        assert_eq!(sleep.weight, 40);
        assert_eq!(sleep.description, "Excellent sleep patterns");
        // Other categories have no data and average to zero.
        assert_eq!(result.overall_score, 40);
        for category in &result.categories[1..] {
            assert_eq!(category.score, 0);
            assert_eq!(category.description, "No data recorded");
        }
    }

    #[test]
    fn sleep_hour_bands() {
        assert_eq!(sleep_entry_score(8.0, None, 0), 60);
        assert_eq!(sleep_entry_score(7.0, None, 0), 60);
        assert_eq!(sleep_entry_score(9.0, None, 0), 60);
        assert_eq!(sleep_entry_score(6.5, None, 0), 40);
        assert_eq!(sleep_entry_score(9.5, None, 0), 40);
        assert_eq!(sleep_entry_score(5.5, None, 0), 20);
        assert_eq!(sleep_entry_score(10.5, None, 0), 20);
        assert_eq!(sleep_entry_score(4.0, None, 0), 0);
        assert_eq!(sleep_entry_score(12.0, None, 0), 0);
    }

    #[test]
    fn sleep_quality_and_issue_penalty() {
        assert_eq!(sleep_entry_score(8.0, Some(SleepQuality::SleptWell), 0), 100);
        assert_eq!(sleep_entry_score(8.0, Some(SleepQuality::PoorSleep), 0), 70);
        // Penalty is 10 per issue, capped at 30.
        assert_eq!(sleep_entry_score(8.0, Some(SleepQuality::SleptWell), 2), 80);
        assert_eq!(sleep_entry_score(8.0, Some(SleepQuality::SleptWell), 9), 70);
    }

    #[test]
    fn water_scores_and_penalty_cap() {
        assert_eq!(water_entry_score(WaterIntake::Enough, 0), 100);
        assert_eq!(water_entry_score(WaterIntake::TooLittle, 0), 30);
        assert_eq!(water_entry_score(WaterIntake::Enough, 2), 70);
        // Penalty caps at 40 no matter how many symptoms.
        assert_eq!(water_entry_score(WaterIntake::Enough, 10), 60);
        // Clamp keeps the floor at zero.
        assert_eq!(water_entry_score(WaterIntake::TooLittle, 3), 0);
    }

    #[test]
    fn activity_level_bands() {
        assert_eq!(activity_entry_score(6, 0), 100);
        assert_eq!(activity_entry_score(4, 0), 70);
        assert_eq!(activity_entry_score(9, 0), 80);
        assert_eq!(activity_entry_score(2, 0), 30);
        assert_eq!(activity_entry_score(10, 0), 60);
        assert_eq!(activity_entry_score(0, 0), 0);
        // Penalty is 8 per issue, capped at 40.
        assert_eq!(activity_entry_score(6, 3), 76);
        assert_eq!(activity_entry_score(6, 20), 60);
    }

    #[test]
    fn mood_thresholds_and_penalty() {
        assert_eq!(mood_entry_score(9, 0), 100);
        assert_eq!(mood_entry_score(7, 0), 90);
        assert_eq!(mood_entry_score(5, 0), 80);
        assert_eq!(mood_entry_score(3, 0), 60);
        // mood=2 with three related issues: 100 - 40 - 36 = 24.
        assert_eq!(mood_entry_score(2, 3), 24);
        // Penalty caps at 60; 100 - 40 - 60 = 0.
        assert_eq!(mood_entry_score(1, 10), 0);
    }

    #[test]
    fn per_entry_scores_stay_clamped() {
        for issues in 0..20 {
            for mood in 1..=10 {
                let score = mood_entry_score(mood, issues);
                assert!((0..=100).contains(&score));
            }
            assert!((0..=100).contains(&sleep_entry_score(8.0, None, issues)));
            assert!((0..=100).contains(&water_entry_score(WaterIntake::TooLittle, issues)));
            assert!((0..=100).contains(&activity_entry_score(1, issues)));
        }
    }

    #[test]
    fn overall_score_weights_all_categories() {
        let mut entry = blank_entry(1);
        entry.sleep_hours = Some(8.0);
        entry.sleep_quality = Some(SleepQuality::SleptWell);
        entry.water_intake = Some(WaterIntake::Enough);
        entry.activity_level = Some(6);
        entry.mood = Some(9);

        let result = compute_score(&[entry]);
        // 0.4*100 + 0.2*100 + 0.2*100 + 0.2*100
        assert_eq!(result.overall_score, 100);
        assert_eq!(result.entries_count, 1);
        assert_eq!(result.days_tracked, 1);
    }

    #[test]
    fn descriptions_follow_score_bands() {
        assert_eq!(
            Category::Water.description(80, 1),
            "Perfect hydration"
        );
        assert_eq!(Category::Water.description(60, 1), "Adequate hydration");
        assert_eq!(Category::Water.description(40, 1), "Moderate hydration");
        assert_eq!(
            Category::Water.description(39, 1),
            "Hydration needs attention"
        );
        assert_eq!(Category::Mood.description(50, 0), "No data recorded");
    }

    #[test]
    fn no_trends_below_three_entries() {
        let mut a = blank_entry(1);
        a.mood = Some(9);
        let mut b = blank_entry(2);
        b.mood = Some(9);
        let result = compute_score(&[a, b]);
        assert!(result.trends.is_empty());
    }

    #[test]
    fn three_good_days_report_positive_trend() {
        let entries: Vec<DayEntry> = (1..=3)
            .map(|d| {
                let mut e = blank_entry(d);
                e.mood = Some(9);
                e
            })
            .collect();
        let result = compute_score(&entries);
        assert!(result
            .trends
            .iter()
            .any(|t| t.text == "Mostly good days this week!"
                && t.polarity == TrendPolarity::Positive));
    }

    #[test]
    fn three_bad_days_report_negative_trend() {
        let entries: Vec<DayEntry> = (1..=3)
            .map(|d| {
                let mut e = blank_entry(d);
                e.mood = Some(2);
                e.mood_related = tags(5);
                e
            })
            .collect();
        let result = compute_score(&entries);
        assert!(result
            .trends
            .iter()
            .any(|t| t.text == "Consider taking more rest days"
                && t.polarity == TrendPolarity::Negative));
        // Good-days and rest-days annotations are mutually exclusive.
        assert!(!result
            .trends
            .iter()
            .any(|t| t.text == "Mostly good days this week!"));
    }

    #[test]
    fn consistency_trend_requires_five_fully_tracked_recent_entries() {
        let full = |d: u32| {
            let mut e = blank_entry(d);
            e.sleep_hours = Some(8.0);
            e.water_intake = Some(WaterIntake::Enough);
            e.mood = Some(8);
            e
        };

        let entries: Vec<DayEntry> = (1..=5).map(full).collect();
        let result = compute_score(&entries);
        assert!(result
            .trends
            .iter()
            .any(|t| t.text == "Great consistency in tracking!"));

        // A hole in the most recent five suppresses the annotation.
        let mut entries: Vec<DayEntry> = (1..=5).map(full).collect();
        entries[2].water_intake = None;
        let result = compute_score(&entries);
        assert!(!result
            .trends
            .iter()
            .any(|t| t.text == "Great consistency in tracking!"));
    }

    #[test]
    fn improvement_trend_compares_recent_against_oldest_entries() {
        // Most-recent-first: four strong days, then three weak trailing days.
        // The older slice (index 4..) contributes raw mood and low sleep
        // points, well below the recent sleep/mood averages.
        let mut entries = Vec::new();
        for d in (4..=7).rev() {
            let mut e = blank_entry(d);
            e.sleep_hours = Some(8.0);
            e.sleep_quality = Some(SleepQuality::SleptWell);
            e.mood = Some(9);
            entries.push(e);
        }
        for d in (1..=3).rev() {
            let mut e = blank_entry(d);
            e.sleep_hours = Some(5.0);
            e.mood = Some(3);
            entries.push(e);
        }

        let result = compute_score(&entries);
        assert!(result
            .trends
            .iter()
            .any(|t| t.text == "Great improvement this week!"));
    }

    #[test]
    fn no_improvement_trend_when_older_entries_lack_data() {
        // Older slice has neither mood nor sleep recorded, so there is no
        // baseline to improve on.
        let mut entries: Vec<DayEntry> = (3..=5)
            .rev()
            .map(|d| {
                let mut e = blank_entry(d);
                e.sleep_hours = Some(8.0);
                e.sleep_quality = Some(SleepQuality::SleptWell);
                e.mood = Some(9);
                e
            })
            .collect();
        entries.push(blank_entry(2));
        entries.push(blank_entry(1));

        let result = compute_score(&entries);
        assert!(!result
            .trends
            .iter()
            .any(|t| t.text == "Great improvement this week!"));
    }
}
