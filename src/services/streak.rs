use chrono::NaiveDate;

/// A user's streak counters as last persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakState {
    pub current_streak: i32,
    pub last_entry_date: Option<NaiveDate>,
    pub longest_streak: i32,
}

/// Outcome of applying a new entry date to a streak.
///
/// When `already_recorded_today` is set the counters are unchanged and the
/// caller must not persist anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakUpdate {
    pub current_streak: i32,
    pub last_entry_date: NaiveDate,
    pub longest_streak: i32,
    pub already_recorded_today: bool,
}

/// Decide whether a new entry date extends, resets, or repeats the streak.
///
/// Consecutive calendar days extend the streak by one; a gap of two or more
/// days resets it to one. A date earlier than the last recorded entry also
/// resets to one; backdated entries share the gap branch (see DESIGN.md).
/// Pure over the prior state; the caller fetches and persists the row.
pub fn update_streak(prior: Option<StreakState>, new_date: NaiveDate) -> StreakUpdate {
    let prior = prior.unwrap_or_default();

    let current_streak = match prior.last_entry_date {
        None => 1, // first-ever entry
        Some(last) => {
            let diff_days = (new_date - last).num_days();
            if diff_days == 0 {
                return StreakUpdate {
                    current_streak: prior.current_streak,
                    last_entry_date: last,
                    longest_streak: prior.longest_streak,
                    already_recorded_today: true,
                };
            } else if diff_days == 1 {
                prior.current_streak + 1
            } else {
                1
            }
        }
    };

    StreakUpdate {
        current_streak,
        last_entry_date: new_date,
        longest_streak: prior.longest_streak.max(current_streak),
        already_recorded_today: false,
    }
}
