use crate::models::{Person, SeriesPoint, VisibleMonth, WeightEntry, WeightHistory};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Inserts the entry into the history, replacing any existing entry for the
/// same person and calendar day in place. Returns a new map; the input is
/// untouched. An unknown person id just opens a new bucket.
pub fn upsert_weight_entry(history: &WeightHistory, entry: WeightEntry) -> WeightHistory {
    let mut next = history.clone();
    let entries = next.entry(entry.person_id.clone()).or_default();

    match entries.iter_mut().find(|existing| existing.date == entry.date) {
        Some(existing) => *existing = entry,
        None => entries.push(entry),
    }

    next
}

/// The person's most recently logged entry, in insertion order. Logging a
/// back-dated entry makes that entry the "last" one even though an entry with
/// a later date exists; lookups reproduce that behavior rather than sorting
/// by date.
pub fn last_weight_entry<'a>(
    history: &'a WeightHistory,
    person: &Person,
) -> Option<&'a WeightEntry> {
    history.get(&person.id).and_then(|entries| entries.last())
}

/// Percentage of the way from the initial weight to the goal weight, based on
/// the last logged entry. 0 with no entry, when the goal equals the initial
/// weight, or while the last weight sits on the wrong side of the start.
/// Overshooting the goal yields values above 100.
pub fn progress_toward_goal(person: &Person, last_entry: Option<&WeightEntry>) -> f64 {
    let Some(entry) = last_entry else {
        return 0.0;
    };

    let span = person.goal_weight - person.initial_weight;
    if span == 0.0 {
        return 0.0;
    }

    let travelled = entry.weight - person.initial_weight;
    if (span > 0.0 && travelled <= 0.0) || (span < 0.0 && travelled >= 0.0) {
        return 0.0;
    }

    100.0 * travelled.abs() / span.abs()
}

/// One point list per person id in the history, restricted to the visible
/// month and kept in the entries' original order. Persons whose log has no
/// entries in the month still get an (empty) line.
pub fn build_month_series(
    history: &WeightHistory,
    month: VisibleMonth,
) -> BTreeMap<String, Vec<SeriesPoint>> {
    history
        .iter()
        .map(|(person_id, entries)| {
            let points = entries
                .iter()
                .filter(|entry| month.contains(entry.date))
                .map(|entry| SeriesPoint {
                    day: entry.date.day(),
                    weight: entry.weight,
                })
                .collect();
            (person_id.clone(), points)
        })
        .collect()
}

/// Number of days in the month, counted by walking from the 1st until the
/// month rolls over.
pub fn days_in_month(month: VisibleMonth) -> u32 {
    let mut days = 0;
    let mut date = NaiveDate::from_ymd_opt(month.year, month.month, 1);

    while let Some(current) = date {
        if current.month() != month.month {
            break;
        }
        days += 1;
        date = current.succ_opt();
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn person(initial_weight: f64, goal_weight: f64) -> Person {
        Person {
            id: Uuid::new_v4().to_string(),
            name: "Alice".to_string(),
            initial_weight,
            goal_weight,
        }
    }

    fn entry(person_id: &str, date: NaiveDate, weight: f64) -> WeightEntry {
        WeightEntry {
            id: Uuid::new_v4().to_string(),
            person_id: person_id.to_string(),
            date,
            weight,
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn upsert_appends_for_a_new_day() {
        let p = person(70.0, 60.0);
        let history = WeightHistory::new();

        let history = upsert_weight_entry(&history, entry(&p.id, date(2026, 8, 1), 70.0));
        let history = upsert_weight_entry(&history, entry(&p.id, date(2026, 8, 5), 65.0));

        let entries = history.get(&p.id).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].weight, 70.0);
        assert_eq!(entries[1].weight, 65.0);
    }

    #[test]
    fn upsert_replaces_in_place_for_the_same_day() {
        let p = person(70.0, 60.0);
        let day = date(2026, 8, 10);
        let history = WeightHistory::new();

        let history = upsert_weight_entry(&history, entry(&p.id, date(2026, 8, 1), 70.0));
        let history = upsert_weight_entry(&history, entry(&p.id, day, 80.0));
        let history = upsert_weight_entry(&history, entry(&p.id, day, 82.0));

        let entries = history.get(&p.id).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].date, day);
        assert_eq!(entries[1].weight, 82.0);
    }

    #[test]
    fn upsert_leaves_the_input_history_untouched() {
        let p = person(70.0, 60.0);
        let original =
            upsert_weight_entry(&WeightHistory::new(), entry(&p.id, date(2026, 8, 1), 70.0));

        let updated = upsert_weight_entry(&original, entry(&p.id, date(2026, 8, 2), 69.0));

        assert_eq!(original.get(&p.id).unwrap().len(), 1);
        assert_eq!(updated.get(&p.id).unwrap().len(), 2);
    }

    #[test]
    fn upsert_opens_a_bucket_for_an_unknown_person() {
        let history =
            upsert_weight_entry(&WeightHistory::new(), entry("ghost", date(2026, 8, 1), 50.0));
        assert_eq!(history.get("ghost").unwrap().len(), 1);
    }

    #[test]
    fn last_entry_follows_insertion_order_not_date_order() {
        let p = person(70.0, 60.0);
        let history = WeightHistory::new();

        // Back-dated log lands last and wins the lookup.
        let history = upsert_weight_entry(&history, entry(&p.id, date(2026, 8, 20), 68.0));
        let history = upsert_weight_entry(&history, entry(&p.id, date(2026, 8, 3), 69.5));

        let last = last_weight_entry(&history, &p).unwrap();
        assert_eq!(last.date, date(2026, 8, 3));
        assert_eq!(last.weight, 69.5);
    }

    #[test]
    fn last_entry_is_none_without_history() {
        let p = person(70.0, 60.0);
        assert!(last_weight_entry(&WeightHistory::new(), &p).is_none());
    }

    #[test]
    fn progress_is_zero_at_the_initial_weight() {
        let p = person(70.0, 60.0);
        let e = entry(&p.id, date(2026, 8, 1), 70.0);
        assert_eq!(progress_toward_goal(&p, Some(&e)), 0.0);
    }

    #[test]
    fn progress_is_hundred_at_the_goal() {
        let p = person(70.0, 60.0);
        let e = entry(&p.id, date(2026, 8, 1), 60.0);
        assert_eq!(progress_toward_goal(&p, Some(&e)), 100.0);
    }

    #[test]
    fn progress_halfway_example() {
        let p = person(70.0, 60.0);
        let e = entry(&p.id, date(2026, 8, 5), 65.0);
        assert_eq!(progress_toward_goal(&p, Some(&e)), 50.0);
    }

    #[test]
    fn progress_exceeds_hundred_on_overshoot() {
        let p = person(70.0, 60.0);
        let e = entry(&p.id, date(2026, 8, 5), 55.0);
        assert_eq!(progress_toward_goal(&p, Some(&e)), 150.0);
    }

    #[test]
    fn progress_is_zero_on_the_wrong_side_of_the_start() {
        let losing = person(70.0, 60.0);
        let heavier = entry(&losing.id, date(2026, 8, 1), 74.0);
        assert_eq!(progress_toward_goal(&losing, Some(&heavier)), 0.0);

        let gaining = person(60.0, 70.0);
        let lighter = entry(&gaining.id, date(2026, 8, 1), 58.0);
        assert_eq!(progress_toward_goal(&gaining, Some(&lighter)), 0.0);
    }

    #[test]
    fn progress_guards_goal_equal_to_initial() {
        let p = person(70.0, 70.0);
        let e = entry(&p.id, date(2026, 8, 1), 65.0);
        assert_eq!(progress_toward_goal(&p, Some(&e)), 0.0);
    }

    #[test]
    fn progress_is_zero_without_an_entry() {
        let p = person(70.0, 60.0);
        assert_eq!(progress_toward_goal(&p, None), 0.0);
    }

    #[test]
    fn month_series_filters_by_month_and_keeps_grouping() {
        let alice = person(70.0, 60.0);
        let bob = person(90.0, 80.0);
        let history = WeightHistory::new();

        let history = upsert_weight_entry(&history, entry(&alice.id, date(2026, 8, 3), 69.0));
        let history = upsert_weight_entry(&history, entry(&alice.id, date(2026, 7, 30), 70.0));
        let history = upsert_weight_entry(&history, entry(&alice.id, date(2026, 8, 12), 68.0));
        let history = upsert_weight_entry(&history, entry(&bob.id, date(2026, 8, 7), 88.5));

        let series = build_month_series(&history, VisibleMonth { year: 2026, month: 8 });

        assert_eq!(series.len(), 2);
        assert_eq!(
            series.get(&alice.id).unwrap(),
            &vec![
                SeriesPoint { day: 3, weight: 69.0 },
                SeriesPoint { day: 12, weight: 68.0 },
            ]
        );
        assert_eq!(
            series.get(&bob.id).unwrap(),
            &vec![SeriesPoint { day: 7, weight: 88.5 }]
        );
    }

    #[test]
    fn month_series_keeps_an_empty_line_for_out_of_month_history() {
        let p = person(70.0, 60.0);
        let history =
            upsert_weight_entry(&WeightHistory::new(), entry(&p.id, date(2026, 7, 1), 70.0));

        let series = build_month_series(&history, VisibleMonth { year: 2026, month: 8 });
        assert!(series.get(&p.id).unwrap().is_empty());
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(VisibleMonth { year: 2024, month: 2 }), 29);
        assert_eq!(days_in_month(VisibleMonth { year: 2026, month: 2 }), 28);
        assert_eq!(days_in_month(VisibleMonth { year: 2026, month: 8 }), 31);
        assert_eq!(days_in_month(VisibleMonth { year: 2026, month: 4 }), 30);
    }

    #[test]
    fn month_navigation_rolls_over_year_boundaries() {
        let dec = VisibleMonth { year: 2026, month: 12 };
        assert_eq!(dec.next(), VisibleMonth { year: 2027, month: 1 });

        let jan = VisibleMonth { year: 2026, month: 1 };
        assert_eq!(jan.prev(), VisibleMonth { year: 2025, month: 12 });
        assert_eq!(jan.next(), VisibleMonth { year: 2026, month: 2 });
    }
}
