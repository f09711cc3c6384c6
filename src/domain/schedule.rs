//! Past/upcoming classification of shows relative to "now".
//!
//! Nothing here is stored: every page computes the split at request time.
//! A show is upcoming when it starts strictly after `now`; everything else,
//! including a show starting exactly at `now`, is past.

use chrono::{DateTime, Utc};

/// Which side of "now" a start time falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBucket {
    Past,
    Upcoming,
}

impl TimeBucket {
    pub fn classify(start_time: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if is_upcoming(start_time, now) {
            TimeBucket::Upcoming
        } else {
            TimeBucket::Past
        }
    }
}

pub fn is_upcoming(start_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start_time > now
}

/// Two disjoint lists split around a single instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> Schedule<T> {
    /// Split `items` around `now`, preserving input order within each side.
    pub fn partition<I, F>(items: I, now: DateTime<Utc>, start_time: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> DateTime<Utc>,
    {
        let mut schedule = Schedule {
            past: Vec::new(),
            upcoming: Vec::new(),
        };

        for item in items {
            match TimeBucket::classify(start_time(&item), now) {
                TimeBucket::Past => schedule.past.push(item),
                TimeBucket::Upcoming => schedule.upcoming.push(item),
            }
        }

        schedule
    }

    pub fn map<U, F>(self, f: F) -> Schedule<U>
    where
        F: Fn(T) -> U,
    {
        Schedule {
            past: self.past.into_iter().map(&f).collect(),
            upcoming: self.upcoming.into_iter().map(&f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Show;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 6, 1, 12, 0, 0).unwrap()
    }

    fn show(id: i32, venue_id: i32, offset_minutes: i64) -> Show {
        Show {
            id,
            start_time: now() + Duration::minutes(offset_minutes),
            artist_id: 1,
            venue_id,
        }
    }

    #[test]
    fn test_partition_splits_around_now() {
        let shows = vec![show(1, 1, -60), show(2, 1, 60), show(3, 1, -5)];

        let schedule = Schedule::partition(shows, now(), |s| s.start_time);

        let past: Vec<i32> = schedule.past.iter().map(|s| s.id).collect();
        let upcoming: Vec<i32> = schedule.upcoming.iter().map(|s| s.id).collect();
        assert_eq!(past, vec![1, 3]);
        assert_eq!(upcoming, vec![2]);
    }

    #[test]
    fn test_show_starting_now_is_past() {
        assert_eq!(TimeBucket::classify(now(), now()), TimeBucket::Past);
        assert!(!is_upcoming(now(), now()));

        let schedule = Schedule::partition(vec![show(1, 1, 0)], now(), |s| s.start_time);
        assert_eq!(schedule.past.len(), 1);
        assert!(schedule.upcoming.is_empty());
    }

    #[test]
    fn test_map_keeps_sides() {
        let schedule = Schedule::partition(vec![show(1, 1, -1), show(2, 1, 1)], now(), |s| {
            s.start_time
        })
        .map(|s| s.id * 10);

        assert_eq!(schedule.past, vec![10]);
        assert_eq!(schedule.upcoming, vec![20]);
    }
}
