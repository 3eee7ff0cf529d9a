use crate::domain::model::CountdownResult;
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// A month/day that recurs every year, anchored at local midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownTarget {
    month: u32,
    day: u32,
}

pub const VALENTINES_DAY: CountdownTarget = CountdownTarget { month: 2, day: 14 };

impl CountdownTarget {
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    fn date_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }

    /// Start of the day in `tz`. Zones that skip midnight start at 01:00.
    fn start_in<Tz: TimeZone>(&self, tz: &Tz, year: i32) -> Option<DateTime<Tz>> {
        tz.with_ymd_and_hms(year, self.month, self.day, 0, 0, 0)
            .earliest()
            .or_else(|| {
                tz.with_ymd_and_hms(year, self.month, self.day, 1, 0, 0)
                    .earliest()
            })
    }

    /// Start of this year's occurrence in `now`'s zone, or next year's once it has passed.
    pub fn next_occurrence<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DateTime<Tz> {
        let tz = now.timezone();

        match self.start_in(&tz, now.year()) {
            Some(target) if *now <= target => target,
            _ => self
                .start_in(&tz, now.year() + 1)
                // 超出 chrono 可表示的年份時退化為「已到達」
                .unwrap_or_else(|| now.clone()),
        }
    }

    /// True for the whole local calendar day, even after the countdown has rolled over.
    pub fn is_today<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        self.date_in(now.year()) == Some(now.date_naive())
    }
}

/// Time left until the next February 14 in `now`'s zone.
///
/// The difference is taken between real instants, so a DST change inside the
/// interval shows up in the hours field.
pub fn countdown<Tz: TimeZone>(now: DateTime<Tz>) -> CountdownResult {
    let target = VALENTINES_DAY.next_occurrence(&now);
    let target_local = target.naive_local();
    let delta = target
        .signed_duration_since(now.clone())
        .num_milliseconds()
        .max(0);

    CountdownResult {
        days: delta / MS_PER_DAY,
        hours: (delta / MS_PER_HOUR) % 24,
        minutes: (delta / MS_PER_MINUTE) % 60,
        seconds: (delta / MS_PER_SECOND) % 60,
        is_target_day: VALENTINES_DAY.is_today(&now),
        target: target_local,
    }
}

pub fn countdown_now() -> CountdownResult {
    countdown(Local::now())
}
