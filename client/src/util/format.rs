//! Display formatting for times, day separators, and counted phrases.
//!
//! All times are shown in the fixture display offset; callers pass the
//! reference "today" explicitly so labels are testable.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::{Date, Month, OffsetDateTime};

use crate::data::types::Badge;

/// "09:05".
#[must_use]
pub fn clock(ts: OffsetDateTime) -> String {
    format!("{:02}:{:02}", ts.hour(), ts.minute())
}

/// Separator label for the day `ts` falls on: "Сегодня", "Вчера", or
/// "22 октября".
#[must_use]
pub fn day_label(ts: OffsetDateTime, today: Date) -> String {
    let day = ts.date();
    if day == today {
        "Сегодня".to_owned()
    } else if today.previous_day() == Some(day) {
        "Вчера".to_owned()
    } else {
        format!("{} {}", day.day(), month_genitive(day.month()))
    }
}

fn month_genitive(month: Month) -> &'static str {
    match month {
        Month::January => "января",
        Month::February => "февраля",
        Month::March => "марта",
        Month::April => "апреля",
        Month::May => "мая",
        Month::June => "июня",
        Month::July => "июля",
        Month::August => "августа",
        Month::September => "сентября",
        Month::October => "октября",
        Month::November => "ноября",
        Month::December => "декабря",
    }
}

/// Interested-people phrase on plan cards. Pair plans count seekers, group
/// plans count interest.
#[must_use]
pub fn interested_phrase(count: usize, pair: bool) -> String {
    match (pair, count == 1) {
        (true, true) => "1 человек ищет пару".to_owned(),
        (true, false) => format!("{count} людей ищут пару"),
        (false, true) => "Интересно 1 человеку".to_owned(),
        (false, false) => format!("Интересно {count} людям"),
    }
}

/// Title above the interested-people list on plan details.
#[must_use]
pub fn interested_title(count: usize, pair: bool) -> String {
    if pair {
        format!("Ищут пару ({count})")
    } else {
        format!("Подходящие люди ({count})")
    }
}

/// The first `limit` badges and how many were left out.
#[must_use]
pub fn badge_overflow(badges: &[Badge], limit: usize) -> (&[Badge], usize) {
    let shown = badges.len().min(limit);
    (&badges[..shown], badges.len() - shown)
}

/// "+3" chip text, or nothing when all badges fit.
#[must_use]
pub fn overflow_chip(hidden: usize) -> Option<String> {
    (hidden > 0).then(|| format!("+{hidden}"))
}

/// Price label with the free fallback.
#[must_use]
pub fn price_label(price: Option<&str>) -> String {
    price.map_or_else(|| "Бесплатно".to_owned(), ToOwned::to_owned)
}
