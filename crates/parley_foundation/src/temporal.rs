//! Fuzzy temporal values.
//!
//! A [`TemporalPattern`] is what a spoken time expression reduces to. It is
//! either *relative* ("5 minutes", "an hour and a half": every field is an
//! amount) or *definitive* ("monday at 5 pm", "17:30": every field is a
//! calendar value). A [`TimeModifier`] records how the command should use it.
//!
//! Resolution always takes the clock as an argument so that the same pattern
//! and the same `now` produce the same timestamp.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, TimeDelta, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// How the fields of a pattern are interpreted.
///
/// Also serves as the interval-type of an [`IntervalSpec`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRule {
    /// Fields are amounts added to the current time.
    #[default]
    Relative,
    /// Fields are calendar values to match.
    Definitive,
}

/// What a temporal expression means to a command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeModifier {
    /// No modifier word was attached.
    #[default]
    None,
    /// "in ..." - run the command later.
    Delay,
    /// "for ..." - the command lasts this long.
    Period,
    /// "every ..." - repeat the command.
    Interval,
}

/// A unit of time named in input ("minutes", "hrs").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Seconds
    Second,
    /// Minutes
    Minute,
    /// Hours
    Hour,
    /// Days
    Day,
    /// Weeks (stored as seven days)
    Week,
    /// Months
    Month,
    /// Years
    Year,
}

impl TimeUnit {
    /// Parses a unit name as written in the pattern document.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "second" => Some(Self::Second),
            "minute" => Some(Self::Minute),
            "hour" => Some(Self::Hour),
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            _ => None,
        }
    }

    /// The next smaller unit and how many of it make one of this unit.
    ///
    /// Months are approximated as thirty days.
    #[must_use]
    pub const fn smaller(self) -> Option<(Self, f64)> {
        match self {
            Self::Second => None,
            Self::Minute => Some((Self::Second, 60.0)),
            Self::Hour => Some((Self::Minute, 60.0)),
            Self::Day => Some((Self::Hour, 24.0)),
            Self::Week => Some((Self::Day, 7.0)),
            Self::Month => Some((Self::Day, 30.0)),
            Self::Year => Some((Self::Month, 12.0)),
        }
    }
}

/// Ante/post meridiem marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meridiem {
    /// Before noon
    Am,
    /// After noon
    Pm,
}

impl Meridiem {
    /// Parses a meridiem name as written in the pattern document.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "am" => Some(Self::Am),
            "pm" => Some(Self::Pm),
            _ => None,
        }
    }
}

/// A fuzzy date/time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporalPattern {
    /// Relative amounts or definitive calendar values.
    pub rule: TimeRule,
    /// How the owning command should use this value.
    pub modifier: TimeModifier,
    /// Years
    pub year: Option<i64>,
    /// Months (1-12 when definitive)
    pub month: Option<i64>,
    /// Days (day of month when definitive)
    pub day: Option<i64>,
    /// Day of the week (definitive only)
    pub day_of_week: Option<Weekday>,
    /// Hours (0-23 when definitive)
    pub hour: Option<i64>,
    /// Minutes
    pub minute: Option<i64>,
    /// Seconds
    pub second: Option<i64>,
    /// Whole days from today before the calendar fields apply (definitive
    /// only): "tomorrow at 17:30" is an offset of one.
    pub day_offset: Option<i64>,
}

impl TemporalPattern {
    /// A relative pattern of `amount` units.
    ///
    /// A fractional amount spills into the next smaller unit, so 1.5 hours is
    /// one hour and thirty minutes.
    #[must_use]
    pub fn relative(unit: TimeUnit, amount: f64) -> Self {
        let mut pattern = Self::default();
        let whole = amount.trunc();
        pattern.add(unit, whole as i64);

        let fraction = amount - whole;
        if fraction.abs() > f64::EPSILON {
            if let Some((smaller, factor)) = unit.smaller() {
                pattern.add(smaller, (fraction * factor).round() as i64);
            }
        }
        pattern
    }

    /// An empty definitive pattern.
    #[must_use]
    pub fn definitive() -> Self {
        Self {
            rule: TimeRule::Definitive,
            ..Self::default()
        }
    }

    /// A definitive time of day.
    #[must_use]
    pub fn clock(hour: i64, minute: i64, second: i64) -> Self {
        Self {
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
            ..Self::definitive()
        }
    }

    /// Parses `HH:MM` or `HH:MM:SS` into a definitive time of day.
    #[must_use]
    pub fn parse_clock(text: &str) -> Option<Self> {
        let mut parts = text.trim().split(':');
        let hour: i64 = parts.next()?.parse().ok()?;
        let minute: i64 = parts.next()?.parse().ok()?;
        let second: i64 = match parts.next() {
            Some(s) => s.parse().ok()?,
            None => 0,
        };
        if parts.next().is_some()
            || !(0..24).contains(&hour)
            || !(0..60).contains(&minute)
            || !(0..60).contains(&second)
        {
            return None;
        }
        Some(Self::clock(hour, minute, second))
    }

    /// Returns this pattern with the given modifier.
    #[must_use]
    pub fn with_modifier(mut self, modifier: TimeModifier) -> Self {
        self.modifier = modifier;
        self
    }

    /// Returns this pattern with the given weekday.
    #[must_use]
    pub fn with_day_of_week(mut self, day: Weekday) -> Self {
        self.day_of_week = Some(day);
        self
    }

    /// Returns true if the fields are amounts.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.rule == TimeRule::Relative
    }

    fn add(&mut self, unit: TimeUnit, amount: i64) {
        let field = match unit {
            TimeUnit::Second => &mut self.second,
            TimeUnit::Minute => &mut self.minute,
            TimeUnit::Hour => &mut self.hour,
            TimeUnit::Day => &mut self.day,
            TimeUnit::Week => {
                self.day = Some(self.day.unwrap_or(0) + amount * 7);
                return;
            }
            TimeUnit::Month => &mut self.month,
            TimeUnit::Year => &mut self.year,
        };
        *field = Some(field.unwrap_or(0) + amount);
    }

    /// Combines two patterns describing the same moment or span.
    ///
    /// Relative patterns add up ("1 hour 30 minutes"). Definitive patterns
    /// union their fields ("monday" + "5 pm") and fail on a conflict. A
    /// relative span of whole days and a definitive time of day anchor the
    /// time to that day ("tomorrow" + "17:30", "every day" + "5 pm"). Any
    /// other mix of rules fails. Modifiers must agree unless one is
    /// [`TimeModifier::None`].
    #[must_use]
    pub fn merge(&self, other: &Self) -> Option<Self> {
        let modifier = merge_modifiers(self.modifier, other.modifier)?;

        if self.rule != other.rule {
            let (span, time) = if self.is_relative() {
                (self, other)
            } else {
                (other, self)
            };
            return span.anchor(time, modifier);
        }

        let combine = |a: Option<i64>, b: Option<i64>| -> Option<Option<i64>> {
            match (a, b) {
                (None, None) => Some(None),
                (Some(x), None) | (None, Some(x)) => Some(Some(x)),
                (Some(x), Some(y)) => match self.rule {
                    TimeRule::Relative => Some(Some(x + y)),
                    TimeRule::Definitive if x == y => Some(Some(x)),
                    TimeRule::Definitive => None,
                },
            }
        };

        let day_of_week = match (self.day_of_week, other.day_of_week) {
            (Some(a), Some(b)) if a != b => return None,
            (a, b) => a.or(b),
        };

        Some(Self {
            rule: self.rule,
            modifier,
            year: combine(self.year, other.year)?,
            month: combine(self.month, other.month)?,
            day: combine(self.day, other.day)?,
            day_of_week,
            hour: combine(self.hour, other.hour)?,
            minute: combine(self.minute, other.minute)?,
            second: combine(self.second, other.second)?,
            day_offset: combine(self.day_offset, other.day_offset)?,
        })
    }

    /// A time of day on the day this span of whole days points at.
    fn anchor(&self, time: &Self, modifier: TimeModifier) -> Option<Self> {
        let days = self.day.filter(|d| *d >= 0)?;
        let whole_days = self.year.is_none()
            && self.month.is_none()
            && self.hour.is_none()
            && self.minute.is_none()
            && self.second.is_none();
        let time_of_day = time.hour.is_some()
            && time.year.is_none()
            && time.month.is_none()
            && time.day.is_none()
            && time.day_of_week.is_none()
            && time.day_offset.is_none();
        if !whole_days || !time_of_day {
            return None;
        }

        Some(Self {
            rule: TimeRule::Definitive,
            modifier,
            hour: time.hour,
            minute: time.minute,
            second: time.second,
            day_offset: Some(days),
            ..Self::default()
        })
    }

    /// Applies "am"/"pm" to a definitive hour in 1..=12.
    #[must_use]
    pub fn with_meridiem(mut self, meridiem: Meridiem) -> Option<Self> {
        if self.rule != TimeRule::Definitive {
            return None;
        }
        let hour = self.hour?;
        if !(1..=12).contains(&hour) {
            return None;
        }
        self.hour = Some(match meridiem {
            Meridiem::Am => hour % 12,
            Meridiem::Pm => hour % 12 + 12,
        });
        Some(self)
    }

    /// The moment this pattern points at, seen from `now`.
    ///
    /// Relative patterns are added to `now`. Definitive patterns resolve to
    /// the next matching moment after `now`, rolling forward by the smallest
    /// unspecified unit; a pattern anchored to a day offset never rolls.
    /// Returns `None` for impossible dates, or for a definitive year or an
    /// anchored day whose moment is already past.
    #[must_use]
    pub fn resolve(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self.rule {
            TimeRule::Relative => self.resolve_relative(now),
            TimeRule::Definitive => self.resolve_definitive(now),
        }
    }

    fn resolve_relative(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let months = self.year.unwrap_or(0) * 12 + self.month.unwrap_or(0);
        let mut at = if months >= 0 {
            now.checked_add_months(Months::new(u32::try_from(months).ok()?))?
        } else {
            now.checked_sub_months(Months::new(u32::try_from(-months).ok()?))?
        };

        let delta = TimeDelta::try_days(self.day.unwrap_or(0))?
            .checked_add(&TimeDelta::try_hours(self.hour.unwrap_or(0))?)?
            .checked_add(&TimeDelta::try_minutes(self.minute.unwrap_or(0))?)?
            .checked_add(&TimeDelta::try_seconds(self.second.unwrap_or(0))?)?;
        at = at.checked_add_signed(delta)?;
        Some(at)
    }

    fn resolve_definitive(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let to_u32 = |v: i64| u32::try_from(v).ok();

        let time = NaiveTime::from_hms_opt(
            to_u32(self.hour.unwrap_or(0))?,
            to_u32(self.minute.unwrap_or(0))?,
            to_u32(self.second.unwrap_or(0))?,
        )?;

        let today = match self.day_offset {
            Some(days) => now
                .date_naive()
                .checked_add_signed(TimeDelta::try_days(days)?)?,
            None => now.date_naive(),
        };
        let year = match self.year {
            Some(y) => i32::try_from(y).ok()?,
            None => today.year(),
        };
        let month = match self.month {
            Some(m) => to_u32(m)?,
            None => today.month(),
        };
        let day = match (self.day, self.month) {
            (Some(d), _) => to_u32(d)?,
            (None, Some(_)) => 1,
            (None, None) => today.day(),
        };

        let mut date = NaiveDate::from_ymd_opt(year, month, day)?;
        if let Some(weekday) = self.day_of_week {
            while date.weekday() != weekday {
                date = date.succ_opt()?;
            }
        }

        let candidate = date.and_time(time).and_utc();
        if candidate > now {
            return Some(candidate);
        }

        if self.year.is_some() || self.day_offset.is_some() {
            None
        } else if self.day_of_week.is_some() {
            candidate.checked_add_signed(TimeDelta::try_days(7)?)
        } else if self.month.is_some() {
            candidate.checked_add_months(Months::new(12))
        } else if self.day.is_some() {
            candidate.checked_add_months(Months::new(1))
        } else {
            candidate.checked_add_signed(TimeDelta::try_days(1)?)
        }
    }

    /// The span between `now` and the moment this pattern points at.
    #[must_use]
    pub fn duration(&self, now: DateTime<Utc>) -> Option<TimeDelta> {
        self.resolve(now).map(|at| at - now)
    }

    /// The calendar fields of this pattern as a repeat specification.
    #[must_use]
    pub fn interval(&self) -> IntervalSpec {
        IntervalSpec {
            rule: self.rule,
            year: self.year,
            month: self.month,
            day: self.day,
            day_of_week: self.day_of_week,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            day_offset: self.day_offset,
        }
    }
}

fn merge_modifiers(a: TimeModifier, b: TimeModifier) -> Option<TimeModifier> {
    match (a, b) {
        (a, TimeModifier::None) => Some(a),
        (TimeModifier::None, b) => Some(b),
        (a, b) if a == b => Some(a),
        _ => None,
    }
}

/// When a repeating command should fire.
///
/// A relative interval repeats every span ("every 5 minutes"); a definitive
/// interval repeats whenever the calendar matches ("every monday at 17:00").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntervalSpec {
    /// Interval type.
    pub rule: TimeRule,
    /// Years
    pub year: Option<i64>,
    /// Months
    pub month: Option<i64>,
    /// Days
    pub day: Option<i64>,
    /// Day of the week
    pub day_of_week: Option<Weekday>,
    /// Hours
    pub hour: Option<i64>,
    /// Minutes
    pub minute: Option<i64>,
    /// Seconds
    pub second: Option<i64>,
    /// Days between repeats of a definitive interval ("every day at 5 pm"
    /// is one).
    pub day_offset: Option<i64>,
}
