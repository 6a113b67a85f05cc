//! 营业日工具: 业务时区日键与报表窗口
//!
//! Every "same calendar day" comparison in the engine flows through
//! [`BusinessDayPolicy`] - one timezone plus one day-cutoff, applied
//! uniformly instead of being re-derived per call site.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::EngineError;

/// Canonicalizes which business day an instant belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessDayPolicy {
    tz: Tz,
    /// Instants before the cutoff belong to the previous business day
    cutoff: NaiveTime,
}

impl Default for BusinessDayPolicy {
    fn default() -> Self {
        Self {
            tz: chrono_tz::UTC,
            cutoff: NaiveTime::MIN,
        }
    }
}

impl BusinessDayPolicy {
    /// Plain UTC calendar days, midnight cutoff
    pub fn utc() -> Self {
        Self::default()
    }

    pub fn new(tz: Tz, cutoff: NaiveTime) -> Self {
        Self { tz, cutoff }
    }

    /// Build from store-info strings: IANA timezone name + "HH:MM" cutoff.
    ///
    /// An unknown timezone is a caller-contract violation; a malformed
    /// cutoff falls back to midnight with a warning.
    pub fn from_store_config(tz: &str, cutoff: &str) -> Result<Self, EngineError> {
        let tz: Tz = tz
            .parse()
            .map_err(|_| EngineError::UnknownTimezone(tz.to_string()))?;
        Ok(Self::new(tz, parse_cutoff(cutoff)))
    }

    /// 计算时间戳所属营业日 (业务时区)
    ///
    /// Unrepresentable timestamps yield `None`; callers treat the underlying
    /// transition as absent.
    pub fn day_key(&self, millis: i64) -> Option<NaiveDate> {
        let local = Utc.timestamp_millis_opt(millis).single()?.with_timezone(&self.tz);
        if local.time() < self.cutoff {
            local.date_naive().pred_opt()
        } else {
            Some(local.date_naive())
        }
    }

    /// True when both instants land on the same business day.
    /// False when either is unrepresentable.
    pub fn same_day(&self, a: i64, b: i64) -> bool {
        match (self.day_key(a), self.day_key(b)) {
            (Some(da), Some(db)) => da == db,
            _ => false,
        }
    }

    /// 营业日起点 (cutoff 时刻, 业务时区)
    ///
    /// DST gap fallback: 如果本地时间不存在 (夏令时跳跃)，fallback 到 UTC。
    pub fn day_start(&self, date: NaiveDate) -> DateTime<Tz> {
        let naive = date.and_time(self.cutoff);
        naive
            .and_local_timezone(self.tz)
            .latest()
            .unwrap_or_else(|| naive.and_utc().with_timezone(&self.tz))
    }

    /// 营业日起点 → Unix millis
    pub fn day_start_millis(&self, date: NaiveDate) -> i64 {
        self.day_start(date).timestamp_millis()
    }

    /// 营业日结束 → 次日 cutoff 的 Unix millis (调用方使用不含语义)
    pub fn day_end_millis(&self, date: NaiveDate) -> i64 {
        self.day_start_millis(date.succ_opt().unwrap_or(date))
    }
}

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> Result<NaiveDate, EngineError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| EngineError::InvalidDate(date.to_string()))
}

/// 解析 cutoff 时间字符串 (HH:MM)，失败返回 00:00
pub fn parse_cutoff(cutoff: &str) -> NaiveTime {
    NaiveTime::parse_from_str(cutoff, "%H:%M").unwrap_or_else(|e| {
        tracing::warn!(
            "Failed to parse business day cutoff '{}': {}, falling back to 00:00",
            cutoff,
            e
        );
        NaiveTime::MIN
    })
}

/// Inclusive reporting window in Unix millis
///
/// Callers set `end` to the last instant of the closing business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: i64,
    pub end: i64,
}

impl TimeRange {
    /// Caller-contract check: start must not exceed end.
    pub fn new(start: i64, end: i64) -> Result<Self, EngineError> {
        if start > end {
            return Err(EngineError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window covering whole business days from `start_date` through
    /// `end_date` (inclusive) under `policy`.
    pub fn business_days(
        start_date: NaiveDate,
        end_date: NaiveDate,
        policy: BusinessDayPolicy,
    ) -> Result<Self, EngineError> {
        Self::new(
            policy.day_start_millis(start_date),
            policy.day_end_millis(end_date) - 1,
        )
    }

    /// Window covering exactly one business day.
    pub fn single_business_day(date: NaiveDate, policy: BusinessDayPolicy) -> Self {
        Self {
            start: policy.day_start_millis(date),
            end: policy.day_end_millis(date) - 1,
        }
    }

    pub fn contains(&self, millis: i64) -> bool {
        self.start <= millis && millis <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc_millis(y: i32, m: u32, d: u32, h: u32, min: u32) -> i64 {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn test_day_key_utc_default() {
        let policy = BusinessDayPolicy::utc();
        let key = policy.day_key(utc_millis(2024, 3, 1, 10, 30)).unwrap();
        assert_eq!(key, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_day_key_cutoff_shifts_early_morning_to_previous_day() {
        let policy = BusinessDayPolicy::new(chrono_tz::UTC, parse_cutoff("06:00"));
        // 03:00 is still "yesterday" for a shop closing after midnight
        let key = policy.day_key(utc_millis(2024, 3, 2, 3, 0)).unwrap();
        assert_eq!(key, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        // 06:00 sharp belongs to the new business day
        let key = policy.day_key(utc_millis(2024, 3, 2, 6, 0)).unwrap();
        assert_eq!(key, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn test_day_key_respects_business_timezone() {
        let policy =
            BusinessDayPolicy::from_store_config("Europe/Madrid", "00:00").unwrap();
        // 23:30 UTC on March 1st is already March 2nd in Madrid (CET, +1)
        let key = policy.day_key(utc_millis(2024, 3, 1, 23, 30)).unwrap();
        assert_eq!(key, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn test_same_day_across_midnight() {
        let policy = BusinessDayPolicy::utc();
        assert!(policy.same_day(
            utc_millis(2024, 3, 1, 0, 0),
            utc_millis(2024, 3, 1, 23, 59)
        ));
        assert!(!policy.same_day(
            utc_millis(2024, 3, 1, 23, 59),
            utc_millis(2024, 3, 2, 0, 0)
        ));
    }

    #[test]
    fn test_from_store_config_rejects_unknown_timezone() {
        let err = BusinessDayPolicy::from_store_config("Mars/Olympus", "00:00");
        assert!(matches!(err, Err(EngineError::UnknownTimezone(_))));
    }

    #[test]
    fn test_parse_cutoff_falls_back_to_midnight() {
        assert_eq!(parse_cutoff("garbage"), NaiveTime::MIN);
        assert_eq!(
            parse_cutoff("06:30"),
            NaiveTime::from_hms_opt(6, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert!(matches!(
            parse_date("03/01/2024"),
            Err(EngineError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_time_range_rejects_inverted_bounds() {
        assert!(TimeRange::new(10, 5).is_err());
        assert!(TimeRange::new(5, 5).is_ok());
    }

    #[test]
    fn test_business_days_window_is_inclusive() {
        let policy = BusinessDayPolicy::utc();
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        let range = TimeRange::business_days(start, end, policy).unwrap();

        assert!(range.contains(utc_millis(2024, 3, 1, 0, 0)));
        assert!(range.contains(utc_millis(2024, 3, 3, 23, 59)));
        assert!(!range.contains(utc_millis(2024, 3, 4, 0, 0)));
    }
}
