#[cfg(test)]
mod tests {
    use chrono::Duration;
    use tasker::libs::formatter::{compact_duration, format_execution_time, parse_compact_duration};

    #[test]
    fn test_parse_full_duration() {
        let duration = parse_compact_duration("2h30m0s").unwrap();
        assert_eq!(duration, Duration::hours(2) + Duration::minutes(30));
    }

    #[test]
    fn test_parse_minutes_only() {
        let duration = parse_compact_duration("45m").unwrap();
        assert_eq!(duration, Duration::minutes(45));
    }

    #[test]
    fn test_parse_skips_missing_components() {
        let duration = parse_compact_duration("1h2s").unwrap();
        assert_eq!(duration, Duration::hours(1) + Duration::seconds(2));
    }

    #[test]
    fn test_parse_fractional_seconds_truncate() {
        let duration = parse_compact_duration("1m30.5s").unwrap();
        assert_eq!(duration, Duration::seconds(90));
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        let duration = parse_compact_duration("  45m0s  ").unwrap();
        assert_eq!(duration, Duration::minutes(45));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for raw in ["", "abc", "12", "1x", "2h30", "h", "1h!!", "30m2h"] {
            let err = parse_compact_duration(raw).unwrap_err();
            assert_eq!(err.to_string(), format!("не удалось распарсить строку времени: {}", raw));
        }
    }

    #[test]
    fn test_parse_rejects_repeated_components() {
        assert!(parse_compact_duration("1h2h").is_err());
        assert!(parse_compact_duration("5m5m").is_err());
    }

    #[test]
    fn test_format_minutes_only() {
        assert_eq!(format_execution_time("45m").unwrap(), "0 часов 45 минут 0 секунд");
    }

    #[test]
    fn test_format_full_duration() {
        assert_eq!(format_execution_time("2h30m0s").unwrap(), "2 часов 30 минут 0 секунд");
    }

    #[test]
    fn test_format_zero_duration() {
        assert_eq!(format_execution_time("0s").unwrap(), "0 часов 0 минут 0 секунд");
    }

    #[test]
    fn test_format_normalizes_overflowing_minutes() {
        assert_eq!(format_execution_time("90m").unwrap(), "1 часов 30 минут 0 секунд");
    }

    #[test]
    fn test_compact_duration_round_trip() {
        for seconds in [0, 30, 45 * 60, 2 * 3600 + 30 * 60, 2 * 3600 + 30] {
            let duration = Duration::seconds(seconds);
            let compact = compact_duration(&duration);
            assert_eq!(parse_compact_duration(&compact).unwrap(), duration);
        }
    }

    #[test]
    fn test_compact_duration_shapes() {
        assert_eq!(compact_duration(&Duration::zero()), "0s");
        assert_eq!(compact_duration(&Duration::seconds(30)), "30s");
        assert_eq!(compact_duration(&Duration::minutes(45)), "45m0s");
        assert_eq!(compact_duration(&(Duration::hours(2) + Duration::minutes(30))), "2h30m0s");
        assert_eq!(compact_duration(&(Duration::hours(2) + Duration::seconds(30))), "2h0m30s");
        assert_eq!(compact_duration(&Duration::seconds(-5)), "0s");
    }
}
