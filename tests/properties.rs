//! Property tests for schedule decoding and pay calculation.

use proptest::prelude::*;

use pay_calculator::calculation::{calculate_interval_pay, calculate_total_pay};
use pay_calculator::config::PayrollConfig;
use pay_calculator::error::PayrollError;
use pay_calculator::models::{DAY_CODES, decode_interval};

const MAX_RATE: u64 = 30;

/// A valid `(code, start_minutes, end_minutes)` with end after start.
fn valid_interval() -> impl Strategy<Value = (usize, u32, u32)> {
    (0..DAY_CODES.len(), 0u32..1439)
        .prop_flat_map(|(day, start)| (Just(day), Just(start), start + 1..1440))
}

fn hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn token(day: usize, start: u32, end: u32) -> String {
    format!("{}{}-{}", DAY_CODES[day].0, hhmm(start), hhmm(end))
}

proptest! {
    #[test]
    fn decoded_day_number_matches_code_table((day, start, end) in valid_interval()) {
        let interval = decode_interval(&token(day, start, end)).unwrap();
        prop_assert_eq!(interval.day_number(), day as u32 + 1);
        prop_assert!((1..=7).contains(&interval.day_number()));
    }

    #[test]
    fn pay_truncates_to_whole_hours((day, start, end) in valid_interval()) {
        let interval = decode_interval(&token(day, start, end)).unwrap();
        let result = calculate_interval_pay(&interval, &PayrollConfig::default());

        prop_assert_eq!(result.hours, (end - start) / 60);
        prop_assert_eq!(result.amount, u64::from(result.hours) * u64::from(result.rate));
        prop_assert!(result.amount <= u64::from(result.hours) * MAX_RATE);
    }

    #[test]
    fn total_is_deterministic(intervals in prop::collection::vec(valid_interval(), 1..8)) {
        let tokens: Vec<String> = intervals.iter().map(|&(d, s, e)| token(d, s, e)).collect();
        let line = format!("EMPLOYEE={}", tokens.join(","));
        let config = PayrollConfig::default();

        let first = calculate_total_pay(&line, &config).unwrap();
        let second = calculate_total_pay(&line, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unknown_day_codes_are_rejected(code in "[A-Z]{2}", (_, start, end) in valid_interval()) {
        prop_assume!(DAY_CODES.iter().all(|(known, _)| *known != code));
        let raw = format!("{}{}-{}", code, hhmm(start), hhmm(end));

        let is_unknown_day = matches!(decode_interval(&raw), Err(PayrollError::UnknownDay { .. }));
        prop_assert!(is_unknown_day);
    }

    #[test]
    fn missing_dash_is_input_format((day, start, end) in valid_interval()) {
        let raw = format!("{}{}{}", DAY_CODES[day].0, hhmm(start), hhmm(end));

        let is_input_format = matches!(decode_interval(&raw), Err(PayrollError::InputFormat { .. }));
        prop_assert!(is_input_format);
    }

    #[test]
    fn missing_equals_is_input_format(name in "[A-Z]{1,8}", (day, start, end) in valid_interval()) {
        let line = format!("{}{}", name, token(day, start, end));

        let result = calculate_total_pay(&line, &PayrollConfig::default());
        let is_input_format = matches!(result, Err(PayrollError::InputFormat { .. }));
        prop_assert!(is_input_format);
    }
}
