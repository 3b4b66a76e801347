//! Human-readable rendering of ratio values and trends.

use ratio_analysis_core::ratios::RatioKind;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const UNDEFINED: &str = "-";

/// Render a ratio according to its kind. Undefined values render as "-".
pub fn format_ratio(value: Option<Decimal>, kind: RatioKind) -> String {
    let Some(v) = value else {
        return UNDEFINED.to_string();
    };
    match kind {
        RatioKind::Percent => match v.checked_mul(dec!(100)) {
            Some(pct) => format!("{:.1}%", pct.round_dp(1)),
            None => UNDEFINED.to_string(),
        },
        RatioKind::Multiple => format!("{:.2}", v.round_dp(2)),
        RatioKind::Money => group_thousands(v.round()),
    }
}

/// Render a year-over-year change with a direction arrow.
pub fn format_trend(change_pct: Option<Decimal>) -> String {
    match change_pct {
        None => UNDEFINED.to_string(),
        Some(c) if c.is_sign_negative() && !c.is_zero() => format!("▼ {:.1}%", c.abs().round_dp(1)),
        Some(c) => format!("▲ {:.1}%", c.round_dp(1)),
    }
}

fn group_thousands(v: Decimal) -> String {
    let digits = v.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if v.is_sign_negative() && !v.is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rendering() {
        assert_eq!(format_ratio(Some(dec!(0.0899)), RatioKind::Percent), "9.0%");
        assert_eq!(format_ratio(Some(dec!(0.5707)), RatioKind::Percent), "57.1%");
    }

    #[test]
    fn test_multiple_rendering() {
        assert_eq!(format_ratio(Some(dec!(11.1238)), RatioKind::Multiple), "11.12");
    }

    #[test]
    fn test_money_rendering() {
        assert_eq!(format_ratio(Some(dec!(-1027674)), RatioKind::Money), "-1,027,674");
        assert_eq!(format_ratio(Some(dec!(512.6)), RatioKind::Money), "513");
        assert_eq!(format_ratio(Some(dec!(0)), RatioKind::Money), "0");
    }

    #[test]
    fn test_out_of_range_percent_rendering() {
        assert_eq!(format_ratio(Some(Decimal::MAX), RatioKind::Percent), "-");
    }

    #[test]
    fn test_undefined_rendering() {
        assert_eq!(format_ratio(None, RatioKind::Percent), "-");
        assert_eq!(format_trend(None), "-");
    }

    #[test]
    fn test_trend_arrows() {
        assert_eq!(format_trend(Some(dec!(-10.3888))), "▼ 10.4%");
        assert_eq!(format_trend(Some(dec!(15.563))), "▲ 15.6%");
        assert_eq!(format_trend(Some(dec!(0))), "▲ 0.0%");
    }
}
