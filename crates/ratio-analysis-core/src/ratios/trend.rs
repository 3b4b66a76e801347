//! Year-over-year percentage change between two ratio sets.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::engine::{RatioKind, RatioName, RatioSet};

/// Signed percentage change (-10.39 means a 10.39% decline), or `None` when
/// no trend is available.
pub type TrendValue = Option<Decimal>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub ratio: RatioName,
    pub label: String,
    pub kind: RatioKind,
    pub current: Option<Decimal>,
    pub previous: Option<Decimal>,
    pub change_pct: TrendValue,
    pub direction: Option<TrendDirection>,
}

/// `(current / previous - 1) * 100` for one ratio.
///
/// Undefined when either value is missing, the previous value is zero, or
/// the result leaves the Decimal range. A current value of zero is a defined
/// -100% change, not a missing trend.
pub fn compute_trend(current: &RatioSet, previous: &RatioSet, name: RatioName) -> TrendValue {
    let cur = current.get(name)?;
    let prev = previous.get(name)?;
    if prev.is_zero() {
        return None;
    }
    cur.checked_div(prev)?
        .checked_sub(Decimal::ONE)?
        .checked_mul(dec!(100))
}

fn direction(change: Decimal) -> TrendDirection {
    if change > Decimal::ZERO {
        TrendDirection::Up
    } else if change < Decimal::ZERO {
        TrendDirection::Down
    } else {
        TrendDirection::Flat
    }
}

/// Trend for every ratio, in canonical order.
pub fn trend_report(current: &RatioSet, previous: &RatioSet) -> Vec<TrendLine> {
    RatioName::ALL
        .into_iter()
        .map(|name| {
            let change_pct = compute_trend(current, previous, name);
            TrendLine {
                ratio: name,
                label: name.label().to_string(),
                kind: name.kind(),
                current: current.get(name),
                previous: previous.get(name),
                change_pct,
                direction: change_pct.map(direction),
            }
        })
        .collect()
}
