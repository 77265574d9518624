//! Valuation multiples.
//!
//! Multiples are passed through from the provider's company info. Only PEG
//! has a local fallback, derived from the forward P/E and earnings growth.

use crate::{
    metric::{MetricSet, MetricValue, ValueFormat},
    names,
    registry::VALUATION_LABELS,
};
use cuenta_traits::{CompanyInfo, info_keys, stats::safe_div};

/// Unit suffix for currency amounts.
pub const CURRENCY_SUFFIX: &str = " USD";

/// Forward P/E over earnings growth expressed in percent.
///
/// Null when either input is missing or growth is zero.
pub fn forward_peg(info: &CompanyInfo) -> Option<f64> {
    let forward_pe = info.get(info_keys::FORWARD_PE)?;
    let growth = info.get(info_keys::EARNINGS_GROWTH)?;
    safe_div(forward_pe, growth * 100.0)
}

/// Compute the valuation set from company info.
pub fn calculate_valuation(info: &CompanyInfo) -> MetricSet {
    let passthrough = |name: &str, key: &str| MetricValue::new(name, info.get(key));
    let currency = |name: &str, key: &str| {
        passthrough(name, key)
            .with_format(ValueFormat::LargeNumber)
            .with_suffix(CURRENCY_SUFFIX)
    };

    let peg = info
        .get(info_keys::PEG_RATIO)
        .or_else(|| forward_peg(info));

    MetricSet::ordered(
        VALUATION_LABELS,
        vec![
            passthrough(names::TRAILING_PE, info_keys::TRAILING_PE),
            passthrough(names::FORWARD_PE, info_keys::FORWARD_PE),
            MetricValue::new(names::PEG_RATIO, peg),
            passthrough(names::PRICE_TO_BOOK, info_keys::PRICE_TO_BOOK),
            currency(names::ENTERPRISE_VALUE, info_keys::ENTERPRISE_VALUE),
            currency(names::MARKET_CAP, info_keys::MARKET_CAP),
            passthrough(names::EV_EBITDA, info_keys::EV_TO_EBITDA),
            passthrough(names::EV_REVENUE, info_keys::EV_TO_REVENUE),
        ],
    )
}
