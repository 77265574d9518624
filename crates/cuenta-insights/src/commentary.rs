//! Threshold commentary per display mode.

use crate::tiers::{Bound, Tiers};
use cuenta_metrics::{EfficiencyMetrics, MetricSet, names};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Commentary keyed by metric name. Metrics without commentary are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Insights(BTreeMap<String, String>);

impl Insights {
    /// Commentary for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there is no commentary at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(name, commentary)` in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn annotate(&mut self, name: &str, value: Option<f64>, tiers: &Tiers) {
        if let Some(v) = value.filter(|v| v.is_finite()) {
            self.0.insert(name.to_string(), tiers.classify(v).to_string());
        }
    }

    fn insert(&mut self, name: &str, text: &str) {
        self.0.insert(name.to_string(), text.to_string());
    }
}

const PROFIT_MARGIN: Tiers = Tiers {
    tiers: &[
        (Bound::AtLeast(0.2), "High Profit Margin: The company is very efficient at converting revenue into actual profit."),
        (Bound::AtLeast(0.1), "Moderate Profit Margin: The company has a decent level of profitability."),
        (Bound::Above(0.0), "Low Profit Margin: The company is barely profitable and may struggle to cover costs."),
    ],
    otherwise: "Negative Profit Margin: The company is operating at a loss.",
};

const ROE: Tiers = Tiers {
    tiers: &[
        (Bound::AtLeast(0.15), "Strong ROE: The company is effectively using shareholders' equity to generate profits."),
        (Bound::AtLeast(0.1), "Average ROE: The company has a reasonable return on equity."),
        (Bound::Above(0.0), "Weak ROE: The company is generating low returns on shareholders' equity."),
    ],
    otherwise: "Negative ROE: The company is not generating profits from shareholders' equity.",
};

const DEBT_TO_EQUITY: Tiers = Tiers {
    tiers: &[
        (Bound::Below(0.5), "Low Debt-to-Equity: The company has a conservative capital structure with low reliance on debt."),
        (Bound::Below(1.0), "Moderate Debt-to-Equity: The company has a balanced approach to using debt and equity for financing."),
    ],
    otherwise: "High Debt-to-Equity: The company is heavily reliant on debt, which may increase financial risk.",
};

const CURRENT_RATIO: Tiers = Tiers {
    tiers: &[
        (Bound::AtLeast(2.0), "Strong Current Ratio: The company has a strong ability to cover its short-term liabilities with short-term assets."),
        (Bound::AtLeast(1.0), "Adequate Current Ratio: The company can meet its short-term obligations, but may face liquidity issues."),
    ],
    otherwise: "Weak Current Ratio: The company may struggle to cover its short-term liabilities, indicating potential liquidity problems.",
};

const QUICK_RATIO: Tiers = Tiers {
    tiers: &[
        (Bound::AtLeast(1.0), "Strong Quick Ratio: The company has a solid liquidity position, able to cover short-term liabilities without relying on inventory."),
        (Bound::AtLeast(0.5), "Adequate Quick Ratio: The company can meet its short-term obligations, but may face liquidity issues if inventory cannot be quickly converted to cash."),
    ],
    otherwise: "Weak Quick Ratio: The company may struggle to cover its short-term liabilities, indicating potential liquidity problems.",
};

const PEG_RATIO: Tiers = Tiers {
    tiers: &[
        (Bound::Below(1.0), "Undervalued: The stock price looks low relative to its expected earnings growth."),
        (Bound::Below(2.0), "Fairly Valued: The stock price is in line with its expected earnings growth."),
    ],
    otherwise: "Overvalued: The stock price looks high relative to its expected earnings growth.",
};

const MARKET_CAP: Tiers = Tiers {
    tiers: &[
        (Bound::Below(300e6), "Micro-Cap: A very small company; shares can be volatile and thinly traded."),
        (Bound::Below(2e9), "Small-Cap: A smaller company with room to grow and higher risk."),
        (Bound::Below(10e9), "Mid-Cap: An established company balancing growth and stability."),
        (Bound::Below(200e9), "Large-Cap: A large, established company with a stable market position."),
    ],
    otherwise: "Mega-Cap: One of the largest companies in the market.",
};

const FREE_CASH_FLOWS: Tiers = Tiers {
    tiers: &[(Bound::Above(0.0), "Positive Free Cash Flow: Operations fund capital spending with cash to spare.")],
    otherwise: "Negative Free Cash Flow: Capital spending exceeds the cash generated by operations.",
};

const FCF_MARGIN: Tiers = Tiers {
    tiers: &[
        (Bound::AtLeast(0.15), "Strong FCF Margin: A large share of revenue turns into free cash."),
        (Bound::AtLeast(0.05), "Healthy FCF Margin: The company converts a reasonable share of revenue into free cash."),
        (Bound::Above(0.0), "Thin FCF Margin: Little of each sale is left over as free cash."),
    ],
    otherwise: "Negative FCF Margin: The company spends more cash than its revenue brings in.",
};

const OPERATING_MARGIN: Tiers = Tiers {
    tiers: &[
        (Bound::AtLeast(0.2), "High Operating Margin: Core operations are very profitable."),
        (Bound::AtLeast(0.1), "Moderate Operating Margin: Core operations are reasonably profitable."),
        (Bound::Above(0.0), "Low Operating Margin: Core operations are barely profitable."),
    ],
    otherwise: "Negative Operating Margin: Core operations are losing money.",
};

const ASSET_TURNOVER: Tiers = Tiers {
    tiers: &[
        (Bound::AtLeast(1.0), "Efficient Asset Use: Each dollar of assets generates more than a dollar of revenue."),
        (Bound::AtLeast(0.5), "Moderate Asset Use: Assets generate a reasonable level of revenue."),
    ],
    otherwise: "Low Asset Turnover: The asset base generates relatively little revenue.",
};

const INTEREST_COVERAGE: Tiers = Tiers {
    tiers: &[
        (Bound::AtLeast(5.0), "Comfortable Interest Coverage: Earnings cover interest payments several times over."),
        (Bound::AtLeast(1.5), "Adequate Interest Coverage: Earnings cover interest payments with a modest cushion."),
    ],
    otherwise: "Strained Interest Coverage: Earnings barely cover, or fail to cover, interest payments.",
};

/// Commentary for the core ratio set.
pub fn ratio_insights(ratios: &MetricSet) -> Insights {
    let mut insights = Insights::default();
    for (name, tiers) in [
        (names::PROFIT_MARGIN, &PROFIT_MARGIN),
        (names::ROE, &ROE),
        (names::DEBT_TO_EQUITY, &DEBT_TO_EQUITY),
        (names::CURRENT_RATIO, &CURRENT_RATIO),
        (names::QUICK_RATIO, &QUICK_RATIO),
    ] {
        insights.annotate(name, ratios.value(name), tiers);
    }
    insights
}

/// Commentary for the valuation set (PEG and market cap).
pub fn valuation_insights(valuation: &MetricSet) -> Insights {
    let mut insights = Insights::default();
    insights.annotate(names::PEG_RATIO, valuation.value(names::PEG_RATIO), &PEG_RATIO);
    insights.annotate(names::MARKET_CAP, valuation.value(names::MARKET_CAP), &MARKET_CAP);
    insights
}

/// Static captions explaining each growth label.
///
/// Labels without a caption are skipped.
pub fn growth_insights(labels: &[&str]) -> Insights {
    let mut insights = Insights::default();
    for label in labels {
        let caption = match *label {
            names::TOTAL_REVENUE => {
                "Revenue growth shows how quickly sales are expanding year over year."
            }
            names::NET_INCOME => {
                "Net income growth tracks whether profits keep pace with the business."
            }
            names::DILUTED_EPS => {
                "Diluted EPS growth reflects profit growth per share, after dilution."
            }
            names::FREE_CASH_FLOW => {
                "Free cash flow growth shows whether cash left after capital spending is rising."
            }
            _ => continue,
        };
        insights.insert(label, caption);
    }
    insights
}

/// Commentary for the efficiency series, based on each series' latest year.
pub fn efficiency_insights(metrics: &EfficiencyMetrics) -> Insights {
    let mut insights = Insights::default();
    for (name, tiers) in [
        (names::FREE_CASH_FLOWS, &FREE_CASH_FLOWS),
        (names::FCF_MARGIN, &FCF_MARGIN),
        (names::OPERATING_MARGIN, &OPERATING_MARGIN),
        (names::ASSET_TURNOVER, &ASSET_TURNOVER),
        (names::INTEREST_COVERAGE, &INTEREST_COVERAGE),
    ] {
        insights.annotate(name, metrics.latest(name).map(|(_, v)| v), tiers);
    }
    insights
}
