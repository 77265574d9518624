//! Display names of every metric, as they appear in metric sets and views.

// Core financial ratios
/// Net income over revenue.
pub const PROFIT_MARGIN: &str = "Profit Margin";
/// Return on equity.
pub const ROE: &str = "ROE";
/// Liabilities over stockholders' equity.
pub const DEBT_TO_EQUITY: &str = "Debt-to-Equity";
/// Current assets over current liabilities.
pub const CURRENT_RATIO: &str = "Current Ratio";
/// Current assets less inventory, over current liabilities.
pub const QUICK_RATIO: &str = "Quick Ratio";

// Growth metrics
/// Revenue growth.
pub const TOTAL_REVENUE: &str = "Total Revenue";
/// Net income growth.
pub const NET_INCOME: &str = "Net Income";
/// Diluted EPS growth.
pub const DILUTED_EPS: &str = "Diluted EPS";
/// Free cash flow growth.
pub const FREE_CASH_FLOW: &str = "Free Cash Flow";

// Valuation metrics
/// Trailing price to earnings.
pub const TRAILING_PE: &str = "Trailing P/E";
/// Forward price to earnings.
pub const FORWARD_PE: &str = "Forward P/E";
/// Price/earnings to growth.
pub const PEG_RATIO: &str = "PEG Ratio";
/// Price to book value.
pub const PRICE_TO_BOOK: &str = "Price-to-Book";
/// Enterprise value.
pub const ENTERPRISE_VALUE: &str = "Enterprise Value";
/// Market capitalization.
pub const MARKET_CAP: &str = "Market Cap";
/// Enterprise value over EBITDA.
pub const EV_EBITDA: &str = "EV/EBITDA";
/// Enterprise value over revenue.
pub const EV_REVENUE: &str = "EV/Revenue";

// Stock performance metrics
/// Standard deviation of daily returns.
pub const VOLATILITY: &str = "Volatility";
/// Excess daily return per unit of volatility.
pub const SHARPE_RATIO: &str = "Sharpe Ratio";
/// Largest peak-to-trough decline.
pub const MAX_DRAWDOWN: &str = "Max Drawdown";
/// Last close over first close, less one.
pub const CUMULATIVE_RETURN: &str = "Cumulative Return";

// Cash flow & efficiency metrics
/// Free cash flow per fiscal year.
pub const FREE_CASH_FLOWS: &str = "Free Cash Flows";
/// Free cash flow over revenue.
pub const FCF_MARGIN: &str = "FCF Margin";
/// Operating income over revenue.
pub const OPERATING_MARGIN: &str = "Operating Margin";
/// Revenue over total assets.
pub const ASSET_TURNOVER: &str = "Asset Turnover";
/// EBIT over interest expense.
pub const INTEREST_COVERAGE: &str = "Interest Coverage";
