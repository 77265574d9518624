use approx::assert_relative_eq;
use async_trait::async_trait;
use cuenta::{
    CompanyInfo, CuentaError, Dashboard, DashboardConfig, DashboardRequest, DisplayMode,
    FinancialStatements, FundamentalsProvider, Panel, PriceHistory, Result,
    insights::Outlier,
    metrics::names,
    traits::{Date, StatementTable, info_keys},
};
use std::collections::HashMap;

#[derive(Default)]
struct Company {
    statements: FinancialStatements,
    prices: Vec<(Date, f64)>,
    info: CompanyInfo,
}

#[derive(Default)]
struct Memory {
    companies: HashMap<String, Company>,
}

#[async_trait]
impl FundamentalsProvider for Memory {
    fn name(&self) -> &str {
        "memory"
    }

    async fn statements(&self, symbol: &str) -> Result<FinancialStatements> {
        if symbol == "DOWN" {
            return Err(CuentaError::DataFetch("HTTP 500".into()));
        }
        self.companies
            .get(symbol)
            .map(|c| c.statements.clone())
            .ok_or_else(|| CuentaError::SymbolNotFound(symbol.into()))
    }

    async fn price_history(&self, symbol: &str, _days: u32) -> Result<PriceHistory> {
        let company = self
            .companies
            .get(symbol)
            .ok_or_else(|| CuentaError::SymbolNotFound(symbol.into()))?;
        PriceHistory::from_points(&company.prices)
    }

    async fn company_info(&self, symbol: &str) -> Result<CompanyInfo> {
        self.companies
            .get(symbol)
            .map(|c| c.info.clone())
            .ok_or_else(|| CuentaError::SymbolNotFound(symbol.into()))
    }

    async fn ticker_exists(&self, symbol: &str) -> Result<bool> {
        Ok(symbol == "DOWN" || self.companies.contains_key(symbol))
    }
}

fn year_end(year: i32) -> Date {
    Date::from_ymd_opt(year, 12, 31).unwrap()
}

fn table(years: &[i32], rows: &[(&str, &[f64])]) -> StatementTable {
    let mut t = StatementTable::new(years.iter().map(|y| year_end(*y)).collect()).unwrap();
    for (label, values) in rows {
        t.insert_row(*label, values.iter().map(|v| Some(*v)).collect()).unwrap();
    }
    t
}

/// Three fiscal years, most recent first, with revenue growing 10% a year.
fn steady(scale: f64) -> Company {
    let years = [2024, 2023, 2022];
    let s = |v: &[f64]| v.iter().map(|x| x * scale).collect::<Vec<_>>();
    let revenue = s(&[121.0, 110.0, 100.0]);
    let net_income = s(&[30.25, 22.0, 18.0]);
    let operating = s(&[30.0, 25.0, 20.0]);
    let assets = s(&[200.0, 190.0, 180.0]);
    let equity = s(&[100.0, 100.0, 90.0]);
    let liabilities = s(&[40.0, 50.0, 60.0]);
    let current_assets = s(&[60.0, 55.0, 50.0]);
    let current_liabilities = s(&[20.0, 25.0, 25.0]);
    let inventory = s(&[10.0, 10.0, 10.0]);
    let ocf = s(&[35.0, 30.0, 25.0]);
    let capex = s(&[-5.0, -5.0, -5.0]);

    Company {
        statements: FinancialStatements {
            income: table(
                &years,
                &[
                    ("Total Revenue", &revenue),
                    ("Net Income", &net_income),
                    ("Operating Income", &operating),
                    ("EBIT", &operating),
                    ("Interest Expense", &[2.0, 2.0, 2.0]),
                    ("Diluted EPS", &[2.42, 2.0, 1.8]),
                ],
            ),
            balance: table(
                &years,
                &[
                    ("Total Assets", &assets),
                    ("Stockholders Equity", &equity),
                    ("Total Liabilities", &liabilities),
                    ("Total Current Assets", &current_assets),
                    ("Current Liabilities", &current_liabilities),
                    ("Inventory", &inventory),
                ],
            ),
            cash_flow: table(
                &years,
                &[("Operating Cash Flow", &ocf), ("Capital Expenditure", &capex)],
            ),
        },
        prices: vec![
            (Date::from_ymd_opt(2024, 1, 2).unwrap(), 10.0),
            (Date::from_ymd_opt(2024, 1, 3).unwrap(), 11.0),
            (Date::from_ymd_opt(2024, 1, 4).unwrap(), 9.0),
            (Date::from_ymd_opt(2024, 1, 5).unwrap(), 12.0),
        ],
        info: CompanyInfo::new()
            .with_short_name("Steady Corp")
            .with(info_keys::FORWARD_PE, 20.0)
            .with(info_keys::EARNINGS_GROWTH, 0.10)
            .with(info_keys::MARKET_CAP, 5e9 * scale),
    }
}

fn dashboard() -> Dashboard<Memory> {
    let mut memory = Memory::default();
    memory.companies.insert("AAA".into(), steady(1.0));
    memory.companies.insert("BBB".into(), steady(2.0));
    memory.companies.insert("CCC".into(), steady(3.0));
    memory.companies.insert("DDD".into(), steady(4.0));
    memory.companies.insert("EEE".into(), steady(5.0));
    let bare = Company {
        info: CompanyInfo::new().with_short_name("Bare Inc"),
        ..Default::default()
    };
    memory.companies.insert("NEW".into(), bare);
    let unnamed = Company {
        info: CompanyInfo::new(),
        ..steady(1.0)
    };
    memory.companies.insert("ANON".into(), unnamed);
    Dashboard::new(memory, DashboardConfig::default())
}

#[tokio::test]
async fn single_ticker_ratios_carry_insights() {
    let view = dashboard()
        .render(&DashboardRequest::new("aaa", DisplayMode::Ratios))
        .await
        .unwrap();

    assert_eq!(view.tickers, vec!["AAA"]);
    assert!(view.warnings.is_empty());
    let Panel::Ratios { companies } = &view.panel else {
        panic!("expected ratios panel");
    };
    let aaa = &companies[0];
    assert_eq!(aaa.name, "Steady Corp");
    assert_relative_eq!(aaa.metrics.value(names::PROFIT_MARGIN).unwrap(), 0.25, epsilon = 1e-12);
    assert_relative_eq!(aaa.metrics.value(names::QUICK_RATIO).unwrap(), 2.5, epsilon = 1e-12);

    let insights = aaa.insights.as_ref().unwrap();
    assert!(insights.get(names::PROFIT_MARGIN).unwrap().starts_with("High Profit Margin"));
    assert!(insights.get(names::DEBT_TO_EQUITY).unwrap().starts_with("Low Debt-to-Equity"));
}

#[tokio::test]
async fn compared_ratios_have_no_insights() {
    let request = DashboardRequest::new("AAA", DisplayMode::Ratios).with_compare("bbb");
    let view = dashboard().render(&request).await.unwrap();

    let Panel::Ratios { companies } = &view.panel else {
        panic!("expected ratios panel");
    };
    assert_eq!(companies.len(), 2);
    assert_eq!(companies[1].ticker, "BBB");
    assert!(companies.iter().all(|c| c.insights.is_none()));
}

#[tokio::test]
async fn unknown_primary_is_an_error() {
    let dash = dashboard();
    let err = dash
        .render(&DashboardRequest::new("ZZZZ", DisplayMode::Ratios))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let err = dash
        .render(&DashboardRequest::new("  ", DisplayMode::Growth))
        .await
        .unwrap_err();
    assert!(matches!(err, CuentaError::SymbolNotFound(_)));
}

#[tokio::test]
async fn unknown_compare_ticker_is_dropped_with_warning() {
    let request = DashboardRequest::new("AAA", DisplayMode::Valuation).with_compare("ZZZZ");
    let view = dashboard().render(&request).await.unwrap();

    assert_eq!(view.tickers, vec!["AAA"]);
    assert_eq!(view.warnings.len(), 1);
    assert!(view.warnings[0].contains("ZZZZ"));
}

#[tokio::test]
async fn every_mode_labels_companies_by_name() {
    let dash = dashboard();
    for mode in DisplayMode::ALL {
        let request = DashboardRequest::new("AAA", mode).with_compare("ANON");
        let view = dash.render(&request).await.unwrap();

        let names: Vec<&str> = view.companies.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Steady Corp", "ANON"], "{mode}");

        let shown: Vec<&str> = match &view.panel {
            Panel::Ratios { companies } | Panel::Valuation { companies } => {
                companies.iter().map(|c| c.name.as_str()).collect()
            }
            Panel::Growth(panel) => panel.companies.iter().map(|c| c.name.as_str()).collect(),
            Panel::Performance { companies } => companies.iter().map(|c| c.name.as_str()).collect(),
            Panel::Efficiency(panel) => panel.tables[0].columns.iter().map(|c| c.name.as_str()).collect(),
        };
        assert_eq!(shown, vec!["Steady Corp", "ANON"], "{mode}");
    }
}

#[tokio::test]
async fn provider_failure_propagates() {
    let request = DashboardRequest::new("DOWN", DisplayMode::Ratios);
    let err = dashboard().render(&request).await.unwrap_err();
    assert!(matches!(err, CuentaError::DataFetch(_)));
}

#[tokio::test]
async fn valuation_uses_peg_fallback() {
    let view = dashboard()
        .render(&DashboardRequest::new("AAA", DisplayMode::Valuation))
        .await
        .unwrap();

    let Panel::Valuation { companies } = &view.panel else {
        panic!("expected valuation panel");
    };
    let aaa = &companies[0];
    assert_eq!(aaa.name, "Steady Corp");
    assert_relative_eq!(aaa.metrics.value(names::PEG_RATIO).unwrap(), 2.0, epsilon = 1e-12);
    assert_eq!(aaa.metrics.get(names::MARKET_CAP).unwrap().formatted_value(), "5.00B USD");
    assert!(aaa.metrics.value(names::TRAILING_PE).is_none());

    let insights = aaa.insights.as_ref().unwrap();
    assert!(insights.get(names::PEG_RATIO).unwrap().starts_with("Overvalued"));
    assert!(insights.get(names::MARKET_CAP).unwrap().starts_with("Mid-Cap"));
    assert!(insights.get(names::TRAILING_PE).is_none());
}

#[tokio::test]
async fn growth_compares_on_common_years() {
    let request = DashboardRequest::new("AAA", DisplayMode::Growth).with_compare("BBB");
    let view = dashboard().render(&request).await.unwrap();

    let Panel::Growth(panel) = &view.panel else {
        panic!("expected growth panel");
    };
    let revenue = &panel.companies[0].metrics[0];
    assert_eq!(revenue.label, names::TOTAL_REVENUE);
    let growth = revenue.growth.as_ref().unwrap();
    assert_eq!(growth.years(), vec![2023, 2024]);
    for rate in growth.values() {
        assert_relative_eq!(rate, 0.10, epsilon = 1e-12);
    }

    assert_eq!(panel.captions.len(), 4);
    assert_eq!(panel.comparisons.len(), 4);
    let table = &panel.comparisons[0];
    let columns: Vec<_> = table.columns.iter().map(|c| c.ticker.as_str()).collect();
    assert_eq!(columns, vec!["AAA", "BBB"]);
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[0].cells[1].value, Some(200.0));
}

#[tokio::test]
async fn growth_without_statements_is_unavailable() {
    let request = DashboardRequest::new("NEW", DisplayMode::Growth).with_compare("AAA");
    let view = dashboard().render(&request).await.unwrap();

    let Panel::Growth(panel) = &view.panel else {
        panic!("expected growth panel");
    };
    assert!(panel.companies[0].metrics.iter().all(|m| !m.is_available()));
    assert!(panel.comparisons.is_empty());
}

#[tokio::test]
async fn performance_series_and_metrics() {
    let view = dashboard()
        .render(&DashboardRequest::new("AAA", DisplayMode::Performance))
        .await
        .unwrap();

    let Panel::Performance { companies } = &view.panel else {
        panic!("expected performance panel");
    };
    let aaa = &companies[0];
    assert_relative_eq!(aaa.metrics.value(names::CUMULATIVE_RETURN).unwrap(), 0.20, epsilon = 1e-12);
    assert_relative_eq!(aaa.metrics.value(names::MAX_DRAWDOWN).unwrap(), -2.0 / 11.0, epsilon = 1e-12);
    assert_eq!(aaa.prices.len(), 4);
    assert_relative_eq!(aaa.cumulative_returns[3].value, 0.20, epsilon = 1e-12);
}

#[tokio::test]
async fn extra_tickers_only_in_efficiency() {
    let request = DashboardRequest::new("AAA", DisplayMode::Ratios)
        .with_compare("BBB")
        .with_extra(["CCC"]);
    let view = dashboard().render(&request).await.unwrap();
    assert_eq!(view.tickers, vec!["AAA", "BBB"]);
    assert_eq!(view.warnings.len(), 1);
    assert!(view.warnings[0].contains("CCC"));
}

#[tokio::test]
async fn efficiency_compares_up_to_four_companies() {
    let request = DashboardRequest::new("AAA", DisplayMode::Efficiency)
        .with_compare("BBB")
        .with_extra(["CCC", "ZZZZ", "DDD", "EEE"]);
    let view = dashboard().render(&request).await.unwrap();

    assert_eq!(view.tickers, vec!["AAA", "BBB", "CCC", "DDD"]);
    assert_eq!(view.warnings.len(), 2);

    let Panel::Efficiency(panel) = &view.panel else {
        panic!("expected efficiency panel");
    };
    assert_eq!(panel.tables.len(), 5);

    let fcf = &panel.tables[0];
    assert_eq!(fcf.label, names::FREE_CASH_FLOWS);
    assert_eq!(fcf.columns.len(), 4);
    assert!(fcf.columns.iter().all(|c| c.name == "Steady Corp"));
    assert_eq!(fcf.rows.last().unwrap().cells[0].value, Some(30.0));
    assert!(fcf.rows[0].cells[0].outlier.is_none());

    // Operating margin 30 / 121 is inside [0.10, 0.35]
    let margin = panel.tables.iter().find(|t| t.label == names::OPERATING_MARGIN).unwrap();
    assert_eq!(margin.rows.last().unwrap().cells[0].outlier, Some(Outlier::Normal));

    assert!(panel.insights.get(names::FREE_CASH_FLOWS).unwrap().starts_with("Positive"));
}

#[tokio::test]
async fn view_serializes_to_json() {
    let view = dashboard()
        .render(&DashboardRequest::new("AAA", DisplayMode::Ratios))
        .await
        .unwrap();
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["panel"]["kind"], "ratios");
    assert_eq!(json["tickers"][0], "AAA");
    assert_eq!(json["panel"]["companies"][0]["name"], "Steady Corp");
    assert!(json["panel"]["companies"][0]["insights"]["Profit Margin"].is_string());
}
