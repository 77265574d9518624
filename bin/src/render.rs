//! Terminal rendering of dashboard views.

use cuenta::{
    DashboardView, MetricSet, Panel,
    dashboard::{Company, ComparisonTable, CompanySnapshot, GrowthPanel, PerformanceSnapshot},
    insights::{Insights, Outlier},
    metrics::{ValueFormat, format::format_value},
};

/// Shown in place of any null metric or empty series.
pub(crate) const NOT_AVAILABLE: &str = "data not available";

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const BOX_WIDTH: usize = 62;
const COLUMN_WIDTH: usize = 14;

/// Print a boxed page title.
pub(crate) fn header(title: &str) {
    println!("\n╔{}╗", "═".repeat(BOX_WIDTH));
    println!("║{:^width$}║", title, width = BOX_WIDTH);
    println!("╚{}╝\n", "═".repeat(BOX_WIDTH));
}

fn section(title: &str) {
    println!("{RULE}");
    println!("{title}");
    println!("{RULE}\n");
}

/// Print a full view.
pub(crate) fn print_view(view: &DashboardView) {
    header(&view.title);
    println!("{}", view.subtitle);
    let shown: Vec<String> = view.companies.iter().map(|c| company_title(&c.ticker, &c.name)).collect();
    println!("Companies: {}", shown.join(", "));
    for warning in &view.warnings {
        println!("Warning: {warning}");
    }
    println!();

    match &view.panel {
        Panel::Ratios { companies } | Panel::Valuation { companies } => {
            for company in companies {
                print_snapshot(company);
            }
        }
        Panel::Growth(panel) => print_growth(panel),
        Panel::Performance { companies } => {
            for company in companies {
                print_performance(company);
            }
        }
        Panel::Efficiency(panel) => {
            print_insights(&panel.insights);
            println!("Outliers: ▼ below normal range, ▲ above normal range\n");
            for table in &panel.tables {
                section(&table.label);
                if let Some(caption) = panel.insights.get(&table.label) {
                    println!("{caption}\n");
                }
                print_table(table);
            }
        }
    }
}

/// Metric lines: name, value and delta, `data not available` for nulls.
pub(crate) fn metric_lines(metrics: &MetricSet) -> Vec<String> {
    metrics
        .iter()
        .map(|metric| {
            if !metric.is_available() {
                return format!("{:<20} {}", metric.name, NOT_AVAILABLE);
            }
            match metric.formatted_delta() {
                Some(delta) => format!("{:<20} {:>16}   ({delta})", metric.name, metric.formatted_value()),
                None => format!("{:<20} {:>16}", metric.name, metric.formatted_value()),
            }
        })
        .collect()
}

/// `Name (TICKER)`, or just the ticker when it doubles as the name.
pub(crate) fn company_title(ticker: &str, name: &str) -> String {
    if name == ticker {
        ticker.to_string()
    } else {
        format!("{name} ({ticker})")
    }
}

/// A column heading that fits the table's cell width.
fn column_heading(company: &Company) -> String {
    if company.name.chars().count() <= COLUMN_WIDTH {
        company.name.clone()
    } else {
        company.name.chars().take(COLUMN_WIDTH - 1).chain(['…']).collect()
    }
}

fn print_snapshot(company: &CompanySnapshot) {
    section(&company_title(&company.ticker, &company.name));
    for line in metric_lines(&company.metrics) {
        println!("{line}");
    }
    println!();
    if let Some(insights) = &company.insights {
        print_insights(insights);
    }
}

fn print_insights(insights: &Insights) {
    if insights.is_empty() {
        return;
    }
    println!("Insights");
    println!("{}", "─".repeat(24));
    for (_, text) in insights.iter() {
        println!("• {text}");
    }
    println!();
}

fn print_growth(panel: &GrowthPanel) {
    for company in &panel.companies {
        section(&format!("{} growth", company_title(&company.ticker, &company.name)));
        for metric in &company.metrics {
            println!("{}", metric.label);
            if let Some(caption) = panel.captions.get(&metric.label) {
                println!("  {caption}");
            }
            match metric.growth.as_ref().filter(|g| !g.is_empty()) {
                Some(growth) => {
                    for (year, rate) in growth.iter() {
                        let rate = Some(rate).filter(|r| r.is_finite());
                        println!("  {year}  {:>10}", format_value(rate, ValueFormat::Percent, ""));
                    }
                }
                None => println!("  {NOT_AVAILABLE}"),
            }
            println!();
        }
    }

    for table in &panel.comparisons {
        section(&format!("{} comparison", table.label));
        print_table(table);
    }
}

fn print_performance(company: &PerformanceSnapshot) {
    section(&company_title(&company.ticker, &company.name));
    for line in metric_lines(&company.metrics) {
        println!("{line}");
    }
    match (company.prices.first(), company.prices.last()) {
        (Some(first), Some(last)) => println!(
            "\nPrices: {} closes, {} {:.2} → {} {:.2}",
            company.prices.len(),
            first.date,
            first.value,
            last.date,
            last.value
        ),
        _ => println!("\nPrices: {NOT_AVAILABLE}"),
    }
    println!();
}

/// Table lines: a Year column then one column per company.
pub(crate) fn table_lines(table: &ComparisonTable) -> Vec<String> {
    if table.is_empty() {
        return vec![NOT_AVAILABLE.to_string()];
    }

    let mut lines = Vec::with_capacity(table.rows.len() + 2);
    let mut head = format!("{:<6}", "Year");
    for company in &table.columns {
        head.push_str(&format!(" {:>14}", column_heading(company)));
    }
    lines.push(head);
    lines.push("─".repeat(6 + (COLUMN_WIDTH + 1) * table.columns.len()));

    for row in &table.rows {
        let mut line = format!("{:<6}", row.year);
        for cell in &row.cells {
            let marker = match cell.outlier {
                Some(Outlier::Low) => " ▼",
                Some(Outlier::High) => " ▲",
                Some(Outlier::Normal) | None => "",
            };
            let text = match cell.value {
                Some(v) => format!("{}{marker}", format_value(Some(v), table.format, "")),
                None => "-".to_string(),
            };
            line.push_str(&format!(" {text:>14}"));
        }
        lines.push(line);
    }
    lines
}

fn print_table(table: &ComparisonTable) {
    for line in table_lines(table) {
        println!("{line}");
    }
    println!();
}
