//! Shapes ledger summaries into the searchable table and the spent chart.

use cfm_ledger::BudgetSummary;
use cfm_widgets::chart::{create_chart, BarChartConfig};
use cfm_widgets::format::format_amount;
use cfm_widgets::table_filter::Table;

/// Column headers of the budget table.
pub const HEADERS: [&str; 5] = ["Category", "Budget", "Spent", "Remaining", "Status"];

/// One row per category, amounts formatted for display.
pub fn summary_table(summaries: &[BudgetSummary]) -> Table {
    let mut table = Table::new(HEADERS.iter().map(|h| h.to_string()).collect());
    for s in summaries {
        table.push_row(vec![
            s.name.clone(),
            format_amount(s.budget),
            format_amount(s.spent),
            format_amount(s.remaining),
            s.status.as_str().to_string(),
        ]);
    }
    table
}

/// Spent amount per category as a bar chart.
pub fn spent_chart(summaries: &[BudgetSummary]) -> BarChartConfig {
    let labels = summaries.iter().map(|s| s.name.clone()).collect();
    let data = summaries.iter().map(|s| s.spent).collect();
    create_chart(labels, data)
}
