//! Executive summary - plain-text or JSON cost report, no TUI
//!
//! Prints the real cost per ton of every scenario to stdout and exits. The
//! JSON form is a single array so scripts can consume it directly.

use std::io::{self, Write};

use soyroute_core::prelude::*;
use soyroute_core::{scenario_costs, ScenarioCost};

pub const SUMMARY_HEADER: &str = "=== RESUMO EXECUTIVO ===";

/// Output format of the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    Text,
    Json,
}

/// The text report: header followed by one line per scenario
pub fn render_text(costs: &[ScenarioCost]) -> String {
    let mut out = String::from(SUMMARY_HEADER);
    out.push('\n');
    for cost in costs {
        out.push_str(&cost.summary_line());
        out.push('\n');
    }
    out
}

pub fn render_json(costs: &[ScenarioCost]) -> Result<String> {
    Ok(serde_json::to_string_pretty(costs)?)
}

/// Write the summary to stdout
pub fn print(format: SummaryFormat) -> Result<()> {
    let costs = scenario_costs();
    let report = match format {
        SummaryFormat::Text => render_text(&costs),
        SummaryFormat::Json => {
            let mut json = render_json(&costs)?;
            json.push('\n');
            json
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()?;
    debug!("Printed {} scenario costs", costs.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soyroute_core::COST_VALUES;

    #[test]
    fn test_text_summary() {
        let text = render_text(&scenario_costs());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "=== RESUMO EXECUTIVO ===");
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "1. Melhor Cenário: R$ 180.00/ton");
        assert_eq!(lines[4], "4. Pior Cenário (Colapso): R$ 770.00/ton");
    }

    #[test]
    fn test_json_summary_matches_chart_values() {
        let json = render_json(&scenario_costs()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let totals: Vec<u64> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["total"].as_u64().unwrap())
            .collect();

        assert_eq!(totals, COST_VALUES.to_vec());
        assert_eq!(value[2]["failures"], 2);
        assert_eq!(value[0]["corridor"], "Norte");
    }
}
