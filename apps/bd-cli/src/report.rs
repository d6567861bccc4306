//! Plain-text tables for terminal output.

use bd_analysis::{ScenarioComparison, SweepResult};
use std::fmt::Write;

const RULE_WIDTH: usize = 70;

/// Scenario lifetime table; unreached EOL is shown as `>{horizon}`.
pub fn comparison_table(comparison: &ScenarioComparison, cycles_per_day: f64) -> String {
    let mut out = String::new();
    let horizon_cycles = comparison.max_years as f64 * 365.0 * cycles_per_day;

    let _ = writeln!(out, "Lifetime Comparison");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(
        out,
        "{:<25} {:<15} {:<15} EOL Cycles",
        "Scenario", "Temperature", "EOL Years"
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

    for outcome in comparison.iter() {
        let years = match outcome.eol_years() {
            Some(y) => format!("{y:.1}"),
            None => format!(">{}", comparison.max_years),
        };
        let cycles = match outcome.eol_cycles() {
            Some(n) => format!("{n:.0}"),
            None => format!(">{horizon_cycles:.0}"),
        };
        let _ = writeln!(
            out,
            "{:<25} {:<15.1} {:<15} {}",
            outcome.name, outcome.temperature_c, years, cycles
        );
    }

    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    out
}

/// Two-column table of a sweep, with DoD shown in percent.
pub fn sweep_table(result: &SweepResult) -> String {
    let mut out = String::new();
    let scale = result.variable.display_scale();

    let _ = writeln!(out, "{} sweep", result.variable);
    if let Some(t) = result.fixed_temperature_c {
        let _ = writeln!(out, "(fixed temperature {t:.1} °C)");
    }
    let _ = writeln!(out, "{:<25} {}", result.variable.axis_label(), result.fade_label());
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    for (x, fade) in result.points() {
        let _ = writeln!(out, "{:<25.2} {:.2}", x * scale, fade);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bd_analysis::{EolResult, ScenarioOutcome, SweepVariable};

    #[test]
    fn unreached_eol_shows_horizon() {
        let comparison = ScenarioComparison {
            eol_threshold: 0.8,
            max_years: 30,
            outcomes: vec![
                ScenarioOutcome {
                    name: "Reached".into(),
                    temperature_c: 45.0,
                    eol: EolResult::WithinHorizon {
                        time_days: 3650.0,
                        cycles: 3650.0,
                    },
                },
                ScenarioOutcome {
                    name: "Idle".into(),
                    temperature_c: 10.0,
                    eol: EolResult::NotReached { horizon_years: 30 },
                },
            ],
        };
        let table = comparison_table(&comparison, 1.0);
        let lines: Vec<_> = table.lines().collect();
        assert!(lines[4].starts_with("Reached"));
        assert!(lines[4].contains("10.0"));
        assert!(lines[4].ends_with("3650"));
        assert!(lines[5].starts_with("Idle"));
        assert!(lines[5].contains(">30"));
        assert!(lines[5].ends_with(">10950"));
    }

    #[test]
    fn dod_sweep_is_printed_in_percent() {
        let result = SweepResult {
            variable: SweepVariable::Dod,
            values: vec![0.5],
            fades: vec![12.345],
            time_years: 10.0,
            fixed_temperature_c: Some(25.0),
        };
        let table = sweep_table(&result);
        assert!(table.contains("50.00"));
        assert!(table.contains("12.35") || table.contains("12.34"));
        assert!(table.contains("Depth of Discharge (%)"));
    }
}
