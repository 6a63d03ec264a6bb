//! Self-contained HTML comparison report.
//!
//! One page: overall pass rate, per-engine breakdown, and an engine
//! versus (object, timestep) matrix so divergence between engines on the
//! same configuration is visible at a glance.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use grasp_types::{GraspObject, Verdict};
use tracing::info;

use crate::record::RunRecord;
use crate::store::ensure_output_dir;
use crate::summary::Summary;

/// Render the comparison report for `records` as an HTML string.
#[must_use]
pub fn render_report(records: &[RunRecord], title: &str) -> String {
    let summary = Summary::from_records(records);
    let mut page = String::new();

    let _ = writeln!(
        page,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>{title}</h1>",
        title = escape(title)
    );

    let _ = writeln!(
        page,
        "<p class=\"totals\">{total} runs &mdash; {passed} passed, \
         {failed} failed ({rate:.0}%)</p>",
        total = summary.overall.total,
        passed = summary.overall.passed,
        failed = summary.overall.failed(),
        rate = summary.overall.pass_rate() * 100.0
    );

    page.push_str("<h2>By engine</h2>\n<table>\n<tr><th>Engine</th><th>Passed</th><th>Total</th><th>Rate</th></tr>\n");
    for (engine, stats) in &summary.by_engine {
        let _ = writeln!(
            page,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.0}%</td></tr>",
            escape(engine),
            stats.passed,
            stats.total,
            stats.pass_rate() * 100.0
        );
    }
    page.push_str("</table>\n");

    render_matrix(&mut page, records, &summary);

    page.push_str("</body>\n</html>\n");
    page
}

/// Engine columns against (object, timestep) rows.
fn render_matrix(page: &mut String, records: &[RunRecord], summary: &Summary) {
    let engines: Vec<&str> = summary.engines().collect();
    if engines.is_empty() {
        return;
    }

    // Unique (object, timestep) combinations, sorted for display.
    let mut configs: Vec<(GraspObject, String)> = records
        .iter()
        .map(|r| (r.object, format!("{:.3}", r.timestep)))
        .collect();
    configs.sort();
    configs.dedup();

    page.push_str("<h2>Engine comparison</h2>\n<table>\n<tr><th>Object</th><th>dt (s)</th>");
    for engine in &engines {
        let _ = write!(page, "<th>{}</th>", escape(engine));
    }
    page.push_str("</tr>\n");

    for (object, dt) in &configs {
        let _ = write!(page, "<tr><td>{object}</td><td>{dt}</td>");
        for engine in &engines {
            let cell = records
                .iter()
                .find(|r| {
                    r.engine == *engine && r.object == *object && format!("{:.3}", r.timestep) == *dt
                })
                .map_or_else(
                    || "<td class=\"missing\">&ndash;</td>".to_string(),
                    verdict_cell,
                );
            page.push_str(&cell);
        }
        page.push_str("</tr>\n");
    }
    page.push_str("</table>\n");
}

fn verdict_cell(record: &RunRecord) -> String {
    match record.verdict {
        Verdict::Pass => "<td class=\"pass\">pass</td>".to_string(),
        Verdict::Fail => {
            let detail = record
                .drop_time
                .map_or(String::new(), |t| format!(" @ {t:.2}s"));
            format!("<td class=\"fail\">fail{detail}</td>")
        }
        Verdict::Pending => "<td class=\"missing\">pending</td>".to_string(),
    }
}

/// Render and write the report, returning the written path.
pub fn write_report(
    output_path: &Path,
    records: &[RunRecord],
    title: &str,
) -> crate::Result<PathBuf> {
    if let Some(parent) = output_path.parent() {
        ensure_output_dir(parent)?;
    }
    std::fs::write(output_path, render_report(records, title))?;
    info!(path = %output_path.display(), runs = records.len(), "wrote comparison report");
    Ok(output_path.to_path_buf())
}

/// Minimal HTML escaping for engine names and titles.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em; } \
table { border-collapse: collapse; margin: 1em 0; } \
td, th { border: 1px solid #ccc; padding: 0.4em 0.8em; } \
.pass { background: #d4edda; } \
.fail { background: #f8d7da; } \
.missing { color: #999; }";
