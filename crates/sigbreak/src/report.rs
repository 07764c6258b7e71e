//! Rendering of a break report

use anyhow::Result;
use sigbreak_check::Report;

pub fn format_text(report: &Report) -> String {
    let mut out = String::new();

    if report.has_breaks() {
        out.push_str(&format!(
            "Probable compatibility breaks between {} and {}:\n",
            report.start, report.end
        ));
        for file in &report.breaks {
            out.push_str(&format!("\n{} ({})\n", file.name, file.status.as_str()));
            for method in &file.methods {
                out.push_str(&format!("  {}\n", method.explanation));
                out.push_str(&format!("    - {}\n", method.before));
                if !method.after.is_empty() {
                    out.push_str(&format!("    + {}\n", method.after));
                }
            }
        }
    } else {
        out.push_str(&format!(
            "No compatibility break detected between {} and {}\n",
            report.start, report.end
        ));
    }

    if !report.ignored.is_empty() {
        out.push_str("\nIgnored files (unsupported type):\n");
        for name in &report.ignored {
            out.push_str(&format!("  {}\n", name));
        }
    }

    out
}

pub fn format_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
