//! References command handler

use anyhow::Result;
use upload_reconciler::Config;

use crate::ui::output::print_count;

/// Execute the references command
pub fn cmd_references(config: &Config, json: bool) -> Result<()> {
    let report = super::build_report(config)?;
    let response = report.reference_count()?;
    print_count(response, json)
}
