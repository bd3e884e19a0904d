//! Inventory command handler

use anyhow::Result;
use upload_reconciler::Config;

use crate::ui::output::print_count;

/// Execute the inventory command
pub fn cmd_inventory(config: &Config, json: bool) -> Result<()> {
    let report = super::build_report(config)?;
    let response = report.inventory_count()?;
    print_count(response, json)
}
