//! Reconcile command handler
//!
//! Moves orphaned uploads into the backup directory, asking first when
//! attached to a terminal. Exits non-zero when any orphan stayed behind.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use is_terminal::IsTerminal;
use upload_reconciler::{Config, NamingPolicy, ReconcileOptions};

use crate::ui::output::{print_reconcile_result, reconcile_json};

/// Execute the reconcile command
pub fn cmd_reconcile(
    config: &Config,
    dry_run: bool,
    yes: bool,
    naming: Option<NamingPolicy>,
    json: bool,
) -> Result<()> {
    let report = super::build_report(config)?;
    let options = ReconcileOptions::new()
        .with_dry_run(dry_run)
        .with_naming(naming);

    let interactive = !json && std::io::stdin().is_terminal();
    if !dry_run && !yes && interactive {
        let preview = report.reconcile_with(&options.clone().with_dry_run(true))?;
        if preview.moved_count() == 0 {
            print_reconcile_result(&preview, false);
            return Ok(());
        }

        print_reconcile_result(&preview, true);
        println!();
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Move {} files to {}?",
                preview.moved_count(),
                report.backup_root().display()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let result = report.reconcile_with(&options)?;

    if json {
        crate::ui::json::emit(reconcile_json(&result))?;
    } else {
        print_reconcile_result(&result, result.dry_run);
    }

    if !result.is_complete() {
        bail!(
            "{} of {} orphans could not be moved",
            result.failed_count(),
            result.orphans
        );
    }

    Ok(())
}
