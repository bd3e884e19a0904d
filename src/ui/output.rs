//! Rendering of count responses and reconcile results

use anyhow::Result;
use serde_json::json;
use upload_reconciler::{CountResponse, ReconcileResult};

pub fn print_count(response: CountResponse, json: bool) -> Result<()> {
    if json {
        crate::ui::json::emit(serde_json::to_value(response)?)?;
    } else {
        println!("count: {}", response.count);
    }
    Ok(())
}

pub fn reconcile_json(result: &ReconcileResult) -> serde_json::Value {
    json!({
        "count": result.moved_count(),
        "inventory": result.inventory,
        "references": result.references,
        "orphans": result.orphans,
        "overwritten": result.overwritten,
        "naming": result.naming.to_string(),
        "dry_run": result.dry_run,
        "moved": result
            .moved
            .iter()
            .map(|r| json!({ "from": r.from.display().to_string(), "to": r.to.display().to_string() }))
            .collect::<Vec<_>>(),
        "failed": result
            .failed
            .iter()
            .map(|f| json!({ "path": f.path.display().to_string(), "reason": f.reason }))
            .collect::<Vec<_>>(),
        "started_at": result.started_at.to_rfc3339(),
        "finished_at": result.finished_at.to_rfc3339(),
    })
}

/// Text summary; `preview` lists planned moves instead of completed ones
pub fn print_reconcile_result(result: &ReconcileResult, preview: bool) {
    print!("{}", render_reconcile_result(result, preview));
}

pub fn render_reconcile_result(result: &ReconcileResult, preview: bool) -> String {
    let mut out = String::new();
    let verb = if preview { "would move" } else { "moved" };

    for record in &result.moved {
        out.push_str(&format!(
            "{} {} -> {}\n",
            verb,
            record.from.display(),
            record.to.display()
        ));
    }
    for failure in &result.failed {
        out.push_str(&format!(
            "failed {}: {}\n",
            failure.path.display(),
            failure.reason
        ));
    }

    out.push_str(&format!(
        "inventory: {}, references: {}, orphans: {}\n",
        result.inventory, result.references, result.orphans
    ));
    if result.overwritten > 0 {
        out.push_str(&format!(
            "overwritten: {} (naming: {})\n",
            result.overwritten, result.naming
        ));
        if result.naming.can_collide() {
            out.push_str("  hint: --naming relative-path keeps files that share a name\n");
        }
    }
    out.push_str(&format!("count: {}\n", result.moved_count()));
    out
}
