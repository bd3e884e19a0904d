use std::io::{self, Write};

use upload_reconciler::ReconcilerError;

pub fn format_error(err: &anyhow::Error) -> String {
    let hint = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<ReconcilerError>())
        .and_then(hint_for);

    match hint {
        Some(hint) => format!("[ERROR] {:#}\n  hint: {}\n", err, hint),
        None => format!("[ERROR] {:#}\n", err),
    }
}

fn hint_for(err: &ReconcilerError) -> Option<&'static str> {
    match err {
        ReconcilerError::Scan(_) => Some("check --document-root and paths.static_dir"),
        ReconcilerError::Aggregation(_) => {
            Some("set references.allow_missing = true to treat absent exports as empty")
        }
        ReconcilerError::Lock { .. } => Some("another reconcile run holds the lock"),
        _ => None,
    }
}

/// Report a fatal error on stderr; one JSON object in JSON mode
pub fn print_error(err: &anyhow::Error, json: bool) {
    let mut stderr = io::stderr().lock();
    if json {
        let output = serde_json::json!({ "error": format!("{:#}", err) });
        let _ = crate::ui::json::write_event(&mut stderr, &output);
        return;
    }

    let _ = stderr.write_all(format_error(err).as_bytes());
}
