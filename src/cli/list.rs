use serde::Serialize;

use crate::error::Result;
use crate::scope::Scope;

#[derive(Debug, Serialize)]
struct ScopeRow {
    ordinal: usize,
    label: &'static str,
    high: bool,
}

/// Print every scope, broadest first.
pub fn run(json: bool) -> Result<()> {
    let rows: Vec<ScopeRow> = Scope::ALL
        .into_iter()
        .map(|scope| ScopeRow {
            ordinal: scope.ordinal(),
            label: scope.label(),
            high: scope.is_high(),
        })
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&rows)?;
        println!("{out}");
        return Ok(());
    }

    for row in &rows {
        let marker = if row.high { "high" } else { "" };
        println!("{}  {:<8}  {}", row.ordinal, row.label, marker);
    }
    Ok(())
}
