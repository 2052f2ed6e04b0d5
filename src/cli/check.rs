use crate::error::Result;
use crate::scope::Scope;

/// Resolve a user-supplied scope label and print its canonical form.
pub fn run_check(label: &str, descr: &str, origin: Option<&str>) -> Result<()> {
    let scope = Scope::from_label(label, descr, origin)?;
    println!("{scope}");
    Ok(())
}

/// Print the scope one step narrower than `label`.
pub fn run_next(label: &str) -> Result<()> {
    let scope = Scope::from_label(label, "for next", None)?;
    let next = scope.next_narrower()?;
    println!("{next}");
    Ok(())
}
