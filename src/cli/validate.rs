use std::path::Path;

use crate::config::FixtureManifest;
use crate::error::Result;

/// Load a fixture manifest and print each fixture with its validated scope.
///
/// Without `manifest`, reads `.fixture-scope/fixtures.yml` under the current directory.
pub fn run(manifest: Option<&Path>) -> Result<()> {
    let (loaded, source) = match manifest {
        Some(path) => (FixtureManifest::load_from(path)?, path.display().to_string()),
        None => {
            let cwd = std::env::current_dir()?;
            (
                FixtureManifest::load_project(&cwd)?,
                ".fixture-scope/fixtures.yml".to_string(),
            )
        }
    };

    let resolved = loaded.resolve(&source)?;
    if resolved.is_empty() {
        eprintln!("fixture-scope: no fixtures declared in {source}");
        return Ok(());
    }

    for fixture in &resolved {
        let autouse = if fixture.autouse { "  autouse" } else { "" };
        println!("{:<8}  {}{}", fixture.scope, fixture.name, autouse);
    }
    eprintln!("fixture-scope: {} fixture(s) ok", resolved.len());
    Ok(())
}
