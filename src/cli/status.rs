use std::path::Path;

use crate::error::Result;
use crate::session::Session;

/// Print what the hook would act on as pretty JSON, without prompting.
pub fn run(project_root: &Path) -> Result<()> {
    let report = Session::new(project_root).status()?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
