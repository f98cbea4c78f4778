use std::path::Path;

use wain_lib::{Settings, add_sheet_report};

use super::read_input;
use crate::CliError;

/// Append a JSON report to the sheet and print the JSON response.
pub(crate) fn run_sheet(settings: &Settings, input: &Path) -> Result<(), CliError> {
    let body = read_input(input)?;
    let response = add_sheet_report(&settings.sheet_path, &body);
    let out = serde_json::to_string(&response)
        .map_err(|e| CliError::other(format!("Failed to encode response: {}", e)))?;
    println!("{}", out);
    Ok(())
}
