//! Snapshot export command.

use anyhow::Result;
use ward_core::HospitalExport;

use super::demo::sample_hospital;
use super::ExportFormat;

/// Run the sample scenario and print the registry snapshot.
pub fn export(name: &str, format: ExportFormat) -> Result<()> {
    let hospital = sample_hospital(name)?;
    let snapshot = HospitalExport::from_registry(&hospital);

    let out = match format {
        ExportFormat::Json => snapshot.to_json()?,
        ExportFormat::Csv => snapshot.to_csv(),
    };
    println!("{}", out);

    Ok(())
}
