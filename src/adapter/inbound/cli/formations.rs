//! Handler for the `formations` command.

use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::output;
use crate::domain::{Position, LEGAL_FORMATIONS};
use crate::error::Result;

#[derive(Tabled)]
struct FormationRow {
    #[tabled(rename = "#")]
    order: usize,
    #[tabled(rename = "Formation")]
    label: String,
    #[tabled(rename = "GKP")]
    gkp: u8,
    #[tabled(rename = "DEF")]
    def: u8,
    #[tabled(rename = "MID")]
    mid: u8,
    #[tabled(rename = "FWD")]
    fwd: u8,
}

/// List the legal formations.
pub fn execute() -> Result<()> {
    if output::is_json() {
        let labels: Vec<String> = LEGAL_FORMATIONS.iter().map(|f| f.label()).collect();
        return output::json_document(&json!({ "formations": labels }));
    }

    let rows = LEGAL_FORMATIONS.iter().enumerate().map(|(i, f)| FormationRow {
        order: i + 1,
        label: f.label(),
        gkp: f.count(Position::Goalkeeper),
        def: f.count(Position::Defender),
        mid: f.count(Position::Midfielder),
        fwd: f.count(Position::Forward),
    });
    let mut table = Table::new(rows);
    table.with(Style::rounded());

    output::section("Legal formations");
    output::lines(&table.to_string());
    output::note("Ties go to the earliest formation unless optimiser.tie_break = \"last\"");
    Ok(())
}
