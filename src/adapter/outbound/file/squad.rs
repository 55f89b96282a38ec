use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{Cost, PlayerId, Squad};
use crate::error::Result;
use crate::port::outbound::squad::{SquadSnapshot, SquadSource};

/// `{"picks": [ids...], "bank": 1.5}`
#[derive(Debug, Deserialize)]
struct SquadFile {
    picks: Vec<PlayerId>,
    #[serde(default)]
    bank: Cost,
}

/// Squad snapshot read from a local JSON file.
///
/// The file describes one squad; team id and round are ignored.
#[derive(Debug, Clone)]
pub struct FileSquadSource {
    path: PathBuf,
}

impl FileSquadSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SquadSource for FileSquadSource {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch(&self, team_id: u64, round: u32) -> Result<SquadSnapshot> {
        debug!(path = %self.path.display(), team_id, round, "Reading squad file");
        let content = tokio::fs::read_to_string(&self.path).await?;
        let file: SquadFile = serde_json::from_str(&content)?;
        Ok(SquadSnapshot {
            squad: Squad::try_new(file.picks)?,
            bank: file.bank,
        })
    }
}
