//! Local JSON inputs: prediction rows and offline squad snapshots.

mod predictions;
mod squad;

pub use predictions::load_predictions;
pub use squad::FileSquadSource;
