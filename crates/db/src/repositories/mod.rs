//! Repository layer: one stateless struct per table.

pub mod franchise_repo;
pub mod league_repo;
pub mod pick_repo;
pub mod prospect_repo;

pub use franchise_repo::FranchiseRepo;
pub use league_repo::LeagueRepo;
pub use pick_repo::PickRepo;
pub use prospect_repo::ProspectRepo;

/// Upper bound on rows returned by any listing query.
pub const MAX_LIST_ROWS: i64 = 1000;
