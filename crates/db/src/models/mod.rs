//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts where the row is created here

pub mod franchise;
pub mod league;
pub mod pick;
pub mod prospect;
