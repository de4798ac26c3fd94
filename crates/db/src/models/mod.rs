//! Domain model structs and read views.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus the enriched views built from it. Content tables
//! have no create/update DTOs: they are written only by seed migrations.

pub mod care_team_member;
pub mod checkpoint;
pub mod choice;
pub mod main_question;
pub mod response;
pub mod section;
