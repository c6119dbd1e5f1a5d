//! Repositories, one per table. The only code in the workspace that
//! issues SQL.

pub mod weapon_repo;

pub use weapon_repo::WeaponRepo;
