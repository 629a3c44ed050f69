//! `stockline-directory` — companies, company groups, and directory
//! management.
//!
//! The directory is the authority on which companies exist and how they are
//! grouped. Group membership is derived: a group's members are exactly the
//! companies whose `group_id` names it.

pub mod company;
pub mod directory;

pub use company::{Company, CompanyGroup};
pub use directory::CompanyDirectory;
