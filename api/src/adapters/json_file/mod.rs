//! JSON file adapter
//!
//! One pretty-printed JSON document per project under a data directory.

mod project_repo;

pub use project_repo::JsonFileProjectRepository;
