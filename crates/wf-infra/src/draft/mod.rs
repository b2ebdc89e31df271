mod file_repo;

pub use file_repo::{FileDraftRepository, DEFAULT_DRAFT_FILE};
