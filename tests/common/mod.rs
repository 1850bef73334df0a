
pub use temp_repo::TempRepo;
