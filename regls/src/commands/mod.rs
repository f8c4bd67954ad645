/// Repository and tag listing
pub mod list;
