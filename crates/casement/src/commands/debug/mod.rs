pub mod place;
pub mod show;
