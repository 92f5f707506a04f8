pub mod preprocess;
pub mod types;
