pub mod error;
pub mod tables;
pub mod record;
pub mod generator;
pub mod write;
