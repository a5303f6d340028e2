pub mod error;
pub mod validation;
pub mod model;
pub mod db;
pub mod assignment;
pub mod ops;
pub mod queries;
pub mod cli;
