pub mod cli;
pub mod db;
pub mod paths;
