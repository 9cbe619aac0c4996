pub mod datasource;
pub mod processor;
