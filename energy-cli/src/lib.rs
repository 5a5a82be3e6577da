pub mod export;
pub mod form;
pub mod rates_file;
pub mod report;
pub mod tips;
