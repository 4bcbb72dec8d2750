pub mod help;
pub mod panels;
