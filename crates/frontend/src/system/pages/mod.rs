pub mod about;
pub mod help;
