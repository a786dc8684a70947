pub mod check;
pub mod fields;
pub mod show;
pub mod urls;
