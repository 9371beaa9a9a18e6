pub mod page;
pub mod sanitize;
