pub mod enumeration;
pub mod error;
