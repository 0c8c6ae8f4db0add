pub mod cbc;
pub mod codes;
