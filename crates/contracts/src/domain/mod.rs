pub mod common;

pub mod a001_warehouse;
pub mod a002_supply;
pub mod a003_supplier;
