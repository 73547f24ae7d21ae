#![no_std]

pub mod bitpack;
pub mod machine;
pub mod models;

pub use bitpack::{pack16, pack4, pack8, BitTable, UnitWidth};
pub use machine::{CodingStateMachine, StateModel, ERROR, ITSME, START};
