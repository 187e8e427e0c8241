//! Discussion entities and turn-advancement state

pub mod cursor;
pub mod entities;
pub mod role;
