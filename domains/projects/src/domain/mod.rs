//! Domain model for the project showcase

pub mod entities;
pub mod state;
