//! # IO Module
//!
//! Boundary between the presentation layer and the domain layer. The
//! presentation layer speaks the DTOs of the `shared` crate; the mappers here
//! translate them to and from domain models.

pub mod mappers;
