//! Domain layer
//!
//! The cliente record and the storage port it is persisted through.
//! - `entities`: `Cliente` and its request shapes
//! - `ports`: the `ClienteRepository` trait implemented by adapters

pub mod entities;
pub mod ports;
