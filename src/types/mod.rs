//! # types
//!
//! `types` is the module containing all the useful public structs of the crate

pub mod errors;
pub mod msg_id;
pub mod record;
pub mod schema;
pub mod series;
pub mod table;
