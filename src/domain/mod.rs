//! Domain records exchanged verbatim with the admin REST API.

pub mod amenity;
pub mod owner;
pub mod region;
pub mod user;
