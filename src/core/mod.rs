// src/core/mod.rs

pub mod fields;
pub mod fingerprint;
pub mod net;

pub use fingerprint::Fingerprint;
pub use net::NameResolver;
