//! API連携

pub mod cloud_functions;
