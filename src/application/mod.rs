pub mod trial_service;

pub use trial_service::*;
