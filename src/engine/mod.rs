//! Core inference engine
//!
//! The executor turns a raw request payload into a model prediction:
//! validate, project onto the feature schema, batch, infer.

mod executor;

pub use executor::Executor;
