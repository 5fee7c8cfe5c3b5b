//! The transformation pipeline: kinds table, prompt composer, response
//! sanitizer, and the orchestrator that ties them to the completion client
//! and the history store.

pub mod composer;
pub mod handlers;
pub mod kinds;
pub mod pipeline;
pub mod sanitizer;
