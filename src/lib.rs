//! Realty Outreach — personalized property pitch email generation.

pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod weather;
