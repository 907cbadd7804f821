//! Email generation pipeline.
//!
//! A fixed, linear stage sequence turns one (client, property, notes)
//! triple into one validated outreach email:
//!
//! 1. `orchestrator` — input validation + normalization
//! 2. `weather` (crate root) — current conditions for the property city
//! 3. `playbook` — static realtor guidance
//! 4. `prompt` — five-slot template assembly
//! 5. `generator` — LLM invocation with bounded corrective retry
//! 6. `postprocess` — hard word ceiling
//!
//! There is no branching or fan-out between stages; the only loop is the
//! retry loop inside `generator`.

pub mod documents;
pub mod generator;
pub mod orchestrator;
pub mod playbook;
pub mod postprocess;
pub mod prompt;
pub mod types;
pub mod validator;

pub use orchestrator::Pipeline;
