//! Decision policies for dustbot agents.
//!
//! A [`Policy`] maps a percept to an action; the engine holds one
//! boxed policy per agent and threads it through the decide and apply
//! phases. [`ReflexPolicy`] is the reference implementation: a simple
//! reflex agent that cleans what it stands on, turns right off
//! obstacles, and powers down when it returns home.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod policy;
pub mod reflex;

pub use policy::Policy;
pub use reflex::ReflexPolicy;
