/* src/core/src/lib.rs */

//! Framework-agnostic template decoration for server-side rendering.
//!
//! A request handler produces a logical view identifier; this crate decides
//! which layout template (if any) wraps that view for the current request,
//! merges the request model with the reserved template attributes, and
//! delegates rendering to a [`Render`] collaborator. Adapter crates consume
//! [`ViewEngine`] to plug the pipeline into a web framework.

pub mod cache;
pub mod compose;
pub mod config;
pub mod engine;
pub mod errors;
pub mod mapping;
pub mod pattern;
pub mod policy;
pub mod resolver;

// Re-exports for ergonomic use
pub use compose::{Compositor, Model, Render};
pub use config::{TemplateRule, ViewConfig};
pub use engine::ViewEngine;
pub use errors::{ConfigError, RenderError, ViewError};
pub use policy::{Decision, LayoutPolicy};
pub use resolver::{ResolvedView, TemplateResolver, TEMPLATE_SEPARATOR, view_name};
