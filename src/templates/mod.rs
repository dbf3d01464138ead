// src/templates/mod.rs
//! Template catalogue: static registry, generated store, and the resolver tying them together

pub mod config;
pub mod registry;
pub mod resolver;
pub mod store;

pub use config::{LayoutType, SectionKind, TemplateConfig};
pub use registry::{ResumeTemplate, TemplateRegistry};
pub use resolver::{ConfigOrigin, Rendered, ResolvedTemplate, TemplateResolver};
pub use store::GeneratedTemplateStore;
