// src/render/mod.rs
//! Document model, shared section builders and the renderers producing documents

pub mod document;
pub mod dynamic;
pub mod html;
pub mod leaf;
pub mod sections;

pub use document::{Block, Document, Entry, Header, PageLayout, Section, SidebarSide, Theme};
pub use dynamic::render_config;
