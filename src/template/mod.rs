// ABOUTME: Template engine module for the notification dispatcher
// ABOUTME: Provides strict template rendering and notification-oriented helpers

pub mod engine;
pub mod error;
pub mod helpers;

pub use engine::TemplateEngine;
pub use error::{Result, TemplateError};
