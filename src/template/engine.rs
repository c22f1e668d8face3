// ABOUTME: Template engine implementation using Handlebars in strict mode
// ABOUTME: Provides a named-template registry plus inline rendering for placeholder resolution

use handlebars::Handlebars;
use serde::Serialize;

use super::error::{Result, TemplateError};
use super::helpers;

#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with all built-in helpers
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: an undefined variable is a render error, never an
        // empty string silently pasted into a notification body.
        handlebars.set_strict_mode(true);
        handlebars.set_dev_mode(false);

        helpers::register_helpers(&mut handlebars);

        Ok(Self { handlebars })
    }

    /// Register a named template, validating its syntax
    pub fn register_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, source)
            .map_err(|e| TemplateError::SyntaxError(e.to_string()))
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.get_template(name).is_some()
    }

    /// Render a registered template against the given data
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        if !self.has_template(name) {
            return Err(TemplateError::NotRegistered(name.to_string()));
        }

        self.handlebars
            .render(name, data)
            .map_err(TemplateError::RenderError)
    }

    /// Render an inline template string against the given data
    pub fn render_inline<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.handlebars
            .render_template(template, data)
            .map_err(TemplateError::RenderError)
    }

    /// Validate template syntax without rendering
    pub fn validate_template(&self, template: &str) -> Result<()> {
        match handlebars::Template::compile(template) {
            Ok(_) => Ok(()),
            Err(e) => Err(TemplateError::SyntaxError(e.to_string())),
        }
    }

    /// Check if a string contains template expressions
    pub fn has_placeholders(&self, text: &str) -> bool {
        text.contains("{{") && text.contains("}}")
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new().expect("Failed to create default template engine")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inline_rendering() {
        let engine = TemplateEngine::new().unwrap();
        let data = json!({ "name": "World" });

        let result = engine.render_inline("Hello {{name}}!", &data).unwrap();
        assert_eq!(result, "Hello World!");
    }

    #[test]
    fn test_named_template_rendering() {
        let mut engine = TemplateEngine::new().unwrap();
        engine
            .register_template("greeting", "Hi {{who}}, from {{from}}")
            .unwrap();

        let result = engine
            .render("greeting", &json!({ "who": "ops", "from": "herald" }))
            .unwrap();
        assert_eq!(result, "Hi ops, from herald");
    }

    #[test]
    fn test_unregistered_template() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine.render("missing", &json!({})).unwrap_err();
        assert!(matches!(err, TemplateError::NotRegistered(ref name) if name == "missing"));
    }

    #[test]
    fn test_strict_mode_rejects_undefined_variables() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine.render_inline("value: {{not_defined}}", &json!({}));
        assert!(matches!(result, Err(TemplateError::RenderError(_))));
    }

    #[test]
    fn test_conditional_on_false_value() {
        let engine = TemplateEngine::new().unwrap();
        let data = json!({ "failed": false });

        let result = engine
            .render_inline("{{#if failed}}bad{{else}}good{{/if}}", &data)
            .unwrap();
        assert_eq!(result, "good");
    }

    #[test]
    fn test_template_validation() {
        let engine = TemplateEngine::new().unwrap();

        assert!(engine.validate_template("Hello {{name}}").is_ok());
        assert!(engine.validate_template("Hello {{name}").is_err());
        assert!(engine
            .validate_template("{{#if condition}}true{{else}}false{{/if}}")
            .is_ok());
    }

    #[test]
    fn test_has_placeholders() {
        let engine = TemplateEngine::new().unwrap();

        assert!(engine.has_placeholders("{{ execution.id }}"));
        assert!(!engine.has_placeholders("exec-2024-001"));
    }

    #[test]
    fn test_registration_rejects_bad_syntax() {
        let mut engine = TemplateEngine::new().unwrap();
        let result = engine.register_template("broken", "{{#if x}}no close");
        assert!(matches!(result, Err(TemplateError::SyntaxError(_))));
    }
}
