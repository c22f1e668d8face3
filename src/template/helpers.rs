// ABOUTME: Handlebars helper functions for notification templates
// ABOUTME: Implements date formatting and timestamp helpers used by mail bodies

use chrono::{DateTime, Utc};
use handlebars::{Context, Handlebars, Helper, Output, RenderContext, RenderError};

/// Register all built-in helpers on a handlebars instance
pub fn register_helpers(handlebars: &mut Handlebars) {
    handlebars.register_helper("date", Box::new(date_helper));
    handlebars.register_helper("timestamp", Box::new(timestamp_helper));
    handlebars.register_helper("upper", Box::new(upper_helper));
}

/// Date helper - formats an RFC 3339 timestamp with an optional format string
pub fn date_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let raw = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("date helper requires a timestamp parameter"))?;

    let format = h
        .param(1)
        .and_then(|v| v.value().as_str())
        .unwrap_or("%Y-%m-%d %H:%M:%S UTC");

    let parsed: DateTime<Utc> = raw
        .parse()
        .map_err(|_| RenderError::new(format!("date helper: invalid timestamp '{}'", raw)))?;

    out.write(&parsed.format(format).to_string())?;
    Ok(())
}

/// Timestamp helper - formats current time with optional format string
pub fn timestamp_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let format = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .unwrap_or("%Y-%m-%d %H:%M:%S");

    let now = Utc::now();
    out.write(&now.format(format).to_string())?;
    Ok(())
}

/// Uppercase helper
pub fn upper_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("upper helper requires input parameter"))?;

    out.write(&input.to_uppercase())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::template::TemplateEngine;
    use serde_json::json;

    #[test]
    fn test_date_helper() {
        let engine = TemplateEngine::new().unwrap();
        let data = json!({ "startDate": "2024-03-01T12:30:00+00:00" });

        let result = engine
            .render_inline("{{date startDate \"%Y-%m-%d\"}}", &data)
            .unwrap();
        assert_eq!(result, "2024-03-01");
    }

    #[test]
    fn test_date_helper_rejects_garbage() {
        let engine = TemplateEngine::new().unwrap();
        let data = json!({ "startDate": "not-a-date" });

        assert!(engine.render_inline("{{date startDate}}", &data).is_err());
    }

    #[test]
    fn test_timestamp_helper() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine.render_inline("{{timestamp \"%Y\"}}", &json!({})).unwrap();
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_upper_helper() {
        let engine = TemplateEngine::new().unwrap();
        let data = json!({ "state": "failed" });

        let result = engine.render_inline("{{upper state}}", &data).unwrap();
        assert_eq!(result, "FAILED");
    }
}
