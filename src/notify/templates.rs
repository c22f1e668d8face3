// ABOUTME: Built-in notification templates and their registration
// ABOUTME: Ships the default execution mail body rendered when no custom template is given

use crate::template::{Result, TemplateEngine};

/// Name of the built-in execution mail template.
pub const EXECUTION_MAIL: &str = "execution-mail";

/// Default HTML mail body for execution state notifications.
pub const EXECUTION_MAIL_TEMPLATE: &str = r#"<html>
<body>
<p>Flow <strong>{{execution.flowId}}</strong> in namespace <strong>{{execution.namespace}}</strong>
finished with status <strong>{{execution.state.current}}</strong>.</p>
<ul>
  <li>Execution: {{execution.id}}</li>
  <li>Started: {{date startDate}}</li>
  <li>Duration: {{duration}}</li>
</ul>
{{#if firstFailed}}
<p>Failed task: <strong>{{firstFailed.taskId}}</strong> (task run {{firstFailed.id}})</p>
{{/if}}
<p><a href="{{link}}">Open the execution</a></p>
</body>
</html>
"#;

/// Register all built-in templates on a template engine.
pub fn register_builtin(engine: &mut TemplateEngine) -> Result<()> {
    engine.register_template(EXECUTION_MAIL, EXECUTION_MAIL_TEMPLATE)
}
