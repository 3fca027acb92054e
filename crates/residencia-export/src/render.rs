use tera::{Context, Tera};

use residencia_scales::scoring::ScoreResult;

use crate::error::ExportError;

const SCORE_TEXT_NAME: &str = "score.txt";

/// Score, interpretation, then the itemized breakdown in catalog order.
const SCORE_TEXT_TEMPLATE: &str = "ESCALA {{ scale_name | upper }}:
- Puntuación total: {{ total_score }} - {{ interpretation }}
- Desglose por ítems:{% for entry in breakdown %}
  • {{ entry.item_label }}: {{ entry.response_display }}{% endfor %}";

/// Render a result as the text block inserted into clinical notes.
///
/// ```text
/// ESCALA NIHSS:
/// - Puntuación total: 7 - Ictus moderado.
/// - Desglose por ítems:
///   • 1a. Nivel de conciencia: 3
///   ...
/// ```
pub fn render_score_text(result: &ScoreResult) -> Result<String, ExportError> {
    render_template(SCORE_TEXT_NAME, SCORE_TEXT_TEMPLATE, result)
}

/// Render a Tera template with a ScoreResult.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The result fields (`scale_name`, `total_score`, `interpretation`,
/// `breakdown`, ...) become the template context variables.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    result: &ScoreResult,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(result)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
