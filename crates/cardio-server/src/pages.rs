//! HTML rendering for the screening flow.
//!
//! Pages are small enough that they are assembled with `format!` into a
//! shared shell rather than through a template engine. Everything
//! interpolated into markup goes through [`escape`] at the render boundary,
//! schema-sourced strings included, since rejection messages embed submitted
//! values' labels and future schema edits should not be able to break the
//! markup.

use cardio_model::{FieldKind, FieldSpec, Prediction, Schema};

/// The screening form, one control per schema field in validation order.
pub fn form_page(schema: &Schema) -> String {
    let mut body = String::new();
    body.push_str("<h1>Heart disease risk screening</h1>\n");
    body.push_str("<form action=\"/predict\" method=\"post\">\n");
    for spec in schema.fields() {
        body.push_str(&field_control(spec));
    }
    body.push_str("<p><button type=\"submit\">Evaluate risk</button></p>\n</form>");
    page("Heart disease risk screening", &body)
}

/// Result page for an accepted submission.
pub fn result_page(prediction: Prediction) -> String {
    let body = format!(
        "<h1>Screening result</h1>\n\
         <p>Predicted label: <strong>{}</strong></p>\n\
         <p>{}</p>\n\
         <p><a href=\"/\">Submit another screening</a></p>",
        prediction.label(),
        prediction.description()
    );
    page("Screening result", &body)
}

/// Rejection page carrying the single validation message.
pub fn error_page(message: &str) -> String {
    let body = format!(
        "<h1>Submission rejected</h1>\n\
         <p>{}</p>\n\
         <p><a href=\"/\">Back to the form</a></p>",
        escape(message)
    );
    page("Submission rejected", &body)
}

/// Generic page for server-side faults. Names no internals.
pub fn failure_page() -> String {
    let body = "<h1>Something went wrong</h1>\n\
                <p>The submission could not be processed. Nothing was recorded; please try again.</p>\n\
                <p><a href=\"/\">Back to the form</a></p>";
    page("Something went wrong", body)
}

fn field_control(spec: &FieldSpec) -> String {
    let name = escape(&spec.name);
    let label = escape(&spec.label);
    match &spec.kind {
        FieldKind::Categorical { values } => {
            let mut control = format!(
                "<p>\n<label for=\"{name}\">{label}</label>\n\
                 <select id=\"{name}\" name=\"{name}\" required>\n"
            );
            for value in values {
                let value = escape(value);
                control.push_str(&format!("<option value=\"{value}\">{value}</option>\n"));
            }
            control.push_str("</select>\n</p>\n");
            control
        }
        FieldKind::IntegerRange { min, max } => format!(
            "<p>\n<label for=\"{name}\">{label}</label>\n\
             <input id=\"{name}\" name=\"{name}\" type=\"number\" min=\"{min}\" max=\"{max}\" step=\"1\" required>\n\
             </p>\n"
        ),
        FieldKind::RealRange { min, max } => format!(
            "<p>\n<label for=\"{name}\">{label}</label>\n\
             <input id=\"{name}\" name=\"{name}\" type=\"number\" min=\"{min}\" max=\"{max}\" step=\"any\" required>\n\
             </p>\n"
        ),
    }
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{}</title>\n\
         </head>\n\
         <body>\n\
         {}\n\
         </body>\n\
         </html>",
        escape(title),
        body
    )
}

/// Minimal HTML entity escape, safe for text and double-quoted attribute
/// positions.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
