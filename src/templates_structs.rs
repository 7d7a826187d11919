// Template context structures for Askama templates.

use askama::Template;

use crate::models::request::FormSnapshot;

/// The request form page; `errors` is non-empty after a rejected submit.
#[derive(Template)]
#[template(path = "form.html")]
pub struct FormTemplate {
    pub app_name: String,
    pub errors: Vec<String>,
    pub form: FormSnapshot,
}

/// Print-friendly rendition of a completed sheet.
#[derive(Template)]
#[template(path = "preview.html")]
pub struct PreviewTemplate {
    pub app_name: String,
    pub generated: String,
    pub form: FormSnapshot,
}
