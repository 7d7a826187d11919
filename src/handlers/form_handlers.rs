use actix_web::{HttpResponse, web};
use askama::Template;
use chrono::Local;

use crate::errors::{AppError, render};
use crate::models::request::FormSnapshot;
use crate::pdf::{self, PdfOptions};
use crate::templates_structs::{FormTemplate, PreviewTemplate};
use crate::validate;

/// Application display name, configurable via APP_NAME.
fn app_name() -> String {
    std::env::var("APP_NAME").unwrap_or_else(|_| "Church Forms".to_string())
}

/// GET / — Render the blank request form.
pub async fn index() -> Result<HttpResponse, AppError> {
    let tmpl = FormTemplate {
        app_name: app_name(),
        errors: vec![],
        form: FormSnapshot::default(),
    };
    render(tmpl)
}

/// POST /requests/pdf — Validate the submitted snapshot and stream the
/// filled sheet back as a PDF download.
pub async fn export_pdf(form: web::Form<FormSnapshot>) -> Result<HttpResponse, AppError> {
    let snapshot = form.into_inner();

    let errors = validate::validate_snapshot(&snapshot);
    if !errors.is_empty() {
        let tmpl = FormTemplate { app_name: app_name(), errors, form: snapshot };
        return render(tmpl);
    }

    let options = PdfOptions::default();
    match pdf::render(&snapshot, &options) {
        Ok(bytes) => {
            log::info!(
                "request sheet exported: {}",
                serde_json::json!({
                    "number": snapshot.number,
                    "request_type": snapshot.request_type.as_str(),
                    "status": snapshot.status.as_str(),
                })
            );
            Ok(HttpResponse::Ok()
                .content_type("application/pdf")
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", options.filename),
                ))
                .body(bytes))
        }
        Err(e) => {
            // Export failures are not surfaced to the user; send them back
            // to the form with their browser state intact.
            log::error!("pdf export failed: {e}");
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/"))
                .finish())
        }
    }
}

/// POST /requests/preview — Print-friendly HTML rendition of the filled
/// sheet, for browsers that prefer print-to-PDF over a download.
pub async fn preview(form: web::Form<FormSnapshot>) -> Result<HttpResponse, AppError> {
    let snapshot = form.into_inner();

    let errors = validate::validate_snapshot(&snapshot);
    if !errors.is_empty() {
        let tmpl = FormTemplate { app_name: app_name(), errors, form: snapshot };
        return render(tmpl);
    }

    let tmpl = PreviewTemplate {
        app_name: app_name(),
        generated: Local::now().format("%B %-d, %Y").to_string(),
        form: snapshot,
    };
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header(("Content-Disposition", "inline; filename=\"church-form.html\""))
        .body(body))
}
