//! HTTP-level export tests — the submit flow from form body to download.
//!
//! - GET / serves the form with every named control
//! - incomplete submissions re-render the form instead of exporting
//! - complete submissions produce exactly one PDF attachment
//! - the print-friendly preview mirrors the same validation

use actix_web::{App, test};

fn complete_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("number", "2024-017"),
        ("from", "Youth ministry"),
        ("to", "Church board"),
        ("subject", "Easter choir rehearsal"),
        ("request_type", "other"),
        ("other_request_type", "Chair transport"),
        ("description", "Weekly rehearsal in the main hall."),
        ("responsible", "M. Alves"),
        ("received_by", "Office"),
        ("status", "approved"),
        ("by", "Board secretary"),
        ("executed_by", "Facilities team"),
    ]
}

#[actix_rt::test]
async fn test_form_page_served() {
    let app = test::init_service(App::new().configure(church_forms::routes)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let html = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf8 body");
    for name in [
        "number", "from", "to", "subject", "request_type", "other_request_type",
        "description", "responsible", "received_by", "status", "by", "executed_by",
        "start_date", "end_date",
    ] {
        assert!(html.contains(&format!("name=\"{name}\"")), "missing control {name}");
    }
}

#[actix_rt::test]
async fn test_incomplete_submission_does_not_export() {
    let app = test::init_service(App::new().configure(church_forms::routes)).await;

    let req = test::TestRequest::post()
        .uri("/requests/pdf")
        .set_form([("number", "12"), ("from", "Choir")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "got {content_type}");

    let html = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf8 body");
    assert!(html.contains("Subject is required"));
    // Entered values survive the round trip.
    assert!(html.contains("value=\"12\""));
}

#[actix_rt::test]
async fn test_complete_submission_downloads_pdf() {
    let app = test::init_service(App::new().configure(church_forms::routes)).await;

    let req = test::TestRequest::post()
        .uri("/requests/pdf")
        .set_form(complete_form())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert_eq!(content_type, "application/pdf");

    let disposition = resp
        .headers()
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains("attachment"));
    assert!(disposition.contains("church-form.pdf"));

    let body = test::read_body(resp).await;
    assert!(body.starts_with(b"%PDF"));
}

#[actix_rt::test]
async fn test_empty_date_fields_accepted() {
    let app = test::init_service(App::new().configure(church_forms::routes)).await;

    let mut pairs = complete_form();
    pairs.push(("start_date", ""));
    pairs.push(("end_date", ""));

    let req = test::TestRequest::post()
        .uri("/requests/pdf")
        .set_form(pairs)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert_eq!(content_type, "application/pdf");
}

#[actix_rt::test]
async fn test_preview_renders_filled_sheet() {
    let app = test::init_service(App::new().configure(church_forms::routes)).await;

    let req = test::TestRequest::post()
        .uri("/requests/preview")
        .set_form(complete_form())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let disposition = resp
        .headers()
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains("inline"));

    let html = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf8 body");
    assert!(html.contains("Easter choir rehearsal"));
    assert!(html.contains("Chair transport"));
}

#[actix_rt::test]
async fn test_preview_rejects_incomplete_submission() {
    let app = test::init_service(App::new().configure(church_forms::routes)).await;

    let req = test::TestRequest::post()
        .uri("/requests/preview")
        .set_form([("subject", "Only a subject")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let html = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf8 body");
    assert!(html.contains("Number is required"));
}
