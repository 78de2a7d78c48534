//! Integration tests for the HTML form fragment endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_text, get, open_case, post_form};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn salida_form_renders_radio_rows(pool: PgPool) {
    let (app, _uploads) = common::build_test_app(pool);
    let id = open_case(&app, "FRM001").await;

    let response = get(&app, &format!("/api/v1/cases/{id}/forms/salida")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert!(html.contains("name=\"salida__frenos\""));
    assert!(html.contains("value=\"No Aplica\""));
    assert!(!html.contains("entrada__"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn entrada_form_shows_saved_salida_answers(pool: PgPool) {
    let (app, _uploads) = common::build_test_app(pool);
    let id = open_case(&app, "FRM002").await;

    post_form(
        &app,
        &format!("/api/v1/cases/{id}/salida"),
        "salida__frenos=S%C3%AD",
    )
    .await;

    let html = body_text(get(&app, &format!("/api/v1/cases/{id}/forms/entrada")).await).await;
    assert!(html.contains("name=\"entrada__frenos\""));
    assert!(html.contains("<strong>Salida:</strong> Sí"));
    // Unanswered points show a dash for the prior answer.
    assert!(html.contains("<strong>Salida:</strong> -"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn closed_table_lists_both_phases(pool: PgPool) {
    let (app, _uploads) = common::build_test_app(pool);
    let id = open_case(&app, "FRM003").await;

    post_form(
        &app,
        &format!("/api/v1/cases/{id}/salida"),
        "salida__gomas=S%C3%AD",
    )
    .await;
    post_form(
        &app,
        &format!("/api/v1/cases/{id}/entrada"),
        "entrada__gomas=No",
    )
    .await;

    let html = body_text(get(&app, &format!("/api/v1/cases/{id}/forms/closed")).await).await;
    assert!(html.contains("<th>Punto</th><th>Salida</th><th>Entrada</th>"));
    assert!(html.contains("<td>Gomas</td><td>Sí</td><td>No</td>"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn form_for_unknown_case_is_404(pool: PgPool) {
    let (app, _uploads) = common::build_test_app(pool);

    let response = get(&app, "/api/v1/cases/424242/forms/salida").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
