use axum::{response::Json, routing::get, Router};

use crate::catalog::exams::medical_exams;
use crate::models::MedicalExam;

pub fn exam_routes() -> Router {
    Router::new().route("/", get(list_exams))
}

pub async fn list_exams() -> Json<Vec<MedicalExam>> {
    Json(medical_exams())
}
