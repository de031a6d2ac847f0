use actix_web::{get, post, web};
use anyhow::Context;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use sort_engine::{sort_with_algorithm, Algorithm, SortKey, SortResult, Student};
use sqlx::PgPool;

use crate::{db, error::ApiError};

#[derive(Deserialize)]
#[cfg_attr(test, derive(Serialize))]
pub struct SortRequestData {
    algorithm: Option<String>,
    #[serde(default = "default_sort_by", alias = "sortBy")]
    sort_by: String,
    limit: Option<i64>,
}

fn default_sort_by() -> String {
    SortKey::Id.as_str().to_owned()
}

#[derive(Serialize, Debug)]
#[cfg_attr(test, derive(Deserialize))]
pub struct SortResponse {
    success: bool,
    algorithm: String,
    sort_by: String,
    execution_time: String,
    data_count: usize,
    data: Vec<Student>,
}

impl SortResponse {
    fn new(algorithm: Algorithm, sort_key: SortKey, result: SortResult<Student>) -> Self {
        SortResponse {
            success: true,
            algorithm: algorithm.to_string(),
            sort_by: sort_key.as_str().to_owned(),
            execution_time: format!("{} ms", result.elapsed_millis()),
            data_count: result.count,
            data: result.sorted,
        }
    }
}

#[derive(Serialize, Debug)]
#[cfg_attr(test, derive(Deserialize))]
pub struct StudentsResponse {
    success: bool,
    count: usize,
    data: Vec<Student>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(test, derive(Deserialize))]
pub struct StatsResponse {
    success: bool,
    total_students: i64,
}

#[get("/api/students")]
pub async fn list_students(
    pool: web::Data<PgPool>,
) -> Result<web::Json<StudentsResponse>, ApiError> {
    let students = db::fetch_students(&pool, None)
        .await
        .map_err(ApiError::InternalError)?;

    Ok(web::Json(StudentsResponse {
        success: true,
        count: students.len(),
        data: students,
    }))
}

#[post("/api/sort")]
pub async fn sort_students(
    data: web::Json<SortRequestData>,
    pool: web::Data<PgPool>,
) -> Result<web::Json<SortResponse>, ApiError> {
    let data = data.into_inner();
    // Validated before touching the database.
    let algorithm = data
        .algorithm
        .as_deref()
        .unwrap_or_default()
        .parse::<Algorithm>()?;
    let sort_key = SortKey::from(data.sort_by.as_str());
    let limit = data.limit.filter(|limit| *limit > 0);

    let students = db::fetch_students(&pool, limit)
        .await
        .map_err(ApiError::InternalError)?;
    if students.is_empty() {
        warn!("Sort requested with {algorithm} but the students table is empty");
        return Err(ApiError::NotFound);
    }

    let result = web::block(move || sort_with_algorithm(&students, algorithm, sort_key))
        .await
        .context("Sort worker failed")
        .map_err(ApiError::InternalError)?;
    info!(
        "Sorted {} students by {} with {} in {} ms",
        result.count,
        sort_key.as_str(),
        algorithm,
        result.elapsed_millis()
    );

    Ok(web::Json(SortResponse::new(algorithm, sort_key, result)))
}

#[get("/api/stats")]
pub async fn stats(pool: web::Data<PgPool>) -> Result<web::Json<StatsResponse>, ApiError> {
    let total_students = db::count_students(&pool)
        .await
        .map_err(ApiError::InternalError)?;

    Ok(web::Json(StatsResponse {
        success: true,
        total_students,
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_students)
        .service(sort_students)
        .service(stats);
}
