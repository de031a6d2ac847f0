use std::io;

use anyhow::Context;
use chrono::NaiveDate;
use sort_engine::Student;
use sqlx::{postgres::PgPoolOptions, FromRow, PgPool, Postgres, QueryBuilder};

use crate::config::Config;

#[derive(FromRow)]
struct StudentRow {
    student_id: String,
    name: String,
    address: String,
    birth_date: NaiveDate,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student {
            id: row.student_id,
            name: row.name,
            address: row.address,
            birth_date: row.birth_date,
        }
    }
}

pub async fn db_setup_and_migrate(config: &Config) -> io::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|err| {
            io::Error::new(
                io::ErrorKind::Other,
                format!("Failed to connect to Postgres. Ensure that the Database server is running or if you are connected to the correct URL: Err = {:?}. ", err),
            )
        })?;

    migrate(&pool).await?;

    Ok(pool)
}

async fn migrate(pool: &PgPool) -> Result<(), io::Error> {
    sqlx::migrate!().run(pool).await.map_err(|err| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to run migrations: Check to see if there is an issue with the .sql files. Err =  {:?}", err),
        )
    })
}

/// Students in insertion order. `limit` keeps only the first rows; `None` fetches all of them.
pub async fn fetch_students(pool: &PgPool, limit: Option<i64>) -> anyhow::Result<Vec<Student>> {
    let rows = sqlx::query_as::<_, StudentRow>(
        r#"
        SELECT student_id, name, address, birth_date
        FROM students
        ORDER BY row_id
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
    .context("Failed to fetch students from the DB")?;

    Ok(rows.into_iter().map(Student::from).collect())
}

pub async fn count_students(pool: &PgPool) -> anyhow::Result<i64> {
    let (total,) = sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM students")
        .fetch_one(pool)
        .await
        .context("Failed to count students")?;

    Ok(total)
}

/// Inserts in one statement; rows whose student id already exists are skipped.
/// Returns how many rows were written.
pub async fn insert_students(pool: &PgPool, students: &[Student]) -> anyhow::Result<u64> {
    if students.is_empty() {
        return Ok(0);
    }

    let mut query: QueryBuilder<Postgres> =
        QueryBuilder::new("INSERT INTO students (student_id, name, address, birth_date) ");
    query.push_values(students, |mut row, student| {
        row.push_bind(&student.id)
            .push_bind(&student.name)
            .push_bind(&student.address)
            .push_bind(student.birth_date);
    });
    query.push(" ON CONFLICT (student_id) DO NOTHING");

    let result = query
        .build()
        .execute(pool)
        .await
        .context("Failed to insert students into the DB")?;

    Ok(result.rows_affected())
}

pub async fn truncate_students(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query("TRUNCATE TABLE students RESTART IDENTITY")
        .execute(pool)
        .await
        .context("Failed to truncate the students table")?;

    Ok(())
}
