use std::env;

use anyhow::Context;
use log::info;

use student_records_server::{
    config::{parse_or, Config},
    db, seed,
};

const DEFAULT_SEED_COUNT: usize = 5000;
const BATCH_SIZE: usize = 100;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    env_logger::init();

    let total = parse_or(
        "SEED_COUNT",
        env::args().nth(1).or_else(|| env::var("SEED_COUNT").ok()),
        DEFAULT_SEED_COUNT,
    )?;

    let pool = db::db_setup_and_migrate(&config).await?;
    db::truncate_students(&pool).await?;
    info!("Cleared the students table, generating {total} students");

    let today = chrono::Local::now().date_naive();
    let mut rng = rand::thread_rng();
    let mut written = 0;
    while written < total {
        let batch_size = BATCH_SIZE.min(total - written);
        let batch = (0..batch_size)
            .map(|_| seed::generate_student(&mut rng, today))
            .collect::<anyhow::Result<Vec<_>>>()?;
        db::insert_students(&pool, &batch)
            .await
            .with_context(|| format!("Failed to insert batch starting at {written}"))?;

        written += batch_size;
        info!(
            "Progress: {}% ({written}/{total})",
            written * 100 / total
        );
    }

    let stored = db::count_students(&pool).await?;
    info!("Seeding done, {stored} students in the database");
    pool.close().await;

    Ok(())
}
