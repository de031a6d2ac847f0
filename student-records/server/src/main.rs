use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use student_records_server::{config::Config, db::db_setup_and_migrate, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::from_env()?;
    env_logger::init();

    let pool = db_setup_and_migrate(&config).await?;
    let binding_address = config.binding_address();
    info!(
        "Listening on http://{binding_address} with up to {} DB connections",
        config.max_connections
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .configure(routes::configure)
    })
    .bind(binding_address)?
    .run()
    .await
}
