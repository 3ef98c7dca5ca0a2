pub mod employee;

use actix_web::web;

/// Route table, shared between `main` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/employee")
            .route(web::post().to(employee::create_employee))
            .route(web::get().to(employee::list_employees)),
    )
    .service(
        web::resource("/employee/{id}")
            .route(web::get().to(employee::get_employee))
            .route(web::put().to(employee::update_employee))
            .route(web::delete().to(employee::delete_employee)),
    );
}
