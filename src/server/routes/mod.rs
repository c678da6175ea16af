pub(crate) mod orders;
pub(crate) mod payments;

use actix_web::web;

/// Register every route the server exposes
pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(orders::ROUTE).route(web::get().to(orders::get_orders)))
        .service(web::resource(payments::ROUTE).route(web::get().to(payments::get_payments)));
}
