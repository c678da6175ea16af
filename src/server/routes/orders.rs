use actix_web::{web, HttpResponse};
use crate::server::model::headers::RequestHeaders;
use crate::server::model::order::Order;
use crate::server::state::AppState;

pub(crate) const ROUTE: &str = "/orders";

/// List the fixed orders
pub(crate) async fn get_orders(headers: RequestHeaders, data: web::Data<AppState>) -> HttpResponse {
    data.request_log().log_request(ROUTE, &headers);
    HttpResponse::Ok()
        .content_type("application/json")
        .json(Order::listing())
}
