use actix_web::{web, HttpResponse};
use crate::server::model::headers::RequestHeaders;
use crate::server::model::payment::Payment;
use crate::server::state::AppState;
use crate::server::util::time;

pub(crate) const ROUTE: &str = "/payments";

/// List the fixed payments, dated today
pub(crate) async fn get_payments(headers: RequestHeaders, data: web::Data<AppState>) -> HttpResponse {
    data.request_log().log_request(ROUTE, &headers);
    HttpResponse::Ok()
        .content_type("application/json")
        .json(Payment::listing(time::helper::get_local_today))
}

#[cfg(test)]
mod test {
    use std::sync::Arc;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use chrono::NaiveDate;
    use serde_json::{json, Value};
    use crate::server::logging::recording::RecordingRequestLog;
    use actix_web::App;
    use crate::server::routes::configure;
    use crate::server::routes::test_support::app_data;
    use crate::server::util::time::mock_chrono;

    #[actix_web::test]
    async fn stamps_every_payment_with_today() {
        mock_chrono::set_today(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        let log = Arc::new(RecordingRequestLog::default());
        let app = test::init_service(App::new().app_data(app_data(&log)).configure(configure)).await;
        let req = test::TestRequest::get()
            .uri("/payments")
            .insert_header(("X-Test", "1"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let payments = body.as_array().unwrap();
        assert_eq!(payments.len(), 3);
        assert_eq!(
            payments[2],
            json!({"id": 3, "name": "disk", "amount": 1244.0, "date": "2024-05-01"})
        );
        assert!(payments.iter().all(|p| p["date"] == "2024-05-01"));
        assert_eq!(
            payments.iter().map(|p| p["id"].as_i64().unwrap()).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );

        let entries = log.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "/payments");
        assert_eq!(entries[0].1.get("X-Test"), Some("1"));
    }

    #[actix_web::test]
    async fn only_the_date_changes_across_days() {
        let log = Arc::new(RecordingRequestLog::default());
        let app = test::init_service(App::new().app_data(app_data(&log)).configure(configure)).await;

        mock_chrono::set_today(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        let req = test::TestRequest::get().uri("/payments").to_request();
        let mut first: Value = test::call_and_read_body_json(&app, req).await;

        mock_chrono::set_today(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        let req = test::TestRequest::get().uri("/payments").to_request();
        let mut second: Value = test::call_and_read_body_json(&app, req).await;

        assert_ne!(first, second);
        for payment in first.as_array_mut().unwrap().iter_mut() {
            payment.as_object_mut().unwrap().remove("date");
        }
        for payment in second.as_array_mut().unwrap().iter_mut() {
            assert_eq!(payment["date"], "2024-05-02");
            payment.as_object_mut().unwrap().remove("date");
        }
        assert_eq!(first, second);
    }
}
