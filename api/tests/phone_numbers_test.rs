//! Integration tests for the phone number validation endpoint

#[cfg(test)]
mod phone_number_tests {
    use std::sync::Arc;

    use actix_web::{http::header, http::StatusCode, test, web};

    use pv_api::app::create_app;
    use pv_api::routes::AppState;
    use pv_core::PhoneValidationService;
    use pv_infra::PhoneNumberPlan;

    fn app_state() -> web::Data<AppState<PhoneNumberPlan>> {
        let plan = Arc::new(PhoneNumberPlan::new());
        web::Data::new(AppState::new(Arc::new(PhoneValidationService::new(plan))))
    }

    async fn get(uri: &str) -> (StatusCode, Option<String>, String) {
        let app = test::init_service(create_app(app_state())).await;
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;

        let status = resp.status();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = test::read_body(resp).await;

        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn test_valid_number_with_calling_code() {
        let (status, content_type, body) = get("/v1/phone-numbers?phoneNumber=%2B12125690123").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(
            body,
            r#"{"phoneNumber":"+12125690123","countryCode":"US","areaCode":"212","localPhoneNumber":"5690123"}"#
        );
    }

    #[actix_web::test]
    async fn test_valid_mx_number() {
        let (status, _, body) = get("/v1/phone-numbers?phoneNumber=%2B525558910066").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            r#"{"phoneNumber":"+525558910066","countryCode":"MX","areaCode":"55","localPhoneNumber":"58910066"}"#
        );
    }

    #[actix_web::test]
    async fn test_valid_number_with_region_hint() {
        let (status, _, body) =
            get("/v1/phone-numbers?phoneNumber=650-253-0000&countryCode=US").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            r#"{"phoneNumber":"+16502530000","countryCode":"US","areaCode":"650","localPhoneNumber":"2530000"}"#
        );
    }

    #[actix_web::test]
    async fn test_missing_country_code() {
        let (status, content_type, body) = get("/v1/phone-numbers?phoneNumber=631%20311%208150").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(
            body,
            r#"{"phoneNumber":"631 311 8150","error":{"countryCode":"required value is missing"}}"#
        );
    }

    #[actix_web::test]
    async fn test_invalid_country_code() {
        let (status, _, body) =
            get("/v1/phone-numbers?phoneNumber=650-253-0000&countryCode=ESP").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            r#"{"phoneNumber":"650-253-0000","error":{"countryCode":"invalid value"}}"#
        );
    }

    #[actix_web::test]
    async fn test_missing_phone_number() {
        for uri in ["/v1/phone-numbers", "/v1/phone-numbers?countryCode=US", "/v1/phone-numbers?phoneNumber="] {
            let (status, _, body) = get(uri).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "uri {}", uri);
            assert_eq!(body, r#"{"error":{"phoneNumber":"required value is missing"}}"#);
        }
    }

    #[actix_web::test]
    async fn test_unparseable_phone_number() {
        let (status, _, body) = get("/v1/phone-numbers?phoneNumber=hello&countryCode=US").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"phoneNumber":"hello","error":{"phoneNumber":"invalid value"}}"#);
    }

    #[actix_web::test]
    async fn test_repeated_parameter_uses_first_value() {
        let (status, _, body) =
            get("/v1/phone-numbers?phoneNumber=%2B12125690123&phoneNumber=%2B525558910066").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            r#"{"phoneNumber":"+12125690123","countryCode":"US","areaCode":"212","localPhoneNumber":"5690123"}"#
        );
    }

    #[actix_web::test]
    async fn test_italian_number_keeps_leading_zero() {
        for uri in [
            "/v1/phone-numbers?phoneNumber=%2B39%2006%201234%205678",
            "/v1/phone-numbers?phoneNumber=06%201234%205678&countryCode=IT",
        ] {
            let (status, _, body) = get(uri).await;

            assert_eq!(status, StatusCode::OK, "uri {}", uri);
            assert_eq!(
                body,
                r#"{"phoneNumber":"+390612345678","countryCode":"IT","areaCode":"06","localPhoneNumber":"12345678"}"#
            );
        }
    }

    #[actix_web::test]
    async fn test_non_geographic_number() {
        let (status, _, body) = get("/v1/phone-numbers?phoneNumber=%2B800%201234%205678").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            r#"{"phoneNumber":"+80012345678","countryCode":"001","localPhoneNumber":"12345678"}"#
        );
    }

    #[actix_web::test]
    async fn test_non_geographic_region_hint_is_invalid() {
        let (status, _, body) = get("/v1/phone-numbers?phoneNumber=12345678&countryCode=001").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            r#"{"phoneNumber":"12345678","error":{"countryCode":"invalid value"}}"#
        );
    }

    #[actix_web::test]
    async fn test_other_methods_not_allowed() {
        let app = test::init_service(create_app(app_state())).await;

        for req in [
            test::TestRequest::post(),
            test::TestRequest::put(),
            test::TestRequest::delete(),
            test::TestRequest::patch(),
        ] {
            let req = req
                .uri("/v1/phone-numbers?phoneNumber=%2B12125690123")
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
            let body = test::read_body(resp).await;
            assert_eq!(body, "Method Not Allowed");
        }
    }

    #[actix_web::test]
    async fn test_unknown_path() {
        let (status, _, body) = get("/v1/phone-number?phoneNumber=%2B12125690123").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "not_found");
    }
}
