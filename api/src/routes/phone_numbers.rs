use std::sync::Arc;

use actix_web::{
    http::{header::ContentType, StatusCode},
    web, HttpResponse,
};

use pv_core::{NumberingPlan, PhoneValidationRequest, PhoneValidationService};
use pv_shared::phone::mask_phone_number;

use crate::dto::{PhoneNumberQuery, PhoneNumberResponse};
use crate::handlers::internal_error;

/// Application state that holds shared services
pub struct AppState<P: NumberingPlan> {
    pub validation_service: Arc<PhoneValidationService<P>>,
}

impl<P: NumberingPlan> AppState<P> {
    pub fn new(validation_service: Arc<PhoneValidationService<P>>) -> Self {
        Self { validation_service }
    }
}

/// Handler for GET /v1/phone-numbers
///
/// Validates `phoneNumber`, using `countryCode` as the default region when
/// the number has no `+` calling code.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {"phoneNumber":"+16502530000","countryCode":"US","areaCode":"650","localPhoneNumber":"2530000"}
/// ```
///
/// ## Validation failure (400 Bad Request)
/// ```json
/// {"phoneNumber":"650-253-0000","error":{"countryCode":"required value is missing"}}
/// ```
pub async fn validate_phone_number<P>(
    state: web::Data<AppState<P>>,
    query: web::Query<Vec<(String, String)>>,
) -> HttpResponse
where
    P: NumberingPlan + 'static,
{
    let PhoneNumberQuery {
        phone_number,
        country_code,
    } = PhoneNumberQuery::from(query.into_inner());

    log::debug!(
        "Validating phone number: {}, country code: {:?}",
        mask_phone_number(&phone_number),
        country_code
    );

    let request = PhoneValidationRequest::new(phone_number, country_code);
    let result = state.validation_service.validate(&request);

    let status = if result.is_valid() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    json_response(status, &PhoneNumberResponse::from(result))
}

fn json_response(status: StatusCode, body: &PhoneNumberResponse) -> HttpResponse {
    match serde_json::to_vec(body) {
        Ok(bytes) => HttpResponse::build(status)
            .content_type(ContentType::json())
            .body(bytes),
        Err(err) => {
            log::error!("Failed to encode phone number response: {}", err);
            internal_error()
        }
    }
}
