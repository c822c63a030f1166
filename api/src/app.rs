//! Application state and factory
//!
//! This module wires the validation service into an Actix-web application.

use actix_web::{middleware::Logger, web, App};

use pv_core::NumberingPlan;

use crate::handlers::{method_not_allowed, not_found};
use crate::routes::phone_numbers::{validate_phone_number, AppState};

/// Path of the single validation endpoint
pub const PHONE_NUMBERS_PATH: &str = "/v1/phone-numbers";

/// Create and configure the application with all dependencies
pub fn create_app<P>(
    app_state: web::Data<AppState<P>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: NumberingPlan + 'static,
{
    App::new()
        // Add application state
        .app_data(app_state)
        .wrap(Logger::default())
        .service(
            web::resource(PHONE_NUMBERS_PATH)
                .route(web::get().to(validate_phone_number::<P>))
                // Every other method on this path
                .default_service(web::to(method_not_allowed)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}
