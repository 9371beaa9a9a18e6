pub mod api;
pub mod health;
pub mod reading;
pub mod zodiac;

use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::init))
        .service(web::scope("/api").configure(api::init))
        .service(web::scope("/zodiac").configure(zodiac::init))
        .configure(reading::init);
}
