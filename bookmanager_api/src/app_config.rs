use paperclip::actix::web;

use crate::handlers;

pub fn config_app(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(handlers::health)))
        .service(web::resource("/all").route(web::get().to(handlers::get_all_books)))
        .service(web::resource("/get/{book_id}").route(web::get().to(handlers::get_book)))
        .service(web::resource("/add").route(web::post().to(handlers::add_book)))
        .service(web::resource("/update").route(web::put().to(handlers::update_book)))
        .service(
            web::resource("/delete/{book_id}").route(web::delete().to(handlers::delete_book)),
        );
}
