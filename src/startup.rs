use std::net::TcpListener;

use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    routes::{api_route, default_route, health_check_route, search_route},
    services::Finder,
};

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(default_route::default)
        .service(health_check_route::health_check)
        .service(
            web::scope("/search")
                .service(search_route::search_company)
                .service(search_route::search_person),
        )
        .service(
            web::scope("/api")
                .service(api_route::company_domain)
                .service(api_route::person_email),
        );
}

pub fn run(listener: TcpListener, finder: Finder) -> Result<Server, std::io::Error> {
    let finder = web::Data::new(finder);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .configure(routes)
            .app_data(finder.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
