pub mod api_route;
pub mod default_route;
pub mod health_check_route;
pub mod search_route;
pub mod views;
