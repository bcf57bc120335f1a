pub mod save_request;
pub mod save_route;
