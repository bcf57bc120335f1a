pub mod download_request;
pub mod download_route;
