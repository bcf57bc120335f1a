pub mod chat;
pub mod download;
pub mod health_route;
pub mod history;
pub mod root_route;
pub mod save;
pub mod suggest;
