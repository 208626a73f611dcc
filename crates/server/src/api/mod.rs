pub mod activity;
pub mod error;
pub mod handlers;
pub mod lists;
pub mod middleware;
pub mod routes;
pub mod titles;

pub use routes::create_router;
