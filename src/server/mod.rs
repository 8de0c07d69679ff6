pub mod app;
pub mod error;

mod deserializers;
mod pagination;
mod routes;
