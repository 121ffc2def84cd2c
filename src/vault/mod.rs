pub mod codec;
pub mod form;
pub mod handlers;
pub mod models;
pub mod ports;
pub mod render;
pub mod secret_string;
pub mod seed;
pub mod store;
pub mod view;
