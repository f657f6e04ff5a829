mod auth;
mod config;
mod error;
mod path_segment;
mod query;
mod response_shape;
