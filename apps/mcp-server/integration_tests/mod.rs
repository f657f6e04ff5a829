mod helpers;
mod server;
mod tools;
