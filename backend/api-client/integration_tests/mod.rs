mod helpers;

mod diagnostics;
mod factory;
mod process_env;
mod services;
mod transport;
