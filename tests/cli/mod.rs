
mod config;
mod errors;
mod layout;
mod logging;
mod paths;
