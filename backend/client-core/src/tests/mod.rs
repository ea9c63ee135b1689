mod config;
mod session;
mod views;
