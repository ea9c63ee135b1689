mod helpers;
mod session;
mod shortener_client;
mod views;
