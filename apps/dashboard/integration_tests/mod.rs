mod commands;
mod helpers;
mod tui;
