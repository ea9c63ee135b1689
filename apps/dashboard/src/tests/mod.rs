mod cli;
mod logger;
mod output;
mod state;
mod tui;
