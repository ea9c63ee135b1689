mod callback;
mod paths;
mod store;
