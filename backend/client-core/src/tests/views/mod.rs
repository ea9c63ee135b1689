mod analytics;
mod format;
mod navigation;
mod profile;
mod reports;
