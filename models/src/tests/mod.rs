mod dto;
mod shorten_builder;
