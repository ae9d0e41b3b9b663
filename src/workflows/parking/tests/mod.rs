mod catalog;
mod common;
mod rules;
