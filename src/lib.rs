//! Catalog filtering, WhatsApp enquiry links and spreadsheet import for the
//! Ditel Network Solutions website.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod contact;
pub mod importer;
pub mod models;
pub mod ordered_map;
pub mod repository;
pub mod search_engine;
pub mod slug;
pub mod whatsapp;

#[cfg(test)]
mod test_support;
