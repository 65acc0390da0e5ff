pub mod config;
pub mod logging;

pub mod caption;
pub mod categories;
pub mod downloader;
pub mod extractor;
pub mod gallery;
pub mod http;
pub mod pipeline;
pub mod record;
pub mod storage;
pub mod table;
pub mod url_model;
pub mod wikitext;
