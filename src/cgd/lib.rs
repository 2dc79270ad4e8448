#[macro_use] extern crate lazy_static;
#[macro_use] extern crate serde_derive;

pub mod types;
pub mod constants;
pub mod error;
pub mod config;
pub mod ident;
pub mod gene_map;
pub mod variant;
pub mod rows;
pub mod graph;
pub mod mapper;
pub mod db;
pub mod tsv;
pub mod ntriples;
pub mod ingest;
