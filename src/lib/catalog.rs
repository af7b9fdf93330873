//! Course catalog browser: CSV loading, filtering, selection and the weekly grid.
pub mod catalog_getter;
pub mod csv_parser;
pub mod error;
pub mod filter;
pub mod helpers;
pub mod models;
pub mod row_mapper;
pub mod run_tool;
pub mod schedule_grid;
pub mod selection_store;
pub mod state;
