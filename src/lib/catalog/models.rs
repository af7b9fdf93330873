use std::{collections::BTreeSet, path::PathBuf};

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use self::discipline_model::Category;

pub mod discipline_model;

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json, that tells where the catalog CSV lives and which semester it describes.
/// 2. Path to selection.json, that keeps the disciplines the user picked between launches.
/// 3. The command to run against the loaded catalog.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    #[arg(long, value_name = "FILE", default_value = "selection.json")]
    pub selection_json_path: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the disciplines as cards, optionally filtered
    List {
        /// Case-insensitive text looked up in names and codes
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, value_enum)]
        category: Option<Category>,
    },
    /// Select or unselect disciplines by id
    Toggle {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Drop the whole selection
    Clear,
    /// Show the selected disciplines on the weekly grid
    Grid,
}

/// A model for describing configuration of the tool.
/// Consists of:
/// 1. Where to get the catalog from: an http(s) URL or a local path
/// 2. Semester label shown in the output headers
#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_catalog_source")]
    pub catalog_source: String,
    #[serde(default = "default_semester_label")]
    pub semester_label: String,
}

fn default_catalog_source() -> String {
    "disciplines.csv".to_owned()
}

fn default_semester_label() -> String {
    "2026.1".to_owned()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog_source: default_catalog_source(),
            semester_label: default_semester_label(),
        }
    }
}

/// Model for `selection.json`
#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct Selection {
    pub selected_ids: BTreeSet<String>,
}
