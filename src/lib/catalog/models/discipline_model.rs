//! Module with the discipline model built from the semester's CSV listing
use std::{fmt, str::FromStr};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::catalog::error::CatalogError;

#[derive(Deserialize, Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Category {
    #[serde(rename = "Obrigatória")]
    Mandatory,
    #[serde(rename = "Optativa Cinema")]
    ElectiveCinema,
    #[serde(rename = "Geral ICA")]
    GeneralIca,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Mandatory => "Obrigatória",
            Category::ElectiveCinema => "Optativa Cinema",
            Category::GeneralIca => "Geral ICA",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Week days a discipline may meet on, serialized as their CSV tokens.
#[derive(Deserialize, Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayOfWeek {
    #[serde(rename = "SEG")]
    Monday,
    #[serde(rename = "TER")]
    Tuesday,
    #[serde(rename = "QUA")]
    Wednesday,
    #[serde(rename = "QUI")]
    Thursday,
    #[serde(rename = "SEX")]
    Friday,
}

impl DayOfWeek {
    pub fn token(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "SEG",
            DayOfWeek::Tuesday => "TER",
            DayOfWeek::Wednesday => "QUA",
            DayOfWeek::Thursday => "QUI",
            DayOfWeek::Friday => "SEX",
        }
    }
}

impl FromStr for DayOfWeek {
    type Err = CatalogError;

    /// Case-insensitive lookup of a CSV day token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SEG" => Ok(DayOfWeek::Monday),
            "TER" => Ok(DayOfWeek::Tuesday),
            "QUA" => Ok(DayOfWeek::Wednesday),
            "QUI" => Ok(DayOfWeek::Thursday),
            "SEX" => Ok(DayOfWeek::Friday),
            _ => Err(CatalogError::UnknownDay(s.to_owned())),
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Deserialize, Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bimester {
    #[serde(rename = "1º")]
    First,
    #[serde(rename = "2º")]
    Second,
}

impl Bimester {
    pub fn label(&self) -> &'static str {
        match self {
            Bimester::First => "1º",
            Bimester::Second => "2º",
        }
    }
}

impl fmt::Display for Bimester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One meeting of a discipline. `time` is kept as the raw range text.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq, Hash)]
pub struct Schedule {
    pub day: DayOfWeek,
    pub time: String,
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Discipline {
    pub id: String,
    pub code: String,
    pub name: String,
    pub category: Category,
    pub semester: Option<String>,
    pub turma: Option<String>,
    pub schedules: Vec<Schedule>,
    pub period: String,
    pub bimester: Option<Bimester>,
    pub description: Option<String>,
}
