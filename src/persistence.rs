//! JSON input and output.
//!
//! Instance format:
//! ```json
//! {"width": 10, "height": 10, "items": [{"name": "A", "width": 4, "height": 4}]}
//! ```
//! Output files repeat the instance and the configuration next to one result
//! per strategy.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::PackingConfig;
use crate::error::PackingError;
use crate::item::Item;
use crate::suitcase::Suitcase;
use crate::Strategy;

/// External representation of an item.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtItem {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// External representation of a suitcase and the items to pack into it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtInstance {
    pub width: u32,
    pub height: u32,
    pub items: Vec<ExtItem>,
}

impl ExtInstance {
    pub fn from_items(width: u32, height: u32, items: &[Item]) -> Self {
        let items = items
            .iter()
            .map(|item| ExtItem {
                name: item.name().to_string(),
                width: item.width(),
                height: item.height(),
            })
            .collect();
        Self {
            width,
            height,
            items,
        }
    }

    /// Validates the instance and builds a suitcase with every item unpacked.
    pub fn to_suitcase(&self) -> Result<Suitcase, PackingError> {
        let items = self
            .items
            .iter()
            .map(|item| Item::new(item.name.as_str(), item.width, item.height))
            .collect::<Result<Vec<_>, _>>()?;
        Suitcase::new(self.width, self.height, items)
    }
}

/// Outcome of one strategy.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StrategyResult {
    pub strategy: Strategy,
    pub area_packed: u64,
    pub capacity: u64,
    /// Names of the packed items, in pack order
    pub packed: Vec<String>,
    /// Names of the items left behind
    pub unpacked: Vec<String>,
}

impl StrategyResult {
    pub fn new(strategy: Strategy, suitcase: &Suitcase) -> Self {
        let names = |items: &[Item]| -> Vec<String> {
            items.iter().map(|item| item.name().to_string()).collect()
        };
        Self {
            strategy,
            area_packed: suitcase.area_packed(),
            capacity: suitcase.capacity(),
            packed: names(suitcase.packed_items()),
            unpacked: names(suitcase.unpacked_items()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PackingOutput {
    pub instance: ExtInstance,
    pub config: PackingConfig,
    pub results: Vec<StrategyResult>,
}

pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    let file = File::open(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse instance file: {}", path.display()))
}

pub fn read_config(path: &Path) -> Result<PackingConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file)).context("incorrect config file format")
}

pub fn write_json(value: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)
        .with_context(|| format!("could not write file: {}", path.display()))?;

    let path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    info!("written to {}", path.display());
    Ok(())
}
