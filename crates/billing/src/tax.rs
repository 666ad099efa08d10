//! Regional Tax Handling
//!
//! Maps a subscriber's region string to a flat tax multiplier. Only the
//! EU and US jurisdictions carry tax; every other region, including the
//! empty string, is billed untaxed.

use serde::{Deserialize, Serialize};

/// EU VAT multiplier (21%)
pub const EU_TAX_MULTIPLIER: f64 = 1.21;

/// US sales tax multiplier (7%)
pub const US_TAX_MULTIPLIER: f64 = 1.07;

/// Tax jurisdiction resolved from a region string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxRegion {
    /// European Union, region code "EU"
    Eu,
    /// United States, region code "US"
    Us,
    /// Any region without a configured tax rule
    Untaxed,
}

impl TaxRegion {
    /// Resolve a region code. Matching is exact and case-sensitive.
    pub fn from_region(region: &str) -> Self {
        match region {
            "EU" => TaxRegion::Eu,
            "US" => TaxRegion::Us,
            _ => TaxRegion::Untaxed,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            TaxRegion::Eu => EU_TAX_MULTIPLIER,
            TaxRegion::Us => US_TAX_MULTIPLIER,
            TaxRegion::Untaxed => 1.0,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            TaxRegion::Eu => "EU",
            TaxRegion::Us => "US",
            TaxRegion::Untaxed => "default",
        }
    }
}

/// Apply the region's tax multiplier to a running price
pub fn apply_tax(price: f64, region: &str) -> f64 {
    price * TaxRegion::from_region(region).multiplier()
}
