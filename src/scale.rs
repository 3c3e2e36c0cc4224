//! Serving-size scaling of ingredient quantities

use crate::error::CatalogError;
use crate::model::Recipe;
use log::{debug, warn};
use regex::Regex;
use std::sync::OnceLock;

static LEADING_NUMBER: OnceLock<Regex> = OnceLock::new();

fn leading_number() -> &'static Regex {
    LEADING_NUMBER.get_or_init(|| Regex::new(r"^\d+(\.\d+)?").unwrap())
}

/// Scale the leading number of `quantity` from `original` to `target` servings
///
/// The result is rounded to two decimals and printed without trailing
/// zeros. Any text after the number is re-appended after a single space.
/// Tokens without a leading number, or whose number overflows when scaled,
/// are returned unchanged.
///
/// ```
/// use recipe_catalog::scale::scale;
///
/// assert_eq!(scale("2 cups", 4, 8).unwrap(), "4 cups");
/// assert_eq!(scale("1.5 tsp", 3, 1).unwrap(), "0.5 tsp");
/// assert_eq!(scale("pinch of salt", 4, 8).unwrap(), "pinch of salt");
/// ```
pub fn scale(quantity: &str, original: u32, target: u32) -> Result<String, CatalogError> {
    if original == 0 || target == 0 {
        return Err(CatalogError::InvalidServings { original, target });
    }

    let Some(number) = leading_number().find(quantity) else {
        return Ok(quantity.to_string());
    };

    // The pattern only matches ASCII digits with an optional fraction
    let value: f64 = match number.as_str().parse() {
        Ok(value) => value,
        Err(_) => return Ok(quantity.to_string()),
    };
    let scaled = value / f64::from(original) * f64::from(target);
    let rounded = (scaled * 100.0).round() / 100.0;
    if !rounded.is_finite() {
        warn!("Quantity '{}' is too large to scale, keeping it as written", quantity);
        return Ok(quantity.to_string());
    }

    let unit = quantity[number.end()..].trim();
    debug!(
        "Scaled '{}' from {} to {} servings: {}",
        quantity, original, target, rounded
    );

    if unit.is_empty() {
        Ok(format!("{}", rounded))
    } else {
        Ok(format!("{} {}", rounded, unit))
    }
}

/// Scale a full ingredient line such as `"500g chicken thighs"`
///
/// The first space-separated token is treated as the quantity; the rest of
/// the line is kept as written.
pub fn scale_ingredient(line: &str, original: u32, target: u32) -> Result<String, CatalogError> {
    match line.split_once(' ') {
        Some((quantity, rest)) => Ok(format!("{} {}", scale(quantity, original, target)?, rest)),
        None => scale(line, original, target),
    }
}

/// Every ingredient line of `recipe` scaled to `target` servings
pub fn scale_recipe(recipe: &Recipe, target: u32) -> Result<Vec<String>, CatalogError> {
    recipe
        .ingredients
        .iter()
        .map(|line| scale_ingredient(line, recipe.servings, target))
        .collect()
}

/// Serving count selected by the user, never below one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Servings(u32);

impl Servings {
    pub fn new(count: u32) -> Self {
        Self(count.max(1))
    }

    /// Start from the count the recipe's quantities are written for
    pub fn for_recipe(recipe: &Recipe) -> Self {
        Self::new(recipe.servings)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn set(&mut self, count: u32) {
        self.0 = count.max(1);
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1).max(1);
    }
}

impl Default for Servings {
    fn default() -> Self {
        Self(4)
    }
}
