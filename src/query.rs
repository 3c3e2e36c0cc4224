//! Read-only queries over a [`RecipeRepository`]
//!
//! Absence of data is never an error here: lookups return `Option`, filters
//! return possibly-empty vectors. The random selections take the random
//! source as an argument so callers can seed it.

use crate::favorites::FavoritesStore;
use crate::model::Recipe;
use crate::repository::RecipeRepository;
use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use std::str::FromStr;

/// Preparation-time bucket used by the cuisine page filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrepTime {
    /// 30 minutes or less
    Quick,
    /// More than 30, up to 60 minutes
    Medium,
    /// More than 60 minutes
    Long,
}

impl PrepTime {
    pub fn contains(&self, minutes: u32) -> bool {
        match self {
            PrepTime::Quick => minutes <= 30,
            PrepTime::Medium => minutes > 30 && minutes <= 60,
            PrepTime::Long => minutes > 60,
        }
    }
}

impl FromStr for PrepTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quick" => Ok(PrepTime::Quick),
            "medium" => Ok(PrepTime::Medium),
            "long" => Ok(PrepTime::Long),
            other => Err(format!(
                "unknown prep time '{}', expected quick, medium or long",
                other
            )),
        }
    }
}

/// Combined criteria for [`QueryEngine::filter`]; unset fields match everything
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub cuisine: Option<String>,
    pub search: Option<String>,
    pub prep_time: Option<PrepTime>,
}

impl RecipeFilter {
    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn prep_time(mut self, prep_time: PrepTime) -> Self {
        self.prep_time = Some(prep_time);
        self
    }
}

/// Recipes sharing a cuisine tag, as shown in the home page preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuisineGroup<'a> {
    pub cuisine: &'a str,
    pub recipes: Vec<&'a Recipe>,
}

#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    repository: &'a RecipeRepository,
}

impl<'a> QueryEngine<'a> {
    pub fn new(repository: &'a RecipeRepository) -> Self {
        Self { repository }
    }

    /// Every recipe in stored order
    pub fn all(&self) -> &'a [Recipe] {
        self.repository.recipes()
    }

    pub fn by_id(&self, id: &str) -> Option<&'a Recipe> {
        let recipe = self.repository.get(id);
        if recipe.is_none() {
            debug!("No recipe with id '{}'", id);
        }
        recipe
    }

    /// Recipes whose cuisine equals `cuisine`, ignoring case, in stored order
    pub fn by_cuisine(&self, cuisine: &str) -> Vec<&'a Recipe> {
        self.repository
            .iter()
            .filter(|recipe| recipe.has_cuisine(cuisine))
            .collect()
    }

    /// Uniformly random selection of `min(limit, total)` distinct recipes
    pub fn popular<R: Rng + ?Sized>(&self, limit: usize, rng: &mut R) -> Vec<&'a Recipe> {
        let candidates: Vec<&'a Recipe> = self.repository.iter().collect();
        sample(candidates, limit, rng)
    }

    /// Random selection of recipes tagged exactly `cuisine`, never including
    /// `exclude_id`
    pub fn related<R: Rng + ?Sized>(
        &self,
        exclude_id: &str,
        cuisine: &str,
        limit: usize,
        rng: &mut R,
    ) -> Vec<&'a Recipe> {
        let candidates: Vec<&'a Recipe> = self
            .repository
            .iter()
            .filter(|recipe| recipe.id != exclude_id && recipe.cuisine == cuisine)
            .collect();
        sample(candidates, limit, rng)
    }

    /// Recipes whose name or any ingredient contains `term`, ignoring case
    ///
    /// A blank term yields no results rather than the whole catalog.
    pub fn search(&self, term: &str) -> Vec<&'a Recipe> {
        let term = term.trim();
        if term.is_empty() {
            debug!("Skipping search for blank term");
            return Vec::new();
        }

        let needle = term.to_lowercase();
        let results: Vec<&'a Recipe> = self
            .repository
            .iter()
            .filter(|recipe| recipe.mentions(&needle))
            .collect();
        debug!("Search for '{}' matched {} recipes", term, results.len());
        results
    }

    /// Recipes matching every criterion set on `filter`, in stored order
    ///
    /// Unlike [`QueryEngine::search`], a blank search term here means no
    /// search criterion at all.
    pub fn filter(&self, filter: &RecipeFilter) -> Vec<&'a Recipe> {
        let needle = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase);

        self.repository
            .iter()
            .filter(|recipe| {
                filter
                    .cuisine
                    .as_deref()
                    .is_none_or(|cuisine| recipe.has_cuisine(cuisine))
            })
            .filter(|recipe| needle.as_deref().is_none_or(|n| recipe.mentions(n)))
            .filter(|recipe| {
                filter
                    .prep_time
                    .is_none_or(|bucket| bucket.contains(recipe.prep_time))
            })
            .collect()
    }

    /// One group per cuisine in order of first appearance, each holding at
    /// most `per_cuisine` recipes in stored order
    pub fn grouped_by_cuisine(&self, per_cuisine: usize) -> Vec<CuisineGroup<'a>> {
        let mut groups: Vec<CuisineGroup<'a>> = Vec::new();

        for recipe in self.repository {
            let position = groups
                .iter()
                .position(|group| recipe.has_cuisine(group.cuisine));
            let group = match position {
                Some(position) => &mut groups[position],
                None => {
                    groups.push(CuisineGroup {
                        cuisine: &recipe.cuisine,
                        recipes: Vec::new(),
                    });
                    let last = groups.len() - 1;
                    &mut groups[last]
                }
            };
            if group.recipes.len() < per_cuisine {
                group.recipes.push(recipe);
            }
        }

        groups
    }

    /// Favorite recipes in the order the store lists them
    ///
    /// Stored ids that no longer resolve to a recipe are skipped.
    pub fn favorites(&self, store: &dyn FavoritesStore) -> Vec<&'a Recipe> {
        store
            .ids()
            .iter()
            .filter_map(|id| {
                let recipe = self.repository.get(id);
                if recipe.is_none() {
                    warn!("Favorite '{}' does not match any recipe", id);
                }
                recipe
            })
            .collect()
    }
}

/// Fisher-Yates shuffle of the whole candidate set, then take the prefix
fn sample<'a, R: Rng + ?Sized>(
    mut candidates: Vec<&'a Recipe>,
    limit: usize,
    rng: &mut R,
) -> Vec<&'a Recipe> {
    if limit == 0 {
        return Vec::new();
    }
    candidates.shuffle(rng);
    candidates.truncate(limit);
    candidates
}
