//! Common utilities for Larder benchmarks
//!
//! Synthetic catalogs and requests shared by the benchmark targets.

#![allow(dead_code)]

use catalog::{Difficulty, Recipe};
use matcher::MatchRequest;

/// Ingredient vocabulary for generated recipes
pub const PANTRY: &[&str] = &[
    "rice",
    "eggs",
    "onion",
    "garlic",
    "pasta",
    "cheese",
    "tomatoes",
    "chicken",
    "broccoli",
    "carrots",
    "bell peppers",
    "potatoes",
    "bread",
    "mushrooms",
    "ground beef",
    "spinach",
    "lentils",
    "tofu",
    "leeks",
    "zucchini",
    "cabbage",
    "chickpeas",
    "bacon",
    "salmon",
];

/// Deterministic catalog of `count` recipes with 3 to 6 required tokens each.
pub fn synthetic_catalog(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|i| {
            let token_count = 3 + i % 4;
            let tokens: Vec<&str> = (0..token_count)
                .map(|j| PANTRY[(i * 7 + j * 5) % PANTRY.len()])
                .collect();
            let difficulty = match i % 3 {
                0 => Difficulty::Easy,
                1 => Difficulty::Medium,
                _ => Difficulty::Hard,
            };
            let duration = 10 + (i % 12) as u32 * 5;
            // Every 11th recipe is unrated.
            let quality = (i % 11 != 0).then(|| 3.0 + (i % 20) as f32 / 10.0);
            Recipe::new(format!("recipe-{i:06}"), tokens, difficulty, duration, quality)
                .with_title(format!("Synthetic Recipe {i}"))
        })
        .collect()
}

/// A request with a few ingredients and no constraints
pub fn open_request() -> MatchRequest {
    MatchRequest::new(["onion", "garlic", "eggs", "pepper"])
}

/// The same ingredients with every constraint set
pub fn constrained_request() -> MatchRequest {
    open_request()
        .with_difficulty("easy")
        .with_max_duration(30)
        .with_restriction("vegetarian")
}
