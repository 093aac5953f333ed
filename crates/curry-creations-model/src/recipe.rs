// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::iter::Sum;

pub const ID_MAX_LEN: usize = 128;
pub const TITLE_MAX_LEN: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    Empty(&'static str),
    Trimmed(&'static str),
    TooLong(&'static str, usize),
    InvalidFormat(&'static str),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::Trimmed(name) => {
                write!(f, "{name} must not contain leading/trailing whitespace")
            }
            Self::TooLong(name, max) => write!(f, "{name} exceeds max length {max}"),
            Self::InvalidFormat(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct RecipeId(String);

impl RecipeId {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty("recipe_id"));
        }
        if input.trim() != input {
            return Err(ParseError::Trimmed("recipe_id"));
        }
        if input.len() > ID_MAX_LEN {
            return Err(ParseError::TooLong("recipe_id", ID_MAX_LEN));
        }
        if !input
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return Err(ParseError::InvalidFormat(
                "recipe_id must be a lowercase slug of [a-z0-9-]",
            ));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RecipeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Currency amount stored in integer cents; dollars exist only at the
/// display boundary.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty("price"));
        }
        let (dollars_raw, cents_raw) = match input.split_once('.') {
            Some((d, c)) => (d, c),
            None => (input, "0"),
        };
        if cents_raw.len() > 2 {
            return Err(ParseError::InvalidFormat(
                "price must have at most two decimal places",
            ));
        }
        let dollars = dollars_raw
            .parse::<u64>()
            .map_err(|_| ParseError::InvalidFormat("price dollars must be an integer"))?;
        let cents = cents_raw
            .parse::<u64>()
            .map_err(|_| ParseError::InvalidFormat("price cents must be an integer"))?;
        let cents = if cents_raw.len() == 1 { cents * 10 } else { cents };
        Ok(Self(dollars * 100 + cents))
    }

    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self(0), Self::saturating_add)
    }
}

/// Aggregate review score, 0.0 to 5.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    pub fn parse(raw: f64) -> Result<Self, ParseError> {
        if !raw.is_finite() || !(0.0..=5.0).contains(&raw) {
            return Err(ParseError::InvalidFormat(
                "rating must be between 0.0 and 5.0",
            ));
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "Easy" => Ok(Self::Easy),
            "Medium" => Ok(Self::Medium),
            "Hard" => Ok(Self::Hard),
            _ => Err(ParseError::InvalidFormat(
                "difficulty must be one of 'Easy', 'Medium', 'Hard'",
            )),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const SPICE_MARKER_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct SpiceLevel(u8);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpiceMarker {
    Active,
    Inactive,
}

impl SpiceLevel {
    pub fn parse(raw: u8) -> Result<Self, ParseError> {
        if !(1..=5).contains(&raw) {
            return Err(ParseError::InvalidFormat(
                "spice level must be between 1 and 5",
            ));
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            1 => "Mild",
            2 => "Medium",
            3 => "Spicy",
            4 => "Very Spicy",
            _ => "Extremely Hot",
        }
    }

    /// Five ordered markers, the first `level` active.
    #[must_use]
    pub fn markers(self) -> [SpiceMarker; SPICE_MARKER_COUNT] {
        let mut out = [SpiceMarker::Inactive; SPICE_MARKER_COUNT];
        for slot in out.iter_mut().take(self.0 as usize) {
            *slot = SpiceMarker::Active;
        }
        out
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct RecipeSummary {
    pub id: RecipeId,
    pub title: String,
    pub image: String,
    pub price: Price,
    pub rating: Rating,
    pub review_count: u64,
    pub cook_time: String,
    pub difficulty: Difficulty,
    pub spice_level: SpiceLevel,
    pub cuisine: String,
    pub description: String,
}

impl RecipeSummary {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        id: RecipeId,
        title: String,
        image: String,
        price: Price,
        rating: Rating,
        review_count: u64,
        cook_time: String,
        difficulty: Difficulty,
        spice_level: SpiceLevel,
        cuisine: String,
        description: String,
    ) -> Self {
        Self {
            id,
            title,
            image,
            price,
            rating,
            review_count,
            cook_time,
            difficulty,
            spice_level,
            cuisine,
            description,
        }
    }

    pub fn validate(&self) -> Result<(), ParseError> {
        if self.title.trim().is_empty() {
            return Err(ParseError::Empty("title"));
        }
        if self.title.len() > TITLE_MAX_LEN {
            return Err(ParseError::TooLong("title", TITLE_MAX_LEN));
        }
        if self.image.trim().is_empty() {
            return Err(ParseError::Empty("image"));
        }
        if self.cook_time.trim().is_empty() {
            return Err(ParseError::Empty("cook_time"));
        }
        if self.cuisine.trim().is_empty() {
            return Err(ParseError::Empty("cuisine"));
        }
        if self.description.trim().is_empty() {
            return Err(ParseError::Empty("description"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct NutritionFacts {
    pub calories: u32,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub fiber: String,
}

impl NutritionFacts {
    #[must_use]
    pub fn new(calories: u32, protein: String, carbs: String, fat: String, fiber: String) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
            fiber,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct ChefProfile {
    pub name: String,
    pub bio: String,
    pub avatar: String,
}

impl ChefProfile {
    #[must_use]
    pub fn new(name: String, bio: String, avatar: String) -> Self {
        Self { name, bio, avatar }
    }

    pub fn validate(&self) -> Result<(), ParseError> {
        if self.name.trim().is_empty() {
            return Err(ParseError::Empty("chef name"));
        }
        if self.bio.trim().is_empty() {
            return Err(ParseError::Empty("chef bio"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct RecipeDetail {
    pub summary: RecipeSummary,
    pub servings: u32,
    pub prep_time: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub tips: Vec<String>,
    pub nutrition: NutritionFacts,
    pub chef: ChefProfile,
    pub ingredient_teaser: String,
    pub instruction_teaser: String,
}

impl RecipeDetail {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        summary: RecipeSummary,
        servings: u32,
        prep_time: String,
        ingredients: Vec<String>,
        instructions: Vec<String>,
        tips: Vec<String>,
        nutrition: NutritionFacts,
        chef: ChefProfile,
        ingredient_teaser: String,
        instruction_teaser: String,
    ) -> Self {
        Self {
            summary,
            servings,
            prep_time,
            ingredients,
            instructions,
            tips,
            nutrition,
            chef,
            ingredient_teaser,
            instruction_teaser,
        }
    }

    #[must_use]
    pub fn id(&self) -> &RecipeId {
        &self.summary.id
    }

    pub fn validate(&self) -> Result<(), ParseError> {
        self.summary.validate()?;
        self.chef.validate()?;
        if self.servings == 0 {
            return Err(ParseError::InvalidFormat("servings must be >= 1"));
        }
        if self.prep_time.trim().is_empty() {
            return Err(ParseError::Empty("prep_time"));
        }
        if self.ingredients.is_empty() {
            return Err(ParseError::Empty("ingredients"));
        }
        if self.instructions.is_empty() {
            return Err(ParseError::Empty("instructions"));
        }
        if self.ingredients.iter().any(|i| i.trim().is_empty()) {
            return Err(ParseError::InvalidFormat(
                "ingredient entries must be non-empty",
            ));
        }
        if self.instructions.iter().any(|i| i.trim().is_empty()) {
            return Err(ParseError::InvalidFormat(
                "instruction steps must be non-empty",
            ));
        }
        if self.ingredient_teaser.trim().is_empty() {
            return Err(ParseError::Empty("ingredient_teaser"));
        }
        if self.instruction_teaser.trim().is_empty() {
            return Err(ParseError::Empty("instruction_teaser"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_id_accepts_slug() {
        let id = RecipeId::parse("butter-chicken").expect("slug");
        assert_eq!(id.as_str(), "butter-chicken");
    }

    #[test]
    fn recipe_id_rejects_uppercase_and_whitespace() {
        assert!(RecipeId::parse("Butter-Chicken").is_err());
        assert!(RecipeId::parse(" butter-chicken").is_err());
        assert!(RecipeId::parse("").is_err());
    }

    #[test]
    fn price_parses_dollar_strings_exactly() {
        assert_eq!(Price::parse("5.99").expect("price").cents(), 599);
        assert_eq!(Price::parse("7").expect("price").cents(), 700);
        assert_eq!(Price::parse("2.5").expect("price").cents(), 250);
        assert!(Price::parse("5.999").is_err());
        assert!(Price::parse("").is_err());
    }

    #[test]
    fn price_displays_two_decimals() {
        assert_eq!(Price::from_cents(599).to_string(), "5.99");
        assert_eq!(Price::from_cents(1647).to_string(), "16.47");
        assert_eq!(Price::from_cents(700).to_string(), "7.00");
        assert_eq!(Price::from_cents(5).to_string(), "0.05");
    }

    #[test]
    fn spice_markers_split_at_level() {
        let level = SpiceLevel::parse(3).expect("level");
        let markers = level.markers();
        let active = markers.iter().filter(|m| **m == SpiceMarker::Active).count();
        assert_eq!(active, 3);
        assert_eq!(markers.len() - active, 2);
        assert_eq!(level.label(), "Spicy");
    }

    #[test]
    fn spice_labels_cover_all_levels() {
        let expected = ["Mild", "Medium", "Spicy", "Very Spicy", "Extremely Hot"];
        for (raw, label) in (1..=5).zip(expected) {
            assert_eq!(SpiceLevel::parse(raw).expect("level").label(), label);
        }
        assert!(SpiceLevel::parse(0).is_err());
        assert!(SpiceLevel::parse(6).is_err());
    }

    #[test]
    fn rating_bounds() {
        assert!(Rating::parse(4.8).is_ok());
        assert!(Rating::parse(5.1).is_err());
        assert!(Rating::parse(-0.1).is_err());
        assert!(Rating::parse(f64::NAN).is_err());
    }
}
