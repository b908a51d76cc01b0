use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::FormError;

/// User preferences captured from the planning form.
///
/// Immutable once captured; held for the page session only. The serialized
/// field names are the Spanish ones the backend expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Preferences {
    #[serde(rename = "objetivo")]
    pub objective: String,
    #[serde(rename = "tiempo_cocina")]
    pub cooking_time: String,
    /// The form carries no allergy inputs yet, so this is always submitted
    /// empty.
    #[serde(rename = "alergias")]
    pub allergies: Vec<String>,
    #[serde(rename = "num_personas")]
    #[validate(range(min = 1))]
    pub num_people: u32,
    #[serde(rename = "presupuesto")]
    #[validate(range(min = 0.01))]
    pub budget: f64,
    #[serde(rename = "estilo_cocina")]
    pub cuisine_style: String,
    #[serde(rename = "preferencia_marca")]
    pub brand_preference: String,
}

/// Raw form fields as submitted, before numeric parsing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PreferencesForm {
    pub objective: String,
    pub cooking_time: String,
    pub num_people: String,
    pub budget: String,
    pub cuisine_style: String,
    pub brand_preference: String,
}

impl PreferencesForm {
    /// Parse the raw fields into a [`Preferences`] record.
    ///
    /// `num_people` is parsed as an integer and `budget` as a decimal;
    /// allergies are fixed to an empty list regardless of input.
    pub fn into_preferences(self) -> Result<Preferences, FormError> {
        let num_people: u32 = self
            .num_people
            .trim()
            .parse()
            .map_err(|_| FormError::invalid("num_people", &self.num_people))?;
        let budget: f64 = self
            .budget
            .trim()
            .parse()
            .map_err(|_| FormError::invalid("budget", &self.budget))?;

        let preferences = Preferences {
            objective: self.objective,
            cooking_time: self.cooking_time,
            allergies: Vec::new(),
            num_people,
            budget,
            cuisine_style: self.cuisine_style,
            brand_preference: self.brand_preference,
        };
        preferences.validate()?;

        Ok(preferences)
    }
}

/// One week of recipes. Index maps to day: 1 = Monday .. 7 = Sunday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    #[serde(rename = "costo_total")]
    pub total_cost: f64,
    #[serde(rename = "recetas")]
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "ingredientes")]
    pub ingredients: Vec<Ingredient>,
    #[serde(rename = "pasos")]
    pub steps: Vec<String>,
    #[serde(rename = "tiempo_preparacion")]
    pub prep_time_minutes: u32,
    #[serde(rename = "calorias")]
    pub calories: u32,
}

impl Recipe {
    /// Sum of the ingredient prices. Displayed recipe costs always come from
    /// this, independent of any cost the backend attaches to the recipe.
    pub fn ingredient_cost(&self) -> f64 {
        self.ingredients.iter().map(|i| i.price).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "cantidad")]
    pub quantity: f64,
    #[serde(rename = "unidad")]
    pub unit: String,
    #[serde(rename = "precio")]
    pub price: f64,
}

/// Shopping cart as last reported by the backend.
///
/// Items are opaque to the client and never interpreted or summed locally;
/// the whole record is replaced on every confirmed add-to-cart call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<serde_json::Value>,
    #[serde(rename = "num_items")]
    pub item_count: u32,
    pub total: f64,
}
