use askama::Template;

use crate::menu::{Menu, Recipe};

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Day label for a 1-based day number, with a generic fallback beyond the
/// fixed week.
pub fn day_label(day: u8) -> String {
    match day {
        1..=7 => DAY_NAMES[usize::from(day - 1)].to_string(),
        _ => format!("Day {day}"),
    }
}

/// Two-decimal amount with the currency symbol, e.g. `€42.50`.
pub fn format_euros(amount: f64) -> String {
    format!("€{amount:.2}")
}

fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        format!("{quantity}")
    }
}

/// One recipe card in the menu grid.
///
/// Carries the arguments its actions need (recipe id for the detail view,
/// day number for the swap) so handlers can be bound at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCardView {
    pub day: u8,
    pub day_label: String,
    pub recipe_id: i64,
    pub name: String,
    pub description: String,
    pub prep_time_minutes: u32,
    pub calories: u32,
    /// Recomputed as the sum of ingredient prices, independent of any cost
    /// the backend reports for the recipe.
    pub cost: String,
}

impl RecipeCardView {
    pub fn new(recipe: &Recipe, day: u8) -> Self {
        Self {
            day,
            day_label: day_label(day),
            recipe_id: recipe.id,
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            prep_time_minutes: recipe.prep_time_minutes,
            calories: recipe.calories,
            cost: format_euros(recipe.ingredient_cost()),
        }
    }
}

/// The whole menu section: formatted total plus the cards in recipe order.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuView {
    pub total_cost: String,
    pub cards: Vec<RecipeCardView>,
}

impl MenuView {
    pub fn new(menu: &Menu) -> Self {
        let cards = menu
            .recipes
            .iter()
            .enumerate()
            .map(|(index, recipe)| RecipeCardView::new(recipe, index as u8 + 1))
            .collect();

        Self {
            total_cost: format_euros(menu.total_cost),
            cards,
        }
    }

    pub fn to_html(&self) -> Result<String, askama::Error> {
        MenuTemplate { menu: self }.render()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngredientView {
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

/// Recipe detail for the modal: meta line, ingredient list, numbered steps.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDetailView {
    pub name: String,
    pub prep_time_minutes: u32,
    pub calories: u32,
    pub ingredients: Vec<IngredientView>,
    pub steps: Vec<String>,
}

impl RecipeDetailView {
    pub fn new(recipe: &Recipe) -> Self {
        let ingredients = recipe
            .ingredients
            .iter()
            .map(|ingredient| IngredientView {
                name: ingredient.name.clone(),
                quantity: format_quantity(ingredient.quantity),
                unit: ingredient.unit.clone(),
            })
            .collect();

        Self {
            name: recipe.name.clone(),
            prep_time_minutes: recipe.prep_time_minutes,
            calories: recipe.calories,
            ingredients,
            steps: recipe.steps.clone(),
        }
    }

    pub fn to_html(&self) -> Result<String, askama::Error> {
        RecipeDetailTemplate { detail: self }.render()
    }
}

#[derive(Template)]
#[template(path = "menu.html")]
struct MenuTemplate<'a> {
    menu: &'a MenuView,
}

#[derive(Template)]
#[template(path = "recipe_detail.html")]
struct RecipeDetailTemplate<'a> {
    detail: &'a RecipeDetailView,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Ingredient;

    fn recipe(id: i64, prices: &[f64]) -> Recipe {
        Recipe {
            id,
            name: format!("Recipe {id}"),
            description: "A test recipe".to_string(),
            ingredients: prices
                .iter()
                .map(|price| Ingredient {
                    name: "Ingredient".to_string(),
                    quantity: 1.0,
                    unit: "unit".to_string(),
                    price: *price,
                })
                .collect(),
            steps: vec!["Step one".to_string(), "Step two".to_string()],
            prep_time_minutes: 30,
            calories: 400,
        }
    }

    fn menu(recipe_count: usize) -> Menu {
        Menu {
            total_cost: 42.5,
            recipes: (1..=recipe_count as i64)
                .map(|id| recipe(id, &[1.0, 0.5]))
                .collect(),
        }
    }

    #[test]
    fn day_labels_follow_the_fixed_week() {
        assert_eq!(day_label(1), "Monday");
        assert_eq!(day_label(7), "Sunday");
        assert_eq!(day_label(8), "Day 8");
    }

    #[test]
    fn menu_view_renders_one_card_per_recipe_in_order() {
        let view = MenuView::new(&menu(7));
        assert_eq!(view.cards.len(), 7);
        assert_eq!(view.cards[0].day_label, "Monday");
        assert_eq!(view.cards[6].day_label, "Sunday");
        assert_eq!(view.cards[2].recipe_id, 3);
        assert_eq!(view.total_cost, "€42.50");
    }

    #[test]
    fn card_cost_is_the_ingredient_sum_not_the_menu_total() {
        let view = MenuView::new(&menu(1));
        assert_eq!(view.cards[0].cost, "€1.50");
    }

    #[test]
    fn menu_html_contains_every_card_with_bound_arguments() {
        let html = MenuView::new(&menu(7)).to_html().unwrap();
        assert_eq!(html.matches("recipe-card").count(), 7);
        assert!(html.contains("€42.50"));
        assert!(html.contains(r#"data-recipe-id="3""#));
        assert!(html.contains(r#"data-day="7""#));
    }

    #[test]
    fn detail_view_formats_quantities_and_keeps_step_order() {
        let mut source = recipe(9, &[0.75]);
        source.ingredients[0].quantity = 2.5;
        let view = RecipeDetailView::new(&source);
        assert_eq!(view.ingredients[0].quantity, "2.5");
        assert_eq!(view.steps, vec!["Step one", "Step two"]);

        let html = view.to_html().unwrap();
        assert!(html.contains("<ol"));
        assert!(html.contains("Step two"));
    }

    #[test]
    fn whole_quantities_drop_the_decimal_point() {
        assert_eq!(format_quantity(3.0), "3");
        assert_eq!(format_quantity(0.5), "0.5");
    }
}
