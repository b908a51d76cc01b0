use strum::Display;

use crate::view::{MenuView, RecipeDetailView};

/// Modals the page can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ModalId {
    Preferences,
    Recipe,
}

/// Controls the controller disables while a request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ControlId {
    RegenerateAll,
    ConfirmMenu,
    RegenerateDay(u8),
}

impl ControlId {
    pub fn idle_label(&self) -> &'static str {
        match self {
            ControlId::RegenerateAll => "Regenerate entire menu",
            ControlId::ConfirmMenu => "Confirm and add to cart",
            ControlId::RegenerateDay(_) => "Swap",
        }
    }

    pub fn busy_label(&self) -> &'static str {
        match self {
            ControlId::RegenerateAll => "Regenerating...",
            ControlId::ConfirmMenu => "Adding to cart...",
            ControlId::RegenerateDay(_) => "Generating...",
        }
    }
}

/// Whether the cart badge is shown at all. Pure function of the count: the
/// badge is hidden, not zeroed, when the cart is empty.
pub fn badge_visible(count: u32) -> bool {
    count > 0
}

/// Rendering and interaction surface the controller drives.
///
/// Implementations own the actual widgets; the controller only expresses
/// intent. The method set mirrors the mutations the page performs.
pub trait UiSurface {
    /// Blocking user-facing message.
    fn alert(&mut self, message: &str);
    /// Make the modal visible and lock page scrolling.
    fn open_modal(&mut self, modal: ModalId);
    /// Hide the modal and release the scroll lock.
    fn close_modal(&mut self, modal: ModalId);
    fn set_control(&mut self, control: ControlId, enabled: bool, label: &str);
    /// Reveal the menu section with a transient placeholder while the first
    /// menu is generated.
    fn show_menu_loading(&mut self);
    /// Replace the menu section contents and scroll the section into view.
    fn show_menu(&mut self, view: &MenuView);
    fn show_recipe_detail(&mut self, view: &RecipeDetailView);
    /// Update the cart badge count; see [`badge_visible`].
    fn set_cart_badge(&mut self, count: u32);
}

/// Prints UI effects to stdout. Used by the CLI harness.
#[derive(Debug, Default)]
pub struct TerminalUi;

impl UiSurface for TerminalUi {
    fn alert(&mut self, message: &str) {
        println!("{message}");
    }

    fn open_modal(&mut self, modal: ModalId) {
        tracing::debug!(%modal, "modal opened");
    }

    fn close_modal(&mut self, modal: ModalId) {
        tracing::debug!(%modal, "modal closed");
    }

    fn set_control(&mut self, control: ControlId, enabled: bool, label: &str) {
        tracing::debug!(%control, enabled, label, "control updated");
    }

    fn show_menu_loading(&mut self) {
        println!("Generating your personalized menu...");
    }

    fn show_menu(&mut self, view: &MenuView) {
        println!("Weekly menu, total {}:", view.total_cost);
        for card in &view.cards {
            println!(
                "  {}: {} ({} min, {} kcal, {})",
                card.day_label, card.name, card.prep_time_minutes, card.calories, card.cost
            );
        }
    }

    fn show_recipe_detail(&mut self, view: &RecipeDetailView) {
        println!(
            "{} ({} minutes, {} calories)",
            view.name, view.prep_time_minutes, view.calories
        );
        println!("Ingredients:");
        for ingredient in &view.ingredients {
            println!(
                "  - {} ({} {})",
                ingredient.name, ingredient.quantity, ingredient.unit
            );
        }
        println!("Preparation:");
        for (number, step) in view.steps.iter().enumerate() {
            println!("  {}. {step}", number + 1);
        }
    }

    fn set_cart_badge(&mut self, count: u32) {
        if badge_visible(count) {
            tracing::info!(count, "cart badge updated");
        } else {
            tracing::debug!("cart badge hidden");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_hidden_only_when_empty() {
        assert!(!badge_visible(0));
        assert!(badge_visible(1));
        assert!(badge_visible(12));
    }

    #[test]
    fn controls_have_distinct_busy_labels() {
        assert_ne!(
            ControlId::RegenerateAll.idle_label(),
            ControlId::RegenerateAll.busy_label()
        );
        assert_eq!(ControlId::RegenerateDay(3).idle_label(), "Swap");
    }
}
