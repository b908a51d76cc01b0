use crate::api::MenuApi;
use crate::events::Action;
use crate::menu::{Menu, Preferences, PreferencesForm, Recipe};
use crate::ui::{ControlId, ModalId, UiSurface};
use crate::view::{MenuView, RecipeDetailView};

const MSG_FORM_INVALID: &str = "Please check the form values and try again.";
const MSG_GENERATE_FAILED: &str =
    "There was a problem generating the menu. Please try again.";
const MSG_REGENERATE_FAILED: &str = "There was a problem regenerating the recipe.";
const MSG_CART_FAILED: &str = "There was a problem adding the ingredients to the cart.";
const MSG_CART_EMPTY: &str = "Your cart is empty. Generate a menu and confirm it first.";

/// In-memory state for one page session.
///
/// Constructed empty at startup and discarded when the session ends; nothing
/// is persisted anywhere.
#[derive(Debug, Default)]
pub struct SessionState {
    pub current_menu: Option<Menu>,
    pub preferences: Option<Preferences>,
    /// Mirror of the items the backend last reported for the cart.
    pub cart: Vec<serde_json::Value>,
    /// Recipe currently shown in the detail modal.
    pub current_recipe: Option<Recipe>,
}

/// The view controller: owns the session state, talks to the backend and
/// drives the UI surface.
///
/// All operations run on the single UI task. In-flight requests are not
/// coordinated, deduplicated or cancelled; when two overlap, the last
/// completion wins. Errors never escape an operation: each one resolves to
/// UI effects and leaves prior state untouched on failure.
pub struct Controller<A, U> {
    api: A,
    ui: U,
    state: SessionState,
}

impl<A: MenuApi, U: UiSurface> Controller<A, U> {
    pub fn new(api: A, ui: U) -> Self {
        Self {
            api,
            ui,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub async fn dispatch(&mut self, action: Action) {
        match action {
            Action::StartPlanning => self.ui.open_modal(ModalId::Preferences),
            Action::SubmitPreferences(form) => self.submit_preferences(form).await,
            Action::CloseModal(modal) => self.ui.close_modal(modal),
            Action::ModalBackdropClick {
                modal,
                target_is_root,
            } => {
                if target_is_root {
                    self.ui.close_modal(modal);
                }
            }
            Action::RegenerateMenu => self.regenerate_menu().await,
            Action::RegenerateDay(day) => self.regenerate_day(day).await,
            Action::ViewRecipe(recipe_id) => self.view_recipe(recipe_id).await,
            Action::ConfirmMenu => self.confirm_menu().await,
            Action::ViewCart => self.view_cart(),
        }
    }

    /// Form submit: capture the preferences, close the modal, then generate
    /// the menu. On failure the previous menu state stays as it was.
    pub async fn submit_preferences(&mut self, form: PreferencesForm) {
        let preferences = match form.into_preferences() {
            Ok(preferences) => preferences,
            Err(err) => {
                tracing::warn!(error = %err, "rejected preferences form");
                self.ui.alert(MSG_FORM_INVALID);
                return;
            }
        };

        self.state.preferences = Some(preferences.clone());
        self.ui.close_modal(ModalId::Preferences);
        self.ui.show_menu_loading();

        match self.api.generate_menu(&preferences).await {
            Ok(menu) => self.show_menu(menu),
            Err(err) => {
                tracing::error!(error = %err, "menu generation failed");
                self.ui.alert(MSG_GENERATE_FAILED);
            }
        }
    }

    /// Regenerate the whole menu from the captured preferences. Does nothing
    /// when no preferences were submitted yet.
    pub async fn regenerate_menu(&mut self) {
        let Some(preferences) = self.state.preferences.clone() else {
            return;
        };

        let control = ControlId::RegenerateAll;
        self.ui.set_control(control, false, control.busy_label());

        match self.api.generate_menu(&preferences).await {
            Ok(menu) => self.show_menu(menu),
            Err(err) => {
                tracing::error!(error = %err, "menu regeneration failed");
                self.ui.alert(MSG_GENERATE_FAILED);
            }
        }

        self.ui.set_control(control, true, control.idle_label());
    }

    /// Regenerate one day's recipe. Does nothing without captured
    /// preferences; the originating control stays disabled for the duration
    /// of the call and is restored whatever the outcome.
    pub async fn regenerate_day(&mut self, day: u8) {
        let Some(preferences) = self.state.preferences.clone() else {
            return;
        };

        let control = ControlId::RegenerateDay(day);
        self.ui.set_control(control, false, control.busy_label());

        match self.api.regenerate_recipe(day, &preferences).await {
            Ok(recipe) => self.replace_recipe(day, recipe),
            Err(err) => {
                tracing::error!(error = %err, day, "recipe regeneration failed");
                self.ui.alert(MSG_REGENERATE_FAILED);
            }
        }

        self.ui.set_control(control, true, control.idle_label());
    }

    /// Fetch and show the full recipe detail. Failures are logged but not
    /// surfaced; the modal simply does not open.
    pub async fn view_recipe(&mut self, recipe_id: i64) {
        match self.api.fetch_recipe(recipe_id).await {
            Ok(recipe) => {
                let view = RecipeDetailView::new(&recipe);
                self.state.current_recipe = Some(recipe);
                self.ui.show_recipe_detail(&view);
                self.ui.open_modal(ModalId::Recipe);
            }
            Err(err) => {
                tracing::error!(error = %err, recipe_id, "recipe detail fetch failed");
            }
        }
    }

    /// Send the current menu's recipe ids to the cart. The session cart is
    /// replaced wholesale with whatever the backend reports back.
    pub async fn confirm_menu(&mut self) {
        let Some(menu) = self.state.current_menu.as_ref() else {
            return;
        };
        let recipe_ids: Vec<i64> = menu.recipes.iter().map(|recipe| recipe.id).collect();

        let control = ControlId::ConfirmMenu;
        self.ui.set_control(control, false, control.busy_label());

        match self.api.add_to_cart(&recipe_ids).await {
            Ok(cart) => {
                self.state.cart = cart.items;
                self.ui.set_cart_badge(cart.item_count);
                self.ui.alert(&format!(
                    "Added {} products to the cart for a total of €{:.2}",
                    cart.item_count, cart.total
                ));
            }
            Err(err) => {
                tracing::error!(error = %err, "add to cart failed");
                self.ui.alert(MSG_CART_FAILED);
            }
        }

        self.ui.set_control(control, true, control.idle_label());
    }

    /// Local read only; the cart is populated exclusively by a confirmed
    /// menu, never computed client-side.
    pub fn view_cart(&mut self) {
        if self.state.cart.is_empty() {
            self.ui.alert(MSG_CART_EMPTY);
            return;
        }

        self.ui
            .alert(&format!("Cart: {} products", self.state.cart.len()));
        tracing::debug!(contents = ?self.state.cart, "cart contents");
    }

    /// Store the menu and rebuild the whole grid.
    fn show_menu(&mut self, menu: Menu) {
        let view = MenuView::new(&menu);
        self.state.current_menu = Some(menu);
        self.ui.show_menu(&view);
    }

    /// Swap in the regenerated recipe for the given day and re-render the
    /// full grid, not just the affected card.
    fn replace_recipe(&mut self, day: u8, recipe: Recipe) {
        let Some(index) = usize::from(day).checked_sub(1) else {
            return;
        };
        let Some(menu) = self.state.current_menu.as_mut() else {
            return;
        };
        match menu.recipes.get_mut(index) {
            Some(slot) => *slot = recipe,
            None => {
                tracing::warn!(day, "regenerated day is outside the current menu");
                return;
            }
        }

        let view = MenuView::new(menu);
        self.ui.show_menu(&view);
    }
}
