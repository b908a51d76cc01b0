use crate::menu::PreferencesForm;
use crate::ui::ModalId;

/// Named UI actions, dispatched to the controller.
///
/// Generated elements carry these with their arguments already bound (day
/// number, recipe id) instead of resolving anything through ambient lookup
/// at click time.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The start button: opens the preferences modal.
    StartPlanning,
    /// Preferences form submit.
    SubmitPreferences(PreferencesForm),
    /// Explicit close button on a modal.
    CloseModal(ModalId),
    /// A click somewhere on an open modal. Closes the modal only when the
    /// click target is the modal root itself (the backdrop), not one of its
    /// descendants.
    ModalBackdropClick { modal: ModalId, target_is_root: bool },
    /// Regenerate the whole menu from the captured preferences.
    RegenerateMenu,
    /// Regenerate a single day's recipe (1 = Monday .. 7 = Sunday).
    RegenerateDay(u8),
    /// Fetch and show the full recipe in the detail modal.
    ViewRecipe(i64),
    /// Confirm the current menu and add its ingredients to the cart.
    ConfirmMenu,
    /// Show a summary of the in-memory cart. Local read, no network call.
    ViewCart,
}
