use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ApiError;
use crate::menu::{Cart, Menu, Preferences, Recipe};

/// Backend operations the controller depends on.
#[async_trait]
pub trait MenuApi {
    /// POST /api/generar-menu
    async fn generate_menu(&self, preferences: &Preferences) -> Result<Menu, ApiError>;
    /// POST /api/regenerar-receta
    async fn regenerate_recipe(&self, day: u8, preferences: &Preferences)
        -> Result<Recipe, ApiError>;
    /// GET /api/receta/{id}
    async fn fetch_recipe(&self, recipe_id: i64) -> Result<Recipe, ApiError>;
    /// POST /api/agregar-a-carrito
    async fn add_to_cart(&self, recipe_ids: &[i64]) -> Result<Cart, ApiError>;
}

/// HTTP client for the SupermercAI backend.
///
/// Requests carry no timeout and are never retried: a failed call is
/// terminal for the user action that issued it, and a slow one simply keeps
/// its originating control disabled until the response arrives.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }
}

#[derive(Deserialize)]
struct MenuEnvelope {
    success: bool,
    menu: Option<Menu>,
}

#[derive(Deserialize)]
struct RecipeEnvelope {
    success: bool,
    #[serde(rename = "receta")]
    recipe: Option<Recipe>,
}

#[derive(Deserialize)]
struct CartEnvelope {
    success: bool,
    #[serde(rename = "carrito")]
    cart: Option<Cart>,
}

#[derive(Serialize)]
struct RegenerateRequest<'a> {
    #[serde(rename = "dia")]
    day: u8,
    #[serde(rename = "preferencias")]
    preferences: &'a Preferences,
}

#[derive(Serialize)]
struct AddToCartRequest<'a> {
    #[serde(rename = "recetas_ids")]
    recipe_ids: &'a [i64],
}

#[async_trait]
impl MenuApi for BackendClient {
    async fn generate_menu(&self, preferences: &Preferences) -> Result<Menu, ApiError> {
        let url = self.endpoint("/api/generar-menu")?;
        let response = self.http.post(url).json(preferences).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let envelope: MenuEnvelope = response.json().await?;
        match envelope {
            MenuEnvelope {
                success: true,
                menu: Some(menu),
            } => Ok(menu),
            _ => Err(ApiError::Rejected("generar-menu")),
        }
    }

    async fn regenerate_recipe(
        &self,
        day: u8,
        preferences: &Preferences,
    ) -> Result<Recipe, ApiError> {
        let url = self.endpoint("/api/regenerar-receta")?;
        let body = RegenerateRequest { day, preferences };
        let response = self.http.post(url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let envelope: RecipeEnvelope = response.json().await?;
        match envelope {
            RecipeEnvelope {
                success: true,
                recipe: Some(recipe),
            } => Ok(recipe),
            _ => Err(ApiError::Rejected("regenerar-receta")),
        }
    }

    async fn fetch_recipe(&self, recipe_id: i64) -> Result<Recipe, ApiError> {
        let url = self.endpoint(&format!("/api/receta/{recipe_id}"))?;
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let envelope: RecipeEnvelope = response.json().await?;
        match envelope {
            RecipeEnvelope {
                success: true,
                recipe: Some(recipe),
            } => Ok(recipe),
            _ => Err(ApiError::Rejected("receta")),
        }
    }

    async fn add_to_cart(&self, recipe_ids: &[i64]) -> Result<Cart, ApiError> {
        let url = self.endpoint("/api/agregar-a-carrito")?;
        let body = AddToCartRequest { recipe_ids };
        let response = self.http.post(url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let envelope: CartEnvelope = response.json().await?;
        match envelope {
            CartEnvelope {
                success: true,
                cart: Some(cart),
            } => Ok(cart),
            _ => Err(ApiError::Rejected("agregar-a-carrito")),
        }
    }
}
