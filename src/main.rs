use anyhow::Result;
use clap::{Parser, Subcommand};
use supermercai::api::BackendClient;
use supermercai::controller::Controller;
use supermercai::events::Action;
use supermercai::menu::PreferencesForm;
use supermercai::ui::TerminalUi;
use supermercai::view::MenuView;

/// supermercai - Weekly Menu Planning
#[derive(Parser)]
#[command(name = "supermercai")]
#[command(about = "Weekly menu planning client for the SupermercAI backend", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a weekly menu from preferences
    Plan {
        /// Dietary objective (ganar_masa, definir, adelgazar, comer_sano)
        #[arg(long, default_value = "comer_sano")]
        objective: String,

        /// Available cooking time (poco, medio, mucho)
        #[arg(long, default_value = "medio")]
        cooking_time: String,

        /// Number of people to cook for
        #[arg(long, default_value = "2")]
        num_people: String,

        /// Weekly budget in euros
        #[arg(long, default_value = "50")]
        budget: String,

        /// Cuisine style (mediterranea, asiatica, vegetariana)
        #[arg(long, default_value = "mediterranea")]
        cuisine_style: String,

        /// Brand preference (marca_blanca, otras)
        #[arg(long, default_value = "marca_blanca")]
        brand_preference: String,

        /// Regenerate a single day (1-7) after the initial menu
        #[arg(long)]
        swap_day: Option<u8>,

        /// Confirm the menu and add its ingredients to the cart
        #[arg(long)]
        confirm: bool,

        /// Write the rendered menu section to an HTML file
        #[arg(long)]
        html_out: Option<std::path::PathBuf>,
    },
    /// Show the detail of a single recipe
    Recipe {
        /// Recipe id
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = supermercai::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    supermercai::observability::init_observability(
        "supermercai",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let client = BackendClient::new(config.backend.base_url()?);
    let mut controller = Controller::new(client, TerminalUi::default());

    match cli.command {
        Commands::Plan {
            objective,
            cooking_time,
            num_people,
            budget,
            cuisine_style,
            brand_preference,
            swap_day,
            confirm,
            html_out,
        } => {
            let form = PreferencesForm {
                objective,
                cooking_time,
                num_people,
                budget,
                cuisine_style,
                brand_preference,
            };

            controller.dispatch(Action::StartPlanning).await;
            controller.dispatch(Action::SubmitPreferences(form)).await;

            if let Some(day) = swap_day {
                controller.dispatch(Action::RegenerateDay(day)).await;
            }

            if confirm {
                controller.dispatch(Action::ConfirmMenu).await;
                controller.dispatch(Action::ViewCart).await;
            }

            if let Some(path) = html_out {
                if let Some(menu) = controller.state().current_menu.as_ref() {
                    let html = MenuView::new(menu).to_html()?;
                    std::fs::write(&path, html)?;
                    tracing::info!(path = %path.display(), "menu section written");
                }
            }
        }
        Commands::Recipe { id } => {
            controller.dispatch(Action::ViewRecipe(id)).await;
        }
    }

    Ok(())
}
