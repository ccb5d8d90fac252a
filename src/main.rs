mod graphics; // rendering adapter
mod input; // mouse/keyboard to core edits
mod layout; // cell <-> pixel mapping
mod settings; // TOML + environment configuration

use anyhow::Context;
use gridpath_search::Planner;
use graphics::window_conf;
use layout::Layout;

use macroquad::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::{self, EnvFilter};

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Gridpath (Macroquad Frontend) Started.");

    match run().await {
        Ok(()) => info!("Gridpath finished."),
        Err(e) => {
            error!("Gridpath failed: {:?}", e);
            std::process::exit(1);
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let settings = settings::load_settings().context("Failed to load configuration")?;
    let grid = settings
        .grid
        .build_grid()
        .context("Invalid grid configuration")?;
    let mut planner = Planner::new(grid, settings.grid.open_set);
    info!(
        adjacency = ?planner.grid().rule(),
        open_set = ?planner.open_set(),
        "Search configured"
    );

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let layout = Layout::fit(
            planner.grid(),
            screen_width(),
            screen_height(),
            settings.display.cell_gap,
        );

        if let Some(edit) = input::poll_edit(&layout, planner.grid(), settings.display.scatter_density) {
            match planner.apply(edit) {
                Ok(report) => info!(?edit, "{}", report),
                Err(e) => warn!(?edit, "Edit rejected: {}", e),
            }
        }

        graphics::draw_frame(&planner, &layout);
        next_frame().await
    }

    Ok(())
}
