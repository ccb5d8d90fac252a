use config::{Config, ConfigError, Environment, File, FileFormat};
use gridpath_search::{AdjacencyRule, Coord, Grid, GridError, OpenSetKind};
use serde::Deserialize;
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Frontend settings. Missing fields take the built-in 20x20 defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid: GridSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub width: usize,
    pub height: usize,
    pub start: Coord,
    pub goal: Coord,
    pub adjacency: AdjacencyRule,
    pub open_set: OpenSetKind,
}

impl Default for GridSettings {
    fn default() -> Self {
        GridSettings {
            width: 20,
            height: 20,
            start: Coord::new(0, 1),
            goal: Coord::new(15, 11),
            adjacency: AdjacencyRule::Legacy,
            open_set: OpenSetKind::SortedList,
        }
    }
}

impl GridSettings {
    /// Builds the lattice and places the configured endpoints.
    pub fn build_grid(&self) -> Result<Grid, GridError> {
        let mut grid = Grid::with_rule(self.width, self.height, self.adjacency)?;
        grid.set_start(self.start)?;
        grid.set_goal(self.goal)?;
        Ok(grid)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Blank margin around each cell, as a fraction of the cell pitch.
    pub cell_gap: f32,
    /// Obstacle probability used by the scatter key.
    pub scatter_density: f64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        // 4 px out of a 16 px pitch
        DisplaySettings {
            cell_gap: 0.25,
            scatter_density: 0.25,
        }
    }
}

/// `GRIDPATH_GRID__WIDTH=32` overrides `grid.width`.
fn environment() -> Environment {
    Environment::with_prefix("GRIDPATH")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Loads `config/default.toml` if present, then `GRIDPATH_*` environment overrides.
pub fn load_settings() -> Result<Settings, ConfigError> {
    info!("Attempting to load configuration from {}", DEFAULT_CONFIG_PATH);

    let settings = Config::builder()
        .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(false))
        .add_source(environment())
        .build()
        .and_then(|config| config.try_deserialize::<Settings>());

    match settings {
        Ok(settings) => {
            info!("Successfully loaded configuration: {:?}", settings);
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}
