//! Content domain: RON data loading, validation and the resources built
//! from it.

mod data;
mod loader;
mod registry;
mod validation;


pub use data::{DataFile, GameplayDefaults, LevelDef, TileDef, builtin_levels};
pub use loader::{ContentLoadError, load_all_content, parse_data_file, parse_single_file};
pub use registry::LevelLibrary;
pub use validation::{ValidationError, validate_levels};

use bevy::prelude::*;
use std::path::Path;

use crate::core::GameSession;
use crate::transitions::TransitionPool;

const CONTENT_PATH: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelLibrary>()
            .add_systems(Startup, load_content);
    }
}

/// Load levels and tuning, falling back to built-in content on failure,
/// then insert every resource the other domains read.
fn load_content(mut commands: Commands) {
    let (levels, defaults) = match load_all_content(Path::new(CONTENT_PATH)) {
        Ok(content) => content,
        Err(errors) => {
            for e in &errors {
                warn!("{}", e);
            }
            warn!("Using built-in levels and gameplay defaults");
            (builtin_levels(), GameplayDefaults::default())
        }
    };

    let levels = usable_levels(levels);
    let library = LevelLibrary::new(levels);
    info!("{}", library.summary());

    let pool = match defaults.noise_seed {
        Some(seed) => {
            info!("Transition noise seeded with {}", seed);
            TransitionPool::with_seed(seed)
        }
        None => TransitionPool::default(),
    };

    commands.insert_resource(GameSession::new(library.ids(), defaults.session));
    commands.insert_resource(library);
    commands.insert_resource(defaults.movement);
    commands.insert_resource(defaults.collision);
    commands.insert_resource(defaults.feedback);
    commands.insert_resource(pool);
}

/// Drop levels that fail validation; fall back to the built-in level when
/// none survive.
fn usable_levels(mut levels: Vec<LevelDef>) -> Vec<LevelDef> {
    let errors = validate_levels(&levels);
    for e in &errors {
        error!("{}", e);
    }
    levels.retain(|level| !errors.iter().any(|e| e.level_id == level.id));

    if levels.is_empty() {
        warn!("No valid levels loaded, using the built-in level");
        return builtin_levels();
    }
    levels
}
