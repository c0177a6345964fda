//! Built-in defaults for the reference deployment
//!
//! These reproduce the world the tool was first written for. Everything here
//! can be overridden from the config file.

pub const DEFAULT_SAVE_ROOT: &str = "Saves/Multiplayer/VanillaBestSettings";

/// Subdirectory of the save root holding isometric region data
pub const ISO_REGION_DIR: &str = "isoregiondata";

/// Suffix appended to the save root's name for the player database directory
pub const PLAYER_DIR_SUFFIX: &str = "_player";

pub const CELL_REGION: &str = "cell";
pub const CHUNK_REGION: &str = "chunk";

pub const CELL_X: std::ops::Range<i32> = 6596..6866;
pub const CELL_Y: std::ops::Range<i32> = 5286..5568;

pub const CHUNK_X: std::ops::Range<i32> = 21..23;
pub const CHUNK_Y: std::ops::Range<i32> = 17..18;

/// Category to region assignments
pub const CATEGORIES: [(&str, &str); 3] = [
    ("map", CELL_REGION),
    ("chunkdata", CHUNK_REGION),
    ("zpop", CHUNK_REGION),
];

pub const CONFIG_DIR_NAME: &str = "zprune";
pub const CONFIG_FILE_NAME: &str = "config.toml";
