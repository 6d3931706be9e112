use std::{env, path::PathBuf};

use dotenvy::dotenv;

pub const DEFAULT_PROJECT_DIR: &str = "./.qualidations";
const PROJECT_DIR_VAR: &str = "QUALIDATOR_DIR";

/// The project directory, `QUALIDATOR_DIR` taking precedence over the
/// default. A missing `.env` file is fine; the variable can also come from
/// the process environment.
pub fn project_dir() -> PathBuf {
    let _ = dotenv();
    project_dir_from(env::vars())
}

fn project_dir_from(vars: impl Iterator<Item = (String, String)>) -> PathBuf {
    let mut dir = None;
    for (key, value) in vars {
        if key == PROJECT_DIR_VAR {
            dir = Some(value);
        }
    }
    dir.map_or_else(|| PathBuf::from(DEFAULT_PROJECT_DIR), PathBuf::from)
}
