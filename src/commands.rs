use std::{
    error::Error,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use crossterm::style::Stylize;
use serde::Serialize;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use crate::{
    checks::{Check, Template},
    config::project_dir,
    display,
    store::{InitOutcome, ProjectStore, RemoveOutcome, StoreError},
};

fn init_standard() -> Result<(), Box<dyn Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn init_debug() -> Result<(), Box<dyn Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Ask on stdout and read one trimmed reply line.
fn prompt<R: BufRead>(input: &mut R, label: &str) -> Result<String, Box<dyn Error>> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut reply = String::new();
    input.read_line(&mut reply)?;
    Ok(reply.trim().to_string())
}

fn write_validation(
    store: &ProjectStore,
    check: Check,
    column: &str,
    query: &str,
) -> Result<PathBuf, StoreError> {
    let stem = format!("{}_{}", column.to_lowercase(), check.name());
    store.write(&stem, query)
}

#[derive(clap::Args)]
#[command(about = "Initialize the qualidations directory", long_about = None)]
pub struct Init {}

impl Init {
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        init_standard()?;
        let store = ProjectStore::new(project_dir());
        match store.init() {
            Ok(InitOutcome::AlreadyExists) => {
                display::warning(&format!(
                    "Directory '{}' already exists.",
                    store.root().display()
                ));
            }
            Ok(InitOutcome::Created) => {
                println!("{}", display::rule('=').cyan());
                display::emphasis("🎉 Welcome to QUALIDATOR! 🎉");
                display::hint("Your data quality journey begins here...");
                println!("{}", display::rule('-').cyan());
                display::success(&format!(
                    "📁 Directory '{}' created successfully.",
                    store.root().display()
                ));
                display::hint("🛠  You can now start adding validations with:");
                display::plain("    qualidator add --name is_not_null");
                display::plain("    qualidator add --name column_values_are_unique");
                display::plain("    qualidator add --name column_max_is_between");
                println!("{}", display::rule('=').cyan());
            }
            Err(err) => display::failure(&format!("❌ Failed to create directory: {err}")),
        }
        Ok(())
    }
}

#[derive(clap::Args)]
#[command(about = "Destroy the qualidations directory", long_about = None)]
pub struct Destroy {
    #[arg(long, help = "Remove the directory even when it is not empty")]
    force: bool,
}

impl Destroy {
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        init_standard()?;
        let store = ProjectStore::new(project_dir());
        match store.destroy(self.force) {
            Ok(()) => {
                println!("{}", display::rule('=').red());
                println!("{}", "⚠ QUALIDATOR PROJECT DESTROYED ⚠".red().bold());
                println!(
                    "{}",
                    format!(
                        "The '{}' directory has been removed.",
                        store.root().display()
                    )
                    .magenta()
                );
                display::hint("We hope you enjoyed your stay. Come back soon!");
                println!("{}", display::rule('=').red());
            }
            Err(StoreError::MissingDirectory { path }) => {
                display::warning(&format!("Directory '{}' does not exist.", path.display()));
            }
            Err(err) => display::failure(&format!("❌ Failed to remove directory: {err}")),
        }
        Ok(())
    }
}

#[derive(clap::Args)]
#[command(about = "Add a validation to the suite", long_about = None)]
pub struct Add {
    #[arg(long, help = "Validation name to add")]
    name: String,
    #[arg(long, help = "Show debug information")]
    debug: bool,
}

impl Add {
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        match self.debug {
            true => init_debug()?,
            false => init_standard()?,
        }
        let store = ProjectStore::new(project_dir());
        if !store.exists() {
            display::failure("❌ Validation directory does not exist. Run `qualidator init` first.");
            return Ok(());
        }
        let Some(check) = Check::parse(&self.name) else {
            display::failure(&format!("❗ Validation '{}' is not supported yet.", self.name));
            return Ok(());
        };

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let column = prompt(&mut input, check.column_prompt())?;
        let query = match check.template() {
            Template::Simple(build) => {
                display::plain(&format!(
                    "✔ Will check that \"{column}\" column {}.",
                    check.summary()
                ));
                build(&column)
            }
            Template::Ranged(build) => {
                let lower = prompt(&mut input, "Please enter the lower bound")?;
                let upper = prompt(&mut input, "Please enter the upper bound")?;
                display::plain(&format!(
                    "✔ Will check that \"{column}\" column {} {lower} and {upper}.",
                    check.summary()
                ));
                build(&column, &lower, &upper)
            }
        };
        info!("generated {} query for column {column}", check.name());

        match write_validation(&store, check, &column, &query) {
            Ok(path) => display::success(&format!("📝 Validation written to '{}'.", path.display())),
            Err(err) => display::failure(&format!("❌ Failed to write validation: {err}")),
        }
        Ok(())
    }
}

#[derive(clap::Args)]
#[command(about = "Remove validation(s) from the suite", long_about = None)]
pub struct Remove {
    #[arg(long, help = "Remove all validations")]
    all: bool,
    #[arg(long, help = "Name of the validation to remove, without the .sql extension")]
    name: Option<String>,
}

impl Remove {
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        init_standard()?;
        let store = ProjectStore::new(project_dir());
        if !store.exists() {
            display::warning("❌ Validation directory does not exist. Run `qualidator init` first.");
            return Ok(());
        }

        // --all takes precedence when both flags are given.
        if self.all {
            match store.remove_all() {
                Ok(count) => display::success(&format!("🗑 Removed {count} validation(s).")),
                Err(err) => display::failure(&format!("❌ Failed to remove validations: {err}")),
            }
            return Ok(());
        }

        if let Some(name) = self.name {
            match store.remove_named(&name) {
                Ok(RemoveOutcome::Removed) => {
                    display::success(&format!("🗑 Removed validation '{name}'."));
                }
                Ok(RemoveOutcome::NotFound) => {
                    display::warning(&format!("⚠ Validation '{name}' not found."));
                }
                Err(err) => display::failure(&format!("❌ Failed to remove validation: {err}")),
            }
            return Ok(());
        }

        display::warning("❗ Please provide either --all or --name option.");
        Ok(())
    }
}

#[derive(Serialize)]
struct ValidationRecord {
    name: String,
    query: String,
}

#[derive(clap::Args)]
#[command(about = "Show already added validations", long_about = None)]
pub struct Show {
    #[arg(long, help = "Emit the validations as JSON instead of a listing")]
    json: bool,
}

impl Show {
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        init_standard()?;
        let store = ProjectStore::new(project_dir());
        if !store.exists() {
            display::warning("❗ No validations found.");
            display::hint("👉 Run `qualidator init` to create the project.");
            return Ok(());
        }
        let stems = match store.list() {
            Ok(stems) => stems,
            Err(err) => {
                display::failure(&format!("❌ Failed to list validations: {err}"));
                return Ok(());
            }
        };

        if self.json {
            let mut records = Vec::with_capacity(stems.len());
            for stem in stems {
                let query = match store.read(&stem) {
                    Ok(query) => query,
                    Err(err) => {
                        display::failure(&format!("❌ Failed to read validation '{stem}': {err}"));
                        return Ok(());
                    }
                };
                records.push(ValidationRecord { name: stem, query });
            }
            println!("{}", serde_json::to_string_pretty(&records)?);
            return Ok(());
        }

        if stems.is_empty() {
            display::warning("📁 Project initialized, but no validations found.");
            display::hint("✨ You can add one using:");
            display::plain("   qualidator add --name is_not_null");
            return Ok(());
        }

        println!("{}", display::rule('=').cyan());
        display::emphasis("📋 VALIDATIONS IN YOUR PROJECT");
        println!("{}", display::rule('-').cyan());
        for (index, stem) in stems.iter().enumerate() {
            display::plain(&format!("{}. {stem}", index + 1));
        }
        println!("{}", display::rule('-').cyan());
        display::success(&format!(
            "✅ Total: {} validation(s) ready to go!",
            stems.len()
        ));
        display::hint("💡 You can remove with:");
        display::plain("   qualidator remove --name your_validation_name");
        println!("{}", display::rule('=').cyan());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use crate::checks::{Check, is_not_null};
    use crate::commands::{prompt, write_validation};
    use crate::store::ProjectStore;

    #[test]
    fn prompt_trims_the_reply() {
        let mut input = "  customers.age  \n".as_bytes();
        let reply = prompt(&mut input, "Please enter the column name to check").unwrap();
        assert_eq!(reply, "customers.age");
    }

    #[test]
    fn add_produces_the_expected_file_and_content() {
        let dir = tempdir().unwrap();
        let store = ProjectStore::new(dir.path().join(".qualidations"));
        store.init().unwrap();

        let query = is_not_null("age");
        let path = write_validation(&store, Check::IsNotNull, "age", &query).unwrap();

        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            "age_is_not_null.sql"
        );
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "SELECT COUNT(*)\nFROM ...\nWHERE age IS NULL;\n"
        );
    }

    #[test]
    fn column_is_lowercased_in_the_file_name() {
        let dir = tempdir().unwrap();
        let store = ProjectStore::new(dir.path().join(".qualidations"));
        store.init().unwrap();

        let query = is_not_null("Age");
        let path = write_validation(&store, Check::IsNotNull, "Age", &query).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            "age_is_not_null.sql"
        );
    }
}
