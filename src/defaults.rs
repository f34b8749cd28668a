use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Instant;
use tracing::{info, warn};

use crate::error::Error;
use crate::site_config::{Service, Testimonial, WorkingHours};

// Include default tables at compile time
const DEFAULT_TABLES_JSON: &str = include_str!("../defaults/dental.json");

/// File picked up from the working directory when no path is given.
pub const LOCAL_DEFAULTS_FILE: &str = "site_defaults.json";

/// Profile fields for the generated doctor entry. `{business}` in `bio` is
/// replaced with the business name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub title: String,
    pub specialization: String,
    pub experience: String,
    pub bio: String,
}

/// Static domain defaults the synthesizer falls back on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultTables {
    pub services: Vec<Service>,
    pub working_hours: WorkingHours,
    pub taglines: Vec<String>,
    pub testimonials: Vec<Testimonial>,
    pub doctor: DoctorProfile,
    pub whatsapp_message: String,
    pub style_keywords: String,
}

static EMBEDDED: LazyLock<DefaultTables> = LazyLock::new(|| {
    DefaultTables::from_json(DEFAULT_TABLES_JSON)
        .unwrap_or_else(|e| panic!("embedded default tables are invalid: {e}"))
});

impl DefaultTables {
    /// The tables compiled into the binary.
    pub fn embedded() -> &'static DefaultTables {
        &EMBEDDED
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        let tables: DefaultTables =
            serde_json::from_str(json).map_err(|e| Error::Defaults(e.to_string()))?;
        if tables.taglines.is_empty() {
            return Err(Error::Defaults("at least one tagline is required".into()));
        }
        Ok(tables)
    }

    pub fn default_tagline(&self) -> &str {
        // from_json guarantees at least one entry
        self.taglines.first().map(String::as_str).unwrap_or_default()
    }
}

/// Resolves the default tables: an explicit file, else `site_defaults.json`
/// in the working directory, else the embedded copy.
pub fn load_default_tables(defaults_path: Option<&Path>) -> Result<DefaultTables> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "default_tables",
        "Starting default table loading"
    );

    let tables = if let Some(path) = defaults_path {
        info!(action = "load", component = "defaults_file", file_path = ?path, "Loading defaults from specified file");
        if !path.exists() {
            anyhow::bail!("Defaults file not found: {:?}", path);
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read defaults file {:?}", path))?;
        DefaultTables::from_json(&content)
            .with_context(|| format!("Invalid defaults file {:?}", path))?
    } else {
        let local_file = Path::new(LOCAL_DEFAULTS_FILE);
        let local = if local_file.exists() {
            info!(action = "load", component = "local_defaults_file", file_path = ?local_file, "Loading defaults from working directory");
            let content = fs::read_to_string(local_file)?;
            match DefaultTables::from_json(&content) {
                Ok(tables) => Some(tables),
                Err(e) => {
                    warn!(action = "parse", component = "local_defaults_file", error = %e, "Ignoring invalid defaults file");
                    None
                }
            }
        } else {
            None
        };

        local.unwrap_or_else(|| {
            info!(
                action = "load",
                component = "embedded_defaults",
                "Using embedded default tables"
            );
            DefaultTables::embedded().clone()
        })
    };

    info!(
        action = "complete",
        component = "default_tables",
        service_count = tables.services.len(),
        tagline_count = tables.taglines.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Default tables ready"
    );
    Ok(tables)
}

/// Writes the embedded tables to `site_defaults.json` for local editing.
pub fn init_default_tables() -> Result<()> {
    let local_file = Path::new(LOCAL_DEFAULTS_FILE);

    if local_file.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first if you want to reinitialize.",
            LOCAL_DEFAULTS_FILE
        );
    }

    fs::write(local_file, DEFAULT_TABLES_JSON)?;
    println!("Created {} with default tables", LOCAL_DEFAULTS_FILE);

    Ok(())
}
