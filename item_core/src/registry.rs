use crate::config::ItemFileConfig;
use crate::item::Item;
use crate::ConfigError;
use std::collections::HashMap;
use std::path::Path;

/// Registry of item templates, loaded from TOML files
#[derive(Debug, Default)]
pub struct ItemRegistry {
    templates: HashMap<String, Item>,
}

impl ItemRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all item files from a directory (recursively)
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        registry.load_dir(dir)?;
        Ok(registry)
    }

    /// Load items from a directory recursively
    fn load_dir(&mut self, dir: &Path) -> Result<(), ConfigError> {
        if !dir.exists() {
            return Ok(());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(dir.to_path_buf()),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ConfigError::Io {
                error: e,
                path: Some(dir.to_path_buf()),
            })?;
            let path = entry.path();

            if path.is_dir() {
                self.load_dir(&path)?;
            } else if path.extension().is_some_and(|ext| ext == "toml") {
                self.load_file(&path)?;
            }
        }

        Ok(())
    }

    /// Load a single item file
    fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;

        self.insert_toml(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                error,
                path: Some(path.to_path_buf()),
            },
            ConfigError::Validation { message, .. } => ConfigError::Validation {
                message,
                path: Some(path.to_path_buf()),
            },
            other => other,
        })
    }

    /// Parse one item file from a string and register it
    pub fn insert_toml(&mut self, content: &str) -> Result<(), ConfigError> {
        let config: ItemFileConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse { error: e, path: None })?;

        let item = config
            .into_item()
            .map_err(|message| ConfigError::Validation { message, path: None })?;

        if self.templates.contains_key(&item.id) {
            return Err(ConfigError::Validation {
                message: format!("duplicate item id '{}'", item.id),
                path: None,
            });
        }

        tracing::debug!(id = %item.id, "registered item template");
        self.templates.insert(item.id.clone(), item);
        Ok(())
    }

    /// Get a template by ID
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.templates.get(id)
    }

    /// Check if a template exists
    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// List all template IDs
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(|s| s.as_str())
    }

    /// Create a fresh, unowned item from a template
    pub fn spawn(&self, id: &str) -> Option<Item> {
        self.get(id).cloned()
    }
}
