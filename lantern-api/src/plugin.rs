use std::{fs, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use lantern_config::PluginsConfig;

use crate::{error::ApiError, metadata::MetadataStore};

/// Identity of a plugin, usually a `const` in the plugin crate.
///
/// `name` doubles as the owner recorded on every [`crate::metadata::MetadataValue`]
/// the plugin stores and as the name of its data folder.
#[derive(Debug, Clone)]
pub struct PluginMetadata<'s> {
    pub name: &'s str,
    pub version: &'s str,
    pub authors: &'s str,
    pub description: &'s str,
}

/// What the host hands a plugin during its lifecycle.
pub struct Context {
    metadata: PluginMetadata<'static>,
    plugins: PluginsConfig,
    metadata_store: Arc<MetadataStore>,
}

impl Context {
    #[must_use]
    pub fn new(
        metadata: PluginMetadata<'static>,
        plugins: PluginsConfig,
        metadata_store: Arc<MetadataStore>,
    ) -> Self {
        Self {
            metadata,
            plugins,
            metadata_store,
        }
    }

    pub fn get_metadata(&self) -> &PluginMetadata<'static> {
        &self.metadata
    }

    /// The plugin's data folder, created if it does not exist yet.
    pub fn get_data_folder(&self) -> Result<PathBuf, ApiError> {
        let path = self.plugins.folder.join(self.metadata.name);
        if !path.exists() {
            log::debug!("creating data folder {}", path.display());
            fs::create_dir_all(&path)?;
        }
        Ok(path)
    }

    pub fn metadata_store(&self) -> &Arc<MetadataStore> {
        &self.metadata_store
    }

    /// Drops every metadata value this plugin stored.
    pub fn release_metadata(&self) {
        self.metadata_store.invalidate_all(self.metadata.name);
    }
}

/// Lifecycle hooks the host calls on a plugin.
#[async_trait]
pub trait Plugin: Send + Sync + 'static {
    /// Called once before the plugin is used. An `Err` carries the reason
    /// the host reports for refusing to enable the plugin.
    async fn on_load(&mut self, _context: &Context) -> Result<(), String> {
        Ok(())
    }

    /// Called once when the host drops the plugin. The default releases every
    /// metadata value the plugin stored.
    async fn on_unload(&mut self, context: &Context) -> Result<(), String> {
        context.release_metadata();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use async_trait::async_trait;
    use lantern_config::PluginsConfig;

    use super::{Context, Plugin, PluginMetadata};
    use crate::metadata::{MetadataStore, MetadataValue};

    const METADATA: PluginMetadata<'static> = PluginMetadata {
        name: "tagger",
        version: "0.1.0",
        authors: "lantern",
        description: "tags blocks",
    };

    struct Tagger {
        loaded: bool,
    }

    #[async_trait]
    impl Plugin for Tagger {
        async fn on_load(&mut self, context: &Context) -> Result<(), String> {
            context.metadata_store().set_metadata(
                "world:0:0:0",
                "tag",
                MetadataValue::new(context.get_metadata(), "spawn"),
            );
            self.loaded = true;
            Ok(())
        }
    }

    fn context(folder: &std::path::Path) -> Context {
        Context::new(
            METADATA,
            PluginsConfig {
                folder: folder.to_path_buf(),
            },
            Arc::new(MetadataStore::new()),
        )
    }

    #[tokio::test]
    async fn unload_releases_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let context = context(dir.path());
        let mut plugin = Tagger { loaded: false };

        plugin.on_load(&context).await.unwrap();
        assert!(plugin.loaded);
        assert!(context.metadata_store().has_metadata("world:0:0:0", "tag"));

        plugin.on_unload(&context).await.unwrap();
        assert!(!context.metadata_store().has_metadata("world:0:0:0", "tag"));
    }

    #[test]
    fn data_folder_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let context = context(dir.path());

        let folder = context.get_data_folder().unwrap();
        assert_eq!(folder, dir.path().join("tagger"));
        assert!(folder.is_dir());
        // Second call finds the existing folder.
        assert_eq!(context.get_data_folder().unwrap(), folder);
    }
}
