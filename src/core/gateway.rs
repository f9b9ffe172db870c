//! Storage gateway: CRUD over posts, resources and the site configuration
//!
//! Every mutation reads the full value under its key, changes it in memory
//! and writes the full value back. A value that no longer parses is treated
//! as absent and replaced by its default on the next write.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::ids::{Clock, IdGenerator, SystemClock};
use super::model::{
    BlogPost, PostDraft, PostPatch, RecordId, Resource, ResourceDraft, ResourcePatch, SiteConfig,
};
use super::store::{KeyValueStore, StoreError};

pub const POSTS_KEY: &str = "blog_posts";
pub const RESOURCES_KEY: &str = "resources";
pub const CONFIG_KEY: &str = "site_config";

/// Gateway failure
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("no record with id {0}")]
    NotFound(RecordId),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("could not serialize '{key}': {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Outcome of decoding one stored key
enum Stored<T> {
    Absent,
    Malformed,
    Value(T),
}

/// CRUD access to the site content held in a key-value store
pub struct StorageGateway<S> {
    store: S,
    clock: Box<dyn Clock>,
    ids: IdGenerator,
    date_format: String,
}

impl<S: KeyValueStore> StorageGateway<S> {
    /// Gateway over `store` using the wall clock
    pub fn new(store: S) -> Self {
        Self::with_clock(store, Box::new(SystemClock))
    }

    pub fn with_clock(store: S, clock: Box<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            ids: IdGenerator::new(),
            date_format: "%-d/%-m/%Y".to_string(),
        }
    }

    /// Override the chrono format used for post dates
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Underlying store
    #[allow(dead_code)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Seed every key that is absent or unreadable; safe to call repeatedly
    pub fn initialize(&mut self) -> GatewayResult<()> {
        if !matches!(self.load::<Vec<BlogPost>>(POSTS_KEY)?, Stored::Value(_)) {
            self.save(POSTS_KEY, &Vec::<BlogPost>::new())?;
        }
        if !matches!(self.load::<Vec<Resource>>(RESOURCES_KEY)?, Stored::Value(_)) {
            self.save(RESOURCES_KEY, &Vec::<Resource>::new())?;
        }
        if !matches!(self.load::<SiteConfig>(CONFIG_KEY)?, Stored::Value(_)) {
            self.save(CONFIG_KEY, &SiteConfig::default())?;
            tracing::info!("Seeded default site configuration");
        }
        Ok(())
    }

    // Posts

    /// All posts, most recent first
    pub fn list_posts(&self) -> GatewayResult<Vec<BlogPost>> {
        self.load_or_default(POSTS_KEY)
    }

    pub fn find_post(&self, id: RecordId) -> GatewayResult<Option<BlogPost>> {
        Ok(self.list_posts()?.into_iter().find(|p| p.id == id))
    }

    /// Store a new post at the front of the collection
    pub fn add_post(&mut self, draft: PostDraft) -> GatewayResult<BlogPost> {
        let mut posts = self.list_posts()?;
        let now = self.clock.now();
        let existing = self.stored_ids()?;
        let post = BlogPost {
            id: self.ids.next(now, existing),
            title: draft.title,
            content: draft.content,
            image: draft.image,
            date: now.format(&self.date_format).to_string(),
        };
        posts.insert(0, post.clone());
        self.save(POSTS_KEY, &posts)?;
        tracing::info!("Added post {} ({} total)", post.id, posts.len());
        Ok(post)
    }

    /// Merge `patch` over the post with `id`
    pub fn update_post(&mut self, id: RecordId, patch: PostPatch) -> GatewayResult<BlogPost> {
        let mut posts = self.list_posts()?;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(GatewayError::NotFound(id))?;
        patch.apply(post);
        let updated = post.clone();
        self.save(POSTS_KEY, &posts)?;
        tracing::info!("Updated post {}", id);
        Ok(updated)
    }

    /// Replace the post with `id` wholesale, keeping its id and date
    #[cfg(test)]
    pub fn replace_post(&mut self, id: RecordId, post: BlogPost) -> GatewayResult<BlogPost> {
        let mut posts = self.list_posts()?;
        let slot = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(GatewayError::NotFound(id))?;
        *slot = BlogPost {
            id,
            date: slot.date.clone(),
            ..post
        };
        let replaced = slot.clone();
        self.save(POSTS_KEY, &posts)?;
        tracing::info!("Replaced post {}", id);
        Ok(replaced)
    }

    /// Remove the post with `id`, if any
    pub fn delete_post(&mut self, id: RecordId) -> GatewayResult<()> {
        let mut posts = self.list_posts()?;
        posts.retain(|p| p.id != id);
        self.save(POSTS_KEY, &posts)?;
        tracing::info!("Deleted post {}", id);
        Ok(())
    }

    // Resources

    /// All resources, most recent first
    pub fn list_resources(&self) -> GatewayResult<Vec<Resource>> {
        self.load_or_default(RESOURCES_KEY)
    }

    #[allow(dead_code)]
    pub fn find_resource(&self, id: RecordId) -> GatewayResult<Option<Resource>> {
        Ok(self.list_resources()?.into_iter().find(|r| r.id == id))
    }

    pub fn add_resource(&mut self, draft: ResourceDraft) -> GatewayResult<Resource> {
        let mut resources = self.list_resources()?;
        let now = self.clock.now();
        let existing = self.stored_ids()?;
        let resource = Resource {
            id: self.ids.next(now, existing),
            title: draft.title,
            description: draft.description,
            file: draft.file,
            kind: draft.kind,
        };
        resources.insert(0, resource.clone());
        self.save(RESOURCES_KEY, &resources)?;
        tracing::info!("Added resource {} ({} total)", resource.id, resources.len());
        Ok(resource)
    }

    #[allow(dead_code)]
    pub fn update_resource(&mut self, id: RecordId, patch: ResourcePatch) -> GatewayResult<Resource> {
        let mut resources = self.list_resources()?;
        let resource = resources
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(GatewayError::NotFound(id))?;
        patch.apply(resource);
        let updated = resource.clone();
        self.save(RESOURCES_KEY, &resources)?;
        tracing::info!("Updated resource {}", id);
        Ok(updated)
    }

    pub fn delete_resource(&mut self, id: RecordId) -> GatewayResult<()> {
        let mut resources = self.list_resources()?;
        resources.retain(|r| r.id != id);
        self.save(RESOURCES_KEY, &resources)?;
        tracing::info!("Deleted resource {}", id);
        Ok(())
    }

    // Configuration

    pub fn get_config(&self) -> GatewayResult<SiteConfig> {
        self.load_or_default(CONFIG_KEY)
    }

    /// Overwrite the site configuration
    pub fn update_config(&mut self, config: SiteConfig) -> GatewayResult<SiteConfig> {
        self.save(CONFIG_KEY, &config)?;
        tracing::info!("Updated site configuration");
        Ok(config)
    }

    // Helpers

    /// Ids of every stored post and resource
    fn stored_ids(&self) -> GatewayResult<Vec<RecordId>> {
        let posts = self.list_posts()?.into_iter().map(|p| p.id);
        let resources = self.list_resources()?.into_iter().map(|r| r.id);
        Ok(posts.chain(resources).collect())
    }

    fn load<T: DeserializeOwned>(&self, key: &'static str) -> GatewayResult<Stored<T>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(Stored::Absent);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Stored::Value(value)),
            Err(e) => {
                tracing::warn!("Malformed value under '{}', using default: {}", key, e);
                Ok(Stored::Malformed)
            }
        }
    }

    fn load_or_default<T: DeserializeOwned + Default>(&self, key: &'static str) -> GatewayResult<T> {
        Ok(match self.load(key)? {
            Stored::Value(value) => value,
            Stored::Absent | Stored::Malformed => T::default(),
        })
    }

    fn save<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> GatewayResult<()> {
        let raw = serde_json::to_string(value).map_err(|source| GatewayError::Encode { key, source })?;
        self.store.set(key, raw)?;
        Ok(())
    }
}
