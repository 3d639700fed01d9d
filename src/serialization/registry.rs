use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use log::{debug, warn};

use crate::config::EngineConfig;
use crate::expression::Expression;
use crate::serialization::errors::LoadError;
use crate::serialization::loaders;
use crate::serialization::stream::TokenStream;

/// Rebuilds one node kind. The node's tag has already been consumed.
pub type Loader = fn(&mut LoadCursor<'_, '_>) -> Result<Expression, LoadError>;

static GLOBAL_REGISTRY: OnceLock<LoaderRegistry> = OnceLock::new();

/// Maps type tags to the loader that rebuilds that node kind
#[derive(Clone, Default)]
pub struct LoaderRegistry {
    loaders: HashMap<String, Loader>,
}

impl fmt::Debug for LoaderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LoaderRegistry")
            .field("tags", &self.tags())
            .finish()
    }
}

impl LoaderRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with a loader for every built-in node kind
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register("Constant", loaders::load_constant);
        registry.register("Variable", loaders::load_variable);
        registry.register("Parentheses", loaders::load_parentheses);
        registry.register("Op", loaders::load_op);
        registry
    }

    /// Shared built-in registry, built on first use and never changed after.
    pub fn global() -> &'static LoaderRegistry {
        GLOBAL_REGISTRY.get_or_init(|| {
            debug!("Initializing global loader registry");
            Self::builtin()
        })
    }

    /// Returns the loader previously registered under `tag`, if any.
    pub fn register(&mut self, tag: impl Into<String>, loader: Loader) -> Option<Loader> {
        let tag = tag.into();
        debug!("Registering loader for tag '{}'", tag);
        self.loaders.insert(tag, loader)
    }

    pub fn get(&self, tag: &str) -> Option<Loader> {
        self.loaders.get(tag).copied()
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.loaders.contains_key(tag)
    }

    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.loaders.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Reads one expression from the stream, leaving any later tokens unread.
    ///
    /// # Errors
    ///
    /// Returns an error if a tag has no loader, a loader finds a malformed or
    /// missing token, or the tree is deeper than `config.max_depth`.
    pub fn load(
        &self,
        stream: &mut TokenStream<'_>,
        config: &EngineConfig,
    ) -> Result<Expression, LoadError> {
        let mut cursor = LoadCursor {
            registry: self,
            stream,
            depth: 0,
            limit: config.max_depth,
        };
        cursor.load_expression()
    }

    /// Reads exactly one expression from `text`.
    ///
    /// # Errors
    ///
    /// Same as [`LoaderRegistry::load`], plus [`LoadError::TrailingTokens`]
    /// when tokens remain after the expression.
    pub fn load_str(&self, text: &str, config: &EngineConfig) -> Result<Expression, LoadError> {
        debug!("Loading expression from stream: '{}'", text);
        let mut stream = TokenStream::new(text);
        let expr = self.load(&mut stream, config)?;
        if !stream.is_exhausted() {
            let rest = stream.remaining();
            warn!("Trailing tokens after loaded expression: '{}'", rest);
            return Err(LoadError::TrailingTokens(rest));
        }
        Ok(expr)
    }
}

/// Loader-facing view of a load in progress
pub struct LoadCursor<'c, 's> {
    registry: &'c LoaderRegistry,
    stream: &'c mut TokenStream<'s>,
    depth: usize,
    limit: usize,
}

impl<'s> LoadCursor<'_, 's> {
    /// # Errors
    ///
    /// Returns [`LoadError::UnexpectedEnd`] if the stream is exhausted.
    pub fn next_token(&mut self, expected: &'static str) -> Result<&'s str, LoadError> {
        self.stream.next_token(expected)
    }

    /// Reads a tag and hands the rest of the node to its loader.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::UnregisteredTag`] for an unknown tag, or whatever
    /// the loader reports.
    pub fn load_expression(&mut self) -> Result<Expression, LoadError> {
        if self.depth >= self.limit {
            warn!("Serialized tree exceeds depth limit {}", self.limit);
            return Err(LoadError::DepthExceeded { limit: self.limit });
        }

        let tag = self.next_token("type tag")?;
        let loader = self.registry.get(tag).ok_or_else(|| {
            warn!("No loader registered for tag '{}'", tag);
            LoadError::UnregisteredTag(tag.to_string())
        })?;

        self.depth += 1;
        let result = loader(self);
        self.depth -= 1;
        result
    }
}
