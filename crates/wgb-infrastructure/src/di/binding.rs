//! Bindings and construction recipes
//!
//! A [`Binding`] ties an identity to a [`Recipe`] and the ordered identities
//! of the arguments that recipe needs. Recipes never look anything up
//! themselves: the resolver hands them fully resolved [`Arguments`].

use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

use wgb_domain::error::GraphError;
use wgb_domain::value_objects::Identity;

use super::scope::ScopeId;

/// A constructed, type-erased singleton
pub type Instance = Arc<dyn Any + Send + Sync>;

type FactoryFn = Arc<dyn Fn(&Arguments<'_>) -> Result<Instance, GraphError> + Send + Sync>;

fn erase<F>(factory: F) -> FactoryFn
where
    F: Fn(&Arguments<'_>) -> Result<Instance, GraphError> + Send + Sync + 'static,
{
    Arc::new(factory)
}

/// How an identity is constructed
#[derive(Clone)]
pub enum Recipe {
    /// Run a factory with the resolved arguments
    Factory(FactoryFn),
    /// A pre-built value
    Value(Instance),
    /// Stand-in for the single argument; yields the same instance
    Alias,
}

impl Recipe {
    /// Wrap a typed factory
    ///
    /// # Example
    ///
    /// ```
    /// use wgb_infrastructure::di::Recipe;
    ///
    /// let recipe = Recipe::factory(|args| Ok(args.value::<i64>(0)? * 2));
    /// # let _ = recipe;
    /// ```
    pub fn factory<T, F>(factory: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&Arguments<'_>) -> Result<T, GraphError> + Send + Sync + 'static,
    {
        Recipe::Factory(erase(move |args| {
            factory(args).map(|value| Arc::new(value) as Instance)
        }))
    }

    /// Wrap a ready value
    pub fn value<T: Any + Send + Sync>(value: T) -> Self {
        Recipe::Value(Arc::new(value))
    }

    /// Short name for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Recipe::Factory(_) => "factory",
            Recipe::Value(_) => "value",
            Recipe::Alias => "alias",
        }
    }
}

impl fmt::Debug for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// Instance lifetime; everything in this graph is a singleton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifetime {
    /// One instance per identity, created on first resolution
    #[default]
    Singleton,
}

/// One entry of the binding table
#[derive(Debug, Clone)]
pub struct Binding {
    identity: Identity,
    scope: ScopeId,
    recipe: Recipe,
    args: Vec<Identity>,
    lifetime: Lifetime,
}

impl Binding {
    pub fn new(identity: Identity, scope: ScopeId, recipe: Recipe, args: Vec<Identity>) -> Self {
        Self {
            identity,
            scope,
            recipe,
            args,
            lifetime: Lifetime::Singleton,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Scope that owns this binding
    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// Argument identities in declared order
    pub fn args(&self) -> &[Identity] {
        &self.args
    }

    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }
}

/// A resolved argument: a singleton or an aggregated collection
#[derive(Clone)]
pub enum Resolved {
    /// Cached singleton instance
    Single(Instance),
    /// Freshly assembled collection of cached singletons
    Collection(Vec<Instance>),
}

/// Resolved arguments handed to a factory, with typed accessors
pub struct Arguments<'a> {
    owner: &'a Identity,
    values: Vec<Resolved>,
}

impl<'a> Arguments<'a> {
    pub(crate) fn new(owner: &'a Identity, values: Vec<Resolved>) -> Self {
        Self { owner, values }
    }

    /// Identity being constructed
    pub fn owner(&self) -> &Identity {
        self.owner
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Argument `index` as a shared singleton of type `T`
    pub fn single<T: Any + Send + Sync>(&self, index: usize) -> Result<Arc<T>, GraphError> {
        match self.values.get(index) {
            Some(Resolved::Single(instance)) => downcast(self.owner, index, Arc::clone(instance)),
            Some(Resolved::Collection(_)) => Err(self.mismatch(index, "is a collection")),
            None => Err(self.mismatch(index, "is missing")),
        }
    }

    /// Argument `index` copied out as a plain value
    pub fn value<T: Any + Send + Sync + Clone>(&self, index: usize) -> Result<T, GraphError> {
        self.single::<T>(index).map(|value| (*value).clone())
    }

    /// Argument `index` as a collection of shared singletons of type `T`
    pub fn collection<T: Any + Send + Sync>(
        &self,
        index: usize,
    ) -> Result<Vec<Arc<T>>, GraphError> {
        match self.values.get(index) {
            Some(Resolved::Collection(members)) => members
                .iter()
                .map(|member| downcast(self.owner, index, Arc::clone(member)))
                .collect(),
            Some(Resolved::Single(_)) => Err(self.mismatch(index, "is not a collection")),
            None => Err(self.mismatch(index, "is missing")),
        }
    }

    fn mismatch(&self, index: usize, what: &str) -> GraphError {
        GraphError::construction(self.owner.clone(), format!("argument {index} {what}"))
    }
}

pub(crate) fn downcast<T: Any + Send + Sync>(
    owner: &Identity,
    index: usize,
    instance: Instance,
) -> Result<Arc<T>, GraphError> {
    instance.downcast::<T>().map_err(|_| {
        GraphError::construction(
            owner.clone(),
            format!("argument {index} is not a {}", type_name::<T>()),
        )
    })
}
