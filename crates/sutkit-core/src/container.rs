// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Auto-populating object container.
//!
//! [`Container`] constructs systems under test and their collaborators: it
//! generates randomized specimens of data types, freezes instances so the
//! same value is observed everywhere it is requested, and hands trait-object
//! dependencies (real or mock) to injection recipes.
//!
//! Rust has no runtime reflection, so the reflective conveniences of
//! attribute-based fixture frameworks are replaced by three explicit seams:
//!
//! - [`fake::Dummy`] derives drive randomized specimen generation,
//! - the [`Inject`] trait is the constructor-injection recipe a system under
//!   test implements against the container,
//! - the [`MockBinding`] trait ties a hand-written mock to the trait object
//!   it stands in for, so freezing the mock also registers the binding.
//!
//! # Example
//!
//! ```rust,ignore
//! let container = Container::new();
//!
//! // Randomized data, frozen on first resolve.
//! let request: DeskBookingRequest = container.create();
//! let correlation: CorrelationId = container.resolve();
//!
//! // Mocks are frozen and bound to their subject trait in one step.
//! let desks = container.resolve_mock::<MockDeskRepository>();
//! desks.set_available(vec![Desk { id: 7 }]);
//!
//! // The SUT's Inject recipe pulls its dependencies from the container.
//! let sut: DeskBookingRequestProcessor = container.resolve_sut()?;
//! ```

use std::any::{Any, TypeId};
use std::sync::Arc;

use dashmap::DashMap;
use fake::{Dummy, Fake, Faker};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::ContainerError;

/// Number of specimens produced by [`Container::create_some`].
const DEFAULT_MANY: usize = 3;

type Shared = Arc<dyn Any + Send + Sync>;
type Factory = Arc<dyn Fn(&Container) -> Box<dyn Any + Send + Sync> + Send + Sync>;

// =============================================================================
// Injection Seams
// =============================================================================

/// Constructor-injection recipe for a system under test.
///
/// Implemented by types whose dependencies live in the container. The recipe
/// pulls each dependency with [`Container::dep`] and propagates
/// [`ContainerError`] when a required registration is missing.
pub trait Inject: Sized {
    /// Constructs `Self`, pulling dependencies from `container`.
    fn inject(container: &Container) -> Result<Self, ContainerError>;
}

/// Binds a mock implementation to the trait object it stands in for.
///
/// Implementing this for a mock lets [`Container::resolve_mock`] freeze the
/// mock and register it as the subject dependency in a single step, so the
/// test configures the very instance the system under test will receive.
pub trait MockBinding: Send + Sync + Sized + 'static {
    /// The trait object this mock substitutes, e.g. `dyn DeskRepository`.
    type Subject: ?Sized + Send + Sync + 'static;

    /// Upcasts a shared mock handle to its subject trait object.
    fn as_subject(self: Arc<Self>) -> Arc<Self::Subject>;
}

// =============================================================================
// Container
// =============================================================================

/// Object container generating randomized specimens and carrying frozen
/// instances, factories, and trait-object dependencies for one test.
///
/// Each test owns exactly one container; nothing is shared across tests.
/// All registries are last-write-wins with no merging.
pub struct Container {
    frozen: DashMap<TypeId, Shared>,
    factories: DashMap<TypeId, Factory>,
    rng: Mutex<StdRng>,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("frozen", &self.frozen.len())
            .field("factories", &self.factories.len())
            .finish()
    }
}

impl Container {
    /// Creates a container with an entropy-seeded generator.
    pub fn new() -> Self {
        Self {
            frozen: DashMap::new(),
            factories: DashMap::new(),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Creates a container with a fixed seed for reproducible generation.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            frozen: DashMap::new(),
            factories: DashMap::new(),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    // =========================================================================
    // Specimen Creation
    // =========================================================================

    /// Creates a specimen of `T`.
    ///
    /// Resolution order: a frozen instance (cloned), a registered factory,
    /// then randomized generation. Primitive types and strings come back as
    /// random data; derived [`Dummy`] structs come back fully populated.
    pub fn create<T>(&self) -> T
    where
        T: Dummy<Faker> + Clone + Send + Sync + 'static,
    {
        if let Some(value) = self.frozen_value::<T>() {
            return value;
        }
        if let Some(value) = self.factory_value::<T>() {
            return value;
        }
        self.generate()
    }

    /// Creates `count` specimens of `T`.
    pub fn create_many<T>(&self, count: usize) -> Vec<T>
    where
        T: Dummy<Faker> + Clone + Send + Sync + 'static,
    {
        (0..count).map(|_| self.create()).collect()
    }

    /// Creates a small batch of specimens of `T`.
    pub fn create_some<T>(&self) -> Vec<T>
    where
        T: Dummy<Faker> + Clone + Send + Sync + 'static,
    {
        self.create_many(DEFAULT_MANY)
    }

    /// Starts a fluent customization of a single specimen.
    ///
    /// The builder begins from a generated specimen; each [`with`] call
    /// mutates it in place before [`create`] hands it back.
    ///
    /// [`with`]: SpecimenBuilder::with
    /// [`create`]: SpecimenBuilder::create
    pub fn build<T>(&self) -> SpecimenBuilder<T>
    where
        T: Dummy<Faker> + Clone + Send + Sync + 'static,
    {
        SpecimenBuilder {
            value: self.create(),
        }
    }

    // =========================================================================
    // Freezing & Registration
    // =========================================================================

    /// Resolves `T` with freeze semantics.
    ///
    /// The first call generates a specimen and caches it; every later call,
    /// direct or through another recipe, observes the same value.
    pub fn resolve<T>(&self) -> T
    where
        T: Dummy<Faker> + Clone + Send + Sync + 'static,
    {
        if let Some(value) = self.frozen_value::<T>() {
            return value;
        }
        let value: T = self
            .factory_value::<T>()
            .unwrap_or_else(|| self.generate());
        self.frozen.insert(TypeId::of::<T>(), Arc::new(value.clone()));
        value
    }

    /// Freezes a caller-supplied instance of `T`.
    pub fn register<T: Clone + Send + Sync + 'static>(&self, instance: T) {
        self.frozen.insert(TypeId::of::<T>(), Arc::new(instance));
    }

    /// Returns a clone of the frozen instance of `T`, if one exists.
    ///
    /// Unlike [`create`](Container::create) this never generates; it is the
    /// lookup half of [`register`](Container::register) for types that have
    /// no generation recipe.
    pub fn registered<T: Clone + Send + Sync + 'static>(&self) -> Option<T> {
        self.frozen_value::<T>()
    }

    /// Registers a factory controlling how `T` specimens are produced.
    ///
    /// The factory is consulted by [`create`](Container::create) and the
    /// first [`resolve`](Container::resolve) before falling back to
    /// randomized generation.
    pub fn register_factory<T: Send + Sync + 'static>(
        &self,
        factory: impl Fn(&Container) -> T + Send + Sync + 'static,
    ) {
        self.factories.insert(
            TypeId::of::<T>(),
            Arc::new(move |container| Box::new(factory(container))),
        );
    }

    // =========================================================================
    // Dependencies & Mocks
    // =========================================================================

    /// Registers a trait-object dependency.
    ///
    /// The instance is returned for every later [`dep`](Container::dep)
    /// lookup of `D`, directly or inside an [`Inject`] recipe.
    pub fn register_dep<D: ?Sized + Send + Sync + 'static>(&self, dep: Arc<D>) {
        self.frozen.insert(TypeId::of::<Arc<D>>(), Arc::new(dep));
    }

    /// Looks up a registered trait-object dependency.
    ///
    /// # Errors
    ///
    /// [`ContainerError::MissingDependency`] when nothing was registered
    /// for `D`.
    pub fn dep<D: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<D>, ContainerError> {
        let entry = self.frozen.get(&TypeId::of::<Arc<D>>()).ok_or(
            ContainerError::MissingDependency {
                type_name: std::any::type_name::<D>(),
            },
        )?;
        entry
            .value()
            .downcast_ref::<Arc<D>>()
            .cloned()
            .ok_or(ContainerError::TypeMismatch {
                type_name: std::any::type_name::<D>(),
            })
    }

    /// Freezes a mock and registers it as its subject dependency.
    ///
    /// The first call constructs `M::default()`, caches it, and binds it to
    /// `M::Subject`; later calls return the same instance, so a test can
    /// keep configuring the mock the system under test already holds.
    pub fn resolve_mock<M>(&self) -> Arc<M>
    where
        M: MockBinding + Default,
    {
        if let Some(entry) = self.frozen.get(&TypeId::of::<M>()) {
            if let Ok(mock) = Arc::clone(entry.value()).downcast::<M>() {
                return mock;
            }
        }

        let mock = Arc::new(M::default());
        self.frozen
            .insert(TypeId::of::<M>(), Arc::clone(&mock) as Shared);
        self.register_dep::<M::Subject>(Arc::clone(&mock).as_subject());
        mock
    }

    /// Constructs the system under test through its [`Inject`] recipe.
    ///
    /// # Errors
    ///
    /// Propagates [`ContainerError`] from the recipe, typically a missing
    /// dependency registration.
    pub fn resolve_sut<T: Inject>(&self) -> Result<T, ContainerError> {
        T::inject(self)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn frozen_value<T: Clone + Send + Sync + 'static>(&self) -> Option<T> {
        let entry = self.frozen.get(&TypeId::of::<T>())?;
        let shared = Arc::clone(entry.value());
        drop(entry);
        shared.downcast::<T>().ok().map(|value| (*value).clone())
    }

    fn factory_value<T: Send + Sync + 'static>(&self) -> Option<T> {
        let factory = self
            .factories
            .get(&TypeId::of::<T>())
            .map(|entry| Arc::clone(entry.value()))?;
        factory(self).downcast::<T>().ok().map(|value| *value)
    }

    fn generate<T: Dummy<Faker>>(&self) -> T {
        let mut rng = self.rng.lock();
        Faker.fake_with_rng(&mut *rng)
    }
}

// =============================================================================
// SpecimenBuilder
// =============================================================================

/// Fluent customization of a single generated specimen.
///
/// # Examples
///
/// ```
/// use sutkit_core::container::Container;
///
/// let container = Container::with_seed(7);
/// let value = container
///     .build::<u32>()
///     .with(|v| *v = 17)
///     .create();
/// assert_eq!(value, 17);
/// ```
#[derive(Debug)]
pub struct SpecimenBuilder<T> {
    value: T,
}

impl<T> SpecimenBuilder<T> {
    /// Applies a customization to the specimen under construction.
    pub fn with(mut self, customize: impl FnOnce(&mut T)) -> Self {
        customize(&mut self.value);
        self
    }

    /// Finishes the build and returns the customized specimen.
    pub fn create(self) -> T {
        self.value
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }

    #[derive(Default)]
    struct MockGreeter {
        greeting: Mutex<String>,
    }

    impl MockGreeter {
        fn set_greeting(&self, greeting: impl Into<String>) {
            *self.greeting.lock() = greeting.into();
        }
    }

    impl Greeter for MockGreeter {
        fn greet(&self) -> String {
            self.greeting.lock().clone()
        }
    }

    impl MockBinding for MockGreeter {
        type Subject = dyn Greeter;

        fn as_subject(self: Arc<Self>) -> Arc<dyn Greeter> {
            self
        }
    }

    #[test]
    fn test_create_generates_distinct_primitives() {
        let container = Container::with_seed(1);
        let values: Vec<u64> = container.create_many(16);

        // A seeded generator producing sixteen identical values would mean
        // generation is broken, not improbable.
        assert!(values.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn test_create_some_returns_default_batch() {
        let container = Container::with_seed(2);
        let values: Vec<String> = container.create_some();
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_seeded_containers_generate_identically() {
        let first = Container::with_seed(42);
        let second = Container::with_seed(42);

        assert_eq!(first.create::<u32>(), second.create::<u32>());
        assert_eq!(first.create::<String>(), second.create::<String>());
    }

    #[test]
    fn test_resolve_freezes_the_first_specimen() {
        let container = Container::with_seed(3);

        let first: String = container.resolve();
        let second: String = container.resolve();
        let via_create: String = container.create();

        assert_eq!(first, second);
        assert_eq!(first, via_create);
    }

    #[test]
    fn test_register_overrides_generation() {
        let container = Container::new();
        container.register::<u32>(1234);

        assert_eq!(container.create::<u32>(), 1234);
        assert_eq!(container.resolve::<u32>(), 1234);
    }

    #[test]
    fn test_factory_controls_creation() {
        let container = Container::new();
        container.register_factory(|_| "fixed".to_string());

        assert_eq!(container.create::<String>(), "fixed");
    }

    #[test]
    fn test_frozen_instance_beats_factory() {
        let container = Container::new();
        container.register_factory(|_| 1_u8);
        container.register::<u8>(2);

        assert_eq!(container.create::<u8>(), 2);
    }

    #[test]
    fn test_builder_customizes_specimen() {
        let container = Container::with_seed(4);
        let value = container
            .build::<String>()
            .with(|v| v.push_str("-suffix"))
            .create();

        assert!(value.ends_with("-suffix"));
    }

    #[test]
    fn test_dep_without_registration_is_an_error() {
        let container = Container::new();
        let result = container.dep::<dyn Greeter>();

        assert!(matches!(
            result,
            Err(ContainerError::MissingDependency { .. })
        ));
    }

    #[test]
    fn test_registered_dep_is_returned() {
        let container = Container::new();
        let greeter: Arc<dyn Greeter> = Arc::new(MockGreeter::default());
        container.register_dep::<dyn Greeter>(greeter);

        assert!(container.dep::<dyn Greeter>().is_ok());
    }

    #[test]
    fn test_resolve_mock_freezes_and_binds_subject() {
        let container = Container::new();

        let mock = container.resolve_mock::<MockGreeter>();
        mock.set_greeting("hello from the mock");

        // The subject binding must observe the configured instance.
        let subject = container.dep::<dyn Greeter>().unwrap();
        assert_eq!(subject.greet(), "hello from the mock");

        // Resolving again returns the same frozen mock.
        let again = container.resolve_mock::<MockGreeter>();
        assert_eq!(again.greet(), "hello from the mock");
    }

    #[test]
    fn test_inject_recipe_pulls_dependencies() {
        struct NeedsGreeter {
            greeter: Arc<dyn Greeter>,
        }

        impl Inject for NeedsGreeter {
            fn inject(container: &Container) -> Result<Self, ContainerError> {
                Ok(Self {
                    greeter: container.dep::<dyn Greeter>()?,
                })
            }
        }

        let container = Container::new();
        assert!(container.resolve_sut::<NeedsGreeter>().is_err());

        let mock = container.resolve_mock::<MockGreeter>();
        mock.set_greeting("wired");

        let sut = container.resolve_sut::<NeedsGreeter>().unwrap();
        assert_eq!(sut.greeter.greet(), "wired");
    }
}
