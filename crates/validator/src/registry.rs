//! Validator registry
//!
//! Maps each model type to one shared validator so callers can validate a
//! model without knowing which validator configures it. Registration builds
//! the validator once, which surfaces configuration errors at startup rather
//! than on the first request.
//!
//! ```rust,ignore
//! let mut registry = ValidatorRegistry::new();
//! registry.register::<UserValidator>()?;
//!
//! let result = registry.validate(&user)?;
//! ```

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::abstract_validator::AbstractValidator;
use crate::builder::ValidatorBuilder;
use crate::foundation::{ValidResult, ValidatorError};

type DynValidate = Box<dyn Fn(&dyn Any) -> Result<ValidResult, ValidatorError> + Send + Sync>;

struct Registration {
    model: &'static str,
    validator: &'static str,
    instance: Arc<dyn Any + Send + Sync>,
    validate: DynValidate,
}

// ============================================================================
// VALIDATOR REGISTRY
// ============================================================================

/// One validator per model type.
#[derive(Default)]
pub struct ValidatorRegistry {
    entries: HashMap<TypeId, Registration>,
}

impl ValidatorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds `V` and registers it for `V::Model`.
    ///
    /// A model type registered twice keeps the later validator.
    ///
    /// # Errors
    ///
    /// Propagates the configuration error from [`AbstractValidator::build`].
    pub fn register<V: AbstractValidator>(&mut self) -> Result<&mut Self, ValidatorError> {
        let builder = V::build()?;
        Ok(self.insert(builder, type_name::<V>()))
    }

    /// Registers an already configured builder for `M`.
    pub fn register_builder<M: Sync + 'static>(&mut self, builder: ValidatorBuilder<M>) -> &mut Self {
        self.insert(builder, type_name::<ValidatorBuilder<M>>())
    }

    fn insert<M: Sync + 'static>(
        &mut self,
        builder: ValidatorBuilder<M>,
        validator: &'static str,
    ) -> &mut Self {
        let shared = Arc::new(builder);
        let dispatch = Arc::clone(&shared);
        let registration = Registration {
            model: type_name::<M>(),
            validator,
            instance: shared,
            validate: Box::new(move |model| dispatch.validate_dyn(model)),
        };
        if let Some(previous) = self.entries.insert(TypeId::of::<M>(), registration) {
            warn!(
                model = previous.model,
                replaced = previous.validator,
                by = validator,
                "validator replaced"
            );
        } else {
            info!(model = type_name::<M>(), validator, "validator registered");
        }
        self
    }

    /// The validator registered for `M`, if any.
    pub fn resolve<M: Sync + 'static>(&self) -> Option<Arc<ValidatorBuilder<M>>> {
        let entry = self.entries.get(&TypeId::of::<M>())?;
        Arc::clone(&entry.instance)
            .downcast::<ValidatorBuilder<M>>()
            .ok()
    }

    /// Validates `model` with the validator registered for `M`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::NotRegistered`] if no validator exists for `M`.
    pub fn validate<M: Sync + 'static>(&self, model: &M) -> Result<ValidResult, ValidatorError> {
        let builder = self.resolve::<M>().ok_or_else(|| ValidatorError::NotRegistered {
            model: type_name::<M>().to_owned(),
        })?;
        Ok(builder.validate(model))
    }

    /// Validates a type-erased model with the validator registered for its
    /// runtime type.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::NotRegistered`] if the runtime type has no
    /// validator.
    pub fn validate_dyn(&self, model: &dyn Any) -> Result<ValidResult, ValidatorError> {
        let type_id = model.type_id();
        let Some(entry) = self.entries.get(&type_id) else {
            debug!(?type_id, "no validator for dynamic model");
            return Err(ValidatorError::NotRegistered {
                model: format!("{type_id:?}"),
            });
        };
        (entry.validate)(model)
    }

    /// Returns `true` if a validator is registered for `M`.
    pub fn contains<M: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<M>())
    }

    /// Number of registered model types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Type names of the registered models, in no particular order.
    pub fn registered_models(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.values().map(|entry| entry.model)
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for entry in self.entries.values() {
            map.entry(&entry.model, &entry.validator);
        }
        map.finish()
    }
}
