use std::collections::HashMap;

use crate::detect::backend::FaceDetectorBackend;
use crate::error::TaggerError;

/// Registry of detector backends, selected by name.
///
/// Detection runs on one thread per invocation, so backends are stored
/// directly; `detect` takes `&mut self` and lookups hand out mutable
/// references.
pub struct BackendRegistry {
    backends: HashMap<String, Box<dyn FaceDetectorBackend>>,
    default_name: Option<String>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self {
            backends: HashMap::new(),
            default_name: None,
        }
    }

    /// Register a backend. The first registered backend becomes the default.
    pub fn register<B: FaceDetectorBackend + 'static>(&mut self, backend: B) {
        let name = backend.name().to_string();
        if self.default_name.is_none() {
            self.default_name = Some(name.clone());
        }
        self.backends.insert(name, Box::new(backend));
    }

    /// Set the default backend by name.
    pub fn set_default(&mut self, name: &str) -> Result<(), TaggerError> {
        if !self.backends.contains_key(name) {
            return Err(TaggerError::Detector(format!(
                "backend '{}' is not registered",
                name
            )));
        }
        self.default_name = Some(name.to_string());
        Ok(())
    }

    /// Name of the current default backend.
    pub fn default_name(&self) -> Option<&str> {
        self.default_name.as_deref()
    }

    /// Look up a backend by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut dyn FaceDetectorBackend> {
        self.backends.get_mut(name).map(|b| &mut **b as &mut dyn FaceDetectorBackend)
    }

    /// Look up a backend, failing with the list of registered names.
    pub fn select(&mut self, name: &str) -> Result<&mut dyn FaceDetectorBackend, TaggerError> {
        let available = self.list().join(", ");
        match self.backends.get_mut(name) {
            Some(backend) => Ok(backend.as_mut()),
            None => Err(TaggerError::Detector(format!(
                "unknown detector backend '{name}' (available: {available})"
            ))),
        }
    }

    /// Registered backend names, sorted for stable display.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.backends.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}
