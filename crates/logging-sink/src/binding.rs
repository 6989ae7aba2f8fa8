//! crates/logging-sink/src/binding.rs
//! Shared slot holding the console output of the command currently running.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::output::ConsoleOutput;
use crate::sink::BindingGuard;

pub(crate) type Slot = Option<Arc<dyn ConsoleOutput>>;

/// Handle to the "current console output" slot.
///
/// Clones share one slot: the host binds an output when a unit of work begins
/// and unbinds it when the work ends, and every handler holding a clone
/// observes the change. At most one output is bound; the last bind wins.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logging::Verbosity;
/// use logging_sink::{MemoryOutput, OutputBinding};
///
/// let binding = OutputBinding::new();
/// assert!(!binding.is_bound());
///
/// binding.bind(Arc::new(MemoryOutput::memory(Verbosity::Normal, false)));
/// assert!(binding.is_bound());
///
/// binding.unbind();
/// assert!(binding.current().is_none());
/// ```
#[derive(Clone, Default)]
pub struct OutputBinding {
    slot: Arc<RwLock<Slot>>,
}

impl OutputBinding {
    /// Creates an empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a binding that already holds `output`.
    #[must_use]
    pub fn bound(output: Arc<dyn ConsoleOutput>) -> Self {
        let binding = Self::new();
        binding.bind(output);
        binding
    }

    /// Makes `output` the current output and returns the one it replaced.
    pub fn bind(&self, output: Arc<dyn ConsoleOutput>) -> Option<Arc<dyn ConsoleOutput>> {
        self.replace(Some(output))
    }

    /// Clears the slot and returns the output that was bound.
    pub fn unbind(&self) -> Option<Arc<dyn ConsoleOutput>> {
        self.replace(None)
    }

    /// The currently bound output, if any.
    #[must_use]
    pub fn current(&self) -> Option<Arc<dyn ConsoleOutput>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reports whether an output is bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Binds `output` until the returned guard is dropped, then restores the previous binding.
    pub fn scoped(&self, output: Arc<dyn ConsoleOutput>) -> BindingGuard {
        let previous = self.bind(output);
        BindingGuard::new(self.clone(), previous)
    }

    /// Reports whether both handles point at the same slot.
    #[must_use]
    pub fn shares_slot_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }

    pub(crate) fn replace(&self, slot: Slot) -> Slot {
        let mut current = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, slot)
    }
}

impl fmt::Debug for OutputBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputBinding")
            .field("bound", &self.is_bound())
            .finish()
    }
}
