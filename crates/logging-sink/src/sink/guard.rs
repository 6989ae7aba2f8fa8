use crate::binding::{OutputBinding, Slot};

/// RAII guard that temporarily binds a console output.
///
/// Instances of this guard are created by [`OutputBinding::scoped`]. While the guard is alive the
/// scoped output is current; dropping the guard reinstates whatever was bound before, which may be
/// nothing. The guard dereferences to the [`OutputBinding`] so callers can keep querying it.
#[must_use = "dropping the guard immediately restores the previous binding"]
pub struct BindingGuard {
    binding: OutputBinding,
    restore: Option<Slot>,
}

impl BindingGuard {
    pub(crate) const fn new(binding: OutputBinding, previous: Slot) -> Self {
        Self {
            binding,
            restore: Some(previous),
        }
    }

    /// Reports whether an output was bound before the guard was created.
    #[must_use]
    pub fn had_previous_output(&self) -> bool {
        matches!(self.restore, Some(Some(_)))
    }

    /// Consumes the guard without restoring the previous binding.
    ///
    /// The scoped output stays current and the shared [`OutputBinding`] is returned so callers
    /// can unbind it explicitly later.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use logging::Verbosity;
    /// use logging_sink::{MemoryOutput, OutputBinding};
    ///
    /// let binding = OutputBinding::new();
    /// let kept = binding
    ///     .scoped(Arc::new(MemoryOutput::memory(Verbosity::Normal, false)))
    ///     .persist();
    ///
    /// assert!(binding.is_bound());
    /// kept.unbind();
    /// assert!(!binding.is_bound());
    /// ```
    pub fn persist(mut self) -> OutputBinding {
        self.restore = None;
        self.binding.clone()
    }
}

impl Drop for BindingGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.restore.take() {
            self.binding.replace(previous);
        }
    }
}

impl std::ops::Deref for BindingGuard {
    type Target = OutputBinding;

    fn deref(&self) -> &Self::Target {
        &self.binding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{ConsoleOutput, MemoryOutput};
    use logging::Verbosity;
    use std::sync::Arc;

    fn output(verbosity: Verbosity) -> Arc<dyn ConsoleOutput> {
        Arc::new(MemoryOutput::memory(verbosity, false))
    }

    #[test]
    fn drop_unbinds_when_nothing_was_bound() {
        let binding = OutputBinding::new();
        {
            let guard = binding.scoped(output(Verbosity::Normal));
            assert!(guard.is_bound());
            assert!(!guard.had_previous_output());
        }
        assert!(!binding.is_bound());
    }

    #[test]
    fn drop_restores_previous_output() {
        let binding = OutputBinding::bound(output(Verbosity::Quiet));
        {
            let guard = binding.scoped(output(Verbosity::Debug));
            assert!(guard.had_previous_output());
            assert_eq!(
                binding.current().map(|current| current.verbosity()),
                Some(Verbosity::Debug)
            );
        }
        assert_eq!(
            binding.current().map(|current| current.verbosity()),
            Some(Verbosity::Quiet)
        );
    }

    #[test]
    fn nested_guards_unwind_in_order() {
        let binding = OutputBinding::new();
        let outer = binding.scoped(output(Verbosity::Verbose));
        {
            let _inner = binding.scoped(output(Verbosity::Debug));
            assert_eq!(
                binding.current().map(|current| current.verbosity()),
                Some(Verbosity::Debug)
            );
        }
        assert_eq!(
            binding.current().map(|current| current.verbosity()),
            Some(Verbosity::Verbose)
        );
        drop(outer);
        assert!(!binding.is_bound());
    }

    #[test]
    fn persist_skips_restoration() {
        let binding = OutputBinding::new();
        let kept = binding.scoped(output(Verbosity::Normal)).persist();
        assert!(binding.is_bound());
        assert!(kept.shares_slot_with(&binding));
    }
}
