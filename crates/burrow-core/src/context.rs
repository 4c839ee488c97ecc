use std::fmt::Display;
use uuid::Uuid;

/// Process-level identity handed to services at startup.
///
/// Created once in `main` and passed explicitly into the allocator and
/// resolver, which tag their log events with it. Cheap to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkerContext {
    worker_id: Uuid,
}

impl WorkerContext {
    /// Creates a context with a fresh random worker id.
    pub fn new() -> Self {
        Self::with_worker_id(Uuid::new_v4())
    }

    pub fn with_worker_id(worker_id: Uuid) -> Self {
        Self { worker_id }
    }

    pub fn worker_id(&self) -> Uuid {
        self.worker_id
    }
}

impl Default for WorkerContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for WorkerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.worker_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_context_gets_its_own_id() {
        assert_ne!(WorkerContext::new(), WorkerContext::new());
    }

    #[test]
    fn display_is_the_worker_id() {
        let id = Uuid::nil();
        let ctx = WorkerContext::with_worker_id(id);
        assert_eq!(ctx.to_string(), id.to_string());
        assert_eq!(ctx.worker_id(), id);
    }
}
