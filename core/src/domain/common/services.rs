use crate::domain::store::ports::DocumentStore;

/// Shared service object; every entity service trait is implemented on it.
#[derive(Clone)]
pub struct Service<S>
where
    S: DocumentStore,
{
    pub(crate) store: S,
}

impl<S> Service<S>
where
    S: DocumentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
