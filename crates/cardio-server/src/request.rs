use uuid::Uuid;

/// Correlation id minted once per screening submission and attached to every
/// log record the handler emits, so one submission's records can be pulled
/// out of interleaved server logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    id: Uuid,
}

impl RequestContext {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
