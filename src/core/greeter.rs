use crate::core::Greeter;

/// Stateless greeter, held directly by the tick job and resolved at
/// construction time instead of by name at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamedGreeter;

impl NamedGreeter {
    pub fn new() -> Self {
        Self
    }
}

impl Greeter for NamedGreeter {
    fn hello(&self, name: &str) -> String {
        format!("Hello {} from the NamedBean", name)
    }
}
