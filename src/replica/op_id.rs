use std::{
    fmt::{Debug, Display},
    sync::Arc,
};

/// Name of an editor. Used to break ties between concurrent operations, so
/// the same names always produce the same merge result.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AgentId(Arc<str>);

impl AgentId {
    #[must_use]
    pub fn new(name: &str) -> Self { Self(Arc::from(name)) }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for AgentId {
    fn from(name: &str) -> Self { Self::new(name) }
}

impl From<String> for AgentId {
    fn from(name: String) -> Self { Self(Arc::from(name)) }
}

impl Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.0) }
}

impl Debug for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

/// Globally unique id of an operation: a Lamport counter and the agent that
/// minted it.
///
/// The derived ordering compares the counter first and the agent second,
/// which gives a total order that respects causality.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OpId {
    pub counter: u64,
    pub agent: AgentId,
}

impl OpId {
    #[must_use]
    pub fn new(counter: u64, agent: AgentId) -> Self { Self { counter, agent } }
}

impl Display for OpId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.counter, self.agent)
    }
}

impl Debug for OpId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{self}") }
}
