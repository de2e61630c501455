use std::fmt;
use std::sync::Arc;

/// Host name of a server listed in a zone's NS RRset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameServer {
    pub host: Arc<str>,
}

impl NameServer {
    pub fn new(host: impl Into<Arc<str>>) -> Self {
        Self { host: host.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.host
    }
}

impl fmt::Display for NameServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.host)
    }
}
