use rustc_hash::FxHashMap;
use std::sync::Arc;

/// A single resource record as received in a zone transfer.
///
/// Only the presentation form is kept: the record is printed and discarded,
/// never re-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRecord {
    pub owner: Arc<str>,
    pub ttl: u32,
    pub class: Arc<str>,
    pub record_type: Arc<str>,
    pub rdata: Arc<str>,
}

impl ZoneRecord {
    pub fn new(
        owner: impl Into<Arc<str>>,
        ttl: u32,
        class: impl Into<Arc<str>>,
        record_type: impl Into<Arc<str>>,
        rdata: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            owner: owner.into(),
            ttl,
            class: class.into(),
            record_type: record_type.into(),
            rdata: rdata.into(),
        }
    }

    pub fn to_text(&self, origin: &str) -> String {
        format!(
            "{} {} {} {} {}",
            relativize(&self.owner, origin),
            self.ttl,
            self.class,
            self.record_type,
            self.rdata
        )
    }
}

/// All records sharing one owner name.
///
/// Records of the same type stay adjacent, in the order their type was
/// first seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneNode {
    pub owner: Arc<str>,
    records: Vec<ZoneRecord>,
}

impl ZoneNode {
    fn new(owner: Arc<str>) -> Self {
        Self {
            owner,
            records: Vec::new(),
        }
    }

    fn push(&mut self, record: ZoneRecord) {
        match self
            .records
            .iter()
            .rposition(|r| r.record_type.eq_ignore_ascii_case(&record.record_type))
        {
            Some(last_of_type) => self.records.insert(last_of_type + 1, record),
            None => self.records.push(record),
        }
    }

    pub fn records(&self) -> &[ZoneRecord] {
        &self.records
    }

    pub fn to_text(&self, origin: &str) -> Vec<String> {
        self.records.iter().map(|r| r.to_text(origin)).collect()
    }
}

/// Contents of one successful AXFR, keyed by owner name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSnapshot {
    origin: Arc<str>,
    nodes: Vec<ZoneNode>,
    index: FxHashMap<String, usize>,
}

impl ZoneSnapshot {
    pub fn new(origin: impl Into<Arc<str>>) -> Self {
        Self {
            origin: origin.into(),
            nodes: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    pub fn from_records(
        origin: impl Into<Arc<str>>,
        records: impl IntoIterator<Item = ZoneRecord>,
    ) -> Self {
        let mut snapshot = Self::new(origin);
        for record in records {
            snapshot.insert(record);
        }
        snapshot
    }

    pub fn insert(&mut self, record: ZoneRecord) {
        let key = absolute(&record.owner).to_ascii_lowercase();
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                self.nodes.push(ZoneNode::new(Arc::clone(&record.owner)));
                self.index.insert(key, self.nodes.len() - 1);
                self.nodes.len() - 1
            }
        };
        self.nodes[position].push(record);
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn nodes(&self) -> &[ZoneNode] {
        &self.nodes
    }

    pub fn node(&self, owner: &str) -> Option<&ZoneNode> {
        let key = absolute(owner).to_ascii_lowercase();
        self.index.get(&key).map(|&position| &self.nodes[position])
    }

    pub fn record_count(&self) -> usize {
        self.nodes.iter().map(|n| n.records.len()).sum()
    }

    /// Presentation lines for every record, node by node.
    pub fn to_text(&self) -> Vec<String> {
        self.nodes
            .iter()
            .flat_map(|node| node.to_text(&self.origin))
            .collect()
    }
}

fn absolute(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Renders `owner` relative to `origin`: `@` for the apex, the leading labels
/// for names below it, and the absolute name otherwise.
pub fn relativize(owner: &str, origin: &str) -> String {
    let owner = absolute(owner);
    let origin = absolute(origin);

    if owner.eq_ignore_ascii_case(&origin) {
        return "@".to_string();
    }

    let suffix = format!(".{}", origin).to_ascii_lowercase();
    if owner.len() > suffix.len() && owner.to_ascii_lowercase().ends_with(&suffix) {
        return owner[..owner.len() - suffix.len()].to_string();
    }

    owner
}
