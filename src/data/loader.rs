//! # Resource Loading
//!
//! Turns one of the four bundled JSON resources into typed records.
//!
//! ```text
//! ResourceSource::read(id)  →  String  →  serde_json  →  Vec<T>
//! ```
//!
//! The resource handle is always passed in explicitly. Nothing here reaches
//! for global state, so the same loader works against the compiled-in bundle,
//! a data directory on disk, or an in-memory map in tests.
//!
//! Loading never caches on its own. Wrap a source in [`Memoized`] if the
//! same resource is read repeatedly; content is immutable for the process
//! lifetime, so this does not change what callers observe.

use log::debug;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use super::records::{Career, Elective, Major, ProfessorInsight};

include!(concat!(env!("OUT_DIR"), "/bundled_resources.rs"));

// ============================================================================
// Resource Ids
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceId {
    Majors,
    Careers,
    Electives,
    Professors,
}

impl ResourceId {
    pub const ALL: [ResourceId; 4] = [
        ResourceId::Majors,
        ResourceId::Careers,
        ResourceId::Electives,
        ResourceId::Professors,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            ResourceId::Majors => "majors.json",
            ResourceId::Careers => "careers.json",
            ResourceId::Electives => "electives.json",
            ResourceId::Professors => "professors.json",
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum DataError {
    /// The resource could not be read at all.
    Missing { id: ResourceId, source: io::Error },
    /// The resource was read but is not an array of the expected records.
    Malformed {
        id: ResourceId,
        source: serde_json::Error,
    },
}

impl DataError {
    pub fn resource(&self) -> ResourceId {
        match self {
            DataError::Missing { id, .. } | DataError::Malformed { id, .. } => *id,
        }
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Missing { id, source } => write!(f, "resource {id} is missing: {source}"),
            DataError::Malformed { id, source } => {
                write!(f, "resource {id} is malformed: {source}")
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Missing { source, .. } => Some(source),
            DataError::Malformed { source, .. } => Some(source),
        }
    }
}

// ============================================================================
// Sources
// ============================================================================

/// Something that can hand out the raw text of a resource.
pub trait ResourceSource {
    fn read(&self, id: ResourceId) -> Result<String, DataError>;
}

fn not_found(id: ResourceId, detail: String) -> DataError {
    DataError::Missing {
        id,
        source: io::Error::new(io::ErrorKind::NotFound, detail),
    }
}

/// The JSON files compiled into the binary from `data/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledResources;

impl ResourceSource for BundledResources {
    fn read(&self, id: ResourceId) -> Result<String, DataError> {
        BUNDLED_RESOURCES
            .iter()
            .find(|(name, _)| *name == id.file_name())
            .map(|(_, contents)| contents.to_string())
            .ok_or_else(|| not_found(id, format!("{} is not bundled", id.file_name())))
    }
}

/// Reads `<root>/<file name>` for each resource.
#[derive(Debug, Clone)]
pub struct DirResources {
    root: PathBuf,
}

impl DirResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_of(&self, id: ResourceId) -> PathBuf {
        self.root.join(id.file_name())
    }
}

impl ResourceSource for DirResources {
    fn read(&self, id: ResourceId) -> Result<String, DataError> {
        let path = self.path_of(id);
        debug!("Reading resource {} from {}", id, path.display());
        fs::read_to_string(&path).map_err(|source| DataError::Missing { id, source })
    }
}

/// Resource text held in memory. Ids without an entry are missing.
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    entries: HashMap<ResourceId, String>,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: ResourceId, json: impl Into<String>) -> Self {
        self.insert(id, json);
        self
    }

    pub fn insert(&mut self, id: ResourceId, json: impl Into<String>) {
        self.entries.insert(id, json.into());
    }
}

impl ResourceSource for MemoryResources {
    fn read(&self, id: ResourceId) -> Result<String, DataError> {
        self.entries
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id, format!("{} not provided", id.file_name())))
    }
}

/// Caches resource text by id after the first successful read.
///
/// Failed reads are not cached, so a missing file is retried on the next
/// screen entry.
pub struct Memoized<S> {
    inner: S,
    cache: RefCell<HashMap<ResourceId, String>>,
}

impl<S: ResourceSource> Memoized<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn cached(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<S: ResourceSource> ResourceSource for Memoized<S> {
    fn read(&self, id: ResourceId) -> Result<String, DataError> {
        if let Some(text) = self.cache.borrow().get(&id) {
            return Ok(text.clone());
        }
        let text = self.inner.read(id)?;
        self.cache.borrow_mut().insert(id, text.clone());
        Ok(text)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load every record of resource `id`.
///
/// Fails if the resource is missing or is not a JSON array of `T`. There is
/// no partial load: one bad entry fails the whole resource.
pub fn load<T: DeserializeOwned>(
    source: &dyn ResourceSource,
    id: ResourceId,
) -> Result<Vec<T>, DataError> {
    let text = source.read(id)?;
    let records: Vec<T> =
        serde_json::from_str(&text).map_err(|source| DataError::Malformed { id, source })?;
    debug!("Loaded {} records from {}", records.len(), id);
    Ok(records)
}

pub fn load_majors(source: &dyn ResourceSource) -> Result<Vec<Major>, DataError> {
    load(source, ResourceId::Majors)
}

pub fn load_careers(source: &dyn ResourceSource) -> Result<Vec<Career>, DataError> {
    load(source, ResourceId::Careers)
}

pub fn load_electives(source: &dyn ResourceSource) -> Result<Vec<Elective>, DataError> {
    load(source, ResourceId::Electives)
}

pub fn load_professors(source: &dyn ResourceSource) -> Result<Vec<ProfessorInsight>, DataError> {
    load(source, ResourceId::Professors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Difficulty;

    const ONE_CAREER: &str = r#"[{"name":"Nurse","description":"Care","avgSalary":"$86,000","growth":"+6%"}]"#;

    #[test]
    fn test_every_resource_is_bundled() {
        for id in ResourceId::ALL {
            assert!(BundledResources.read(id).is_ok(), "{id} missing from bundle");
        }
    }

    #[test]
    fn test_bundled_resources_parse() {
        let source = BundledResources;
        assert!(!load_majors(&source).unwrap().is_empty());
        assert!(!load_careers(&source).unwrap().is_empty());
        assert!(!load_electives(&source).unwrap().is_empty());
        assert!(!load_professors(&source).unwrap().is_empty());
    }

    #[test]
    fn test_missing_resource_is_missing_error() {
        let source = MemoryResources::new();
        let err = load_careers(&source).unwrap_err();
        assert!(matches!(err, DataError::Missing { id: ResourceId::Careers, .. }));
        assert_eq!(err.resource(), ResourceId::Careers);
    }

    #[test]
    fn test_non_array_is_malformed() {
        let source = MemoryResources::new().with(ResourceId::Careers, r#"{"name":"Nurse"}"#);
        let err = load_careers(&source).unwrap_err();
        assert!(matches!(err, DataError::Malformed { .. }));
        assert!(err.to_string().contains("careers.json"));
    }

    #[test]
    fn test_missing_required_field_is_malformed() {
        let source = MemoryResources::new()
            .with(ResourceId::Careers, r#"[{"name":"Nurse","description":"Care"}]"#);
        assert!(matches!(
            load_careers(&source),
            Err(DataError::Malformed { .. })
        ));
    }

    #[test]
    fn test_wrong_type_is_malformed() {
        let json = r#"[{"courseNumber":"C.1","courseName":"X","difficulty":"Easy","credits":"three","prerequisites":[],"tags":[]}]"#;
        let source = MemoryResources::new().with(ResourceId::Electives, json);
        assert!(matches!(
            load_electives(&source),
            Err(DataError::Malformed { .. })
        ));
    }

    #[test]
    fn test_elective_fields_load() {
        let json = r#"[{"courseNumber":"COMP.4200","courseName":"AI","difficulty":"Medium","credits":3,"prerequisites":["COMP.2010","MATH.3220"],"tags":["AI"],"room":"OS-402"}]"#;
        let source = MemoryResources::new().with(ResourceId::Electives, json);
        let electives = load_electives(&source).unwrap();
        assert_eq!(electives.len(), 1);
        assert_eq!(electives[0].difficulty, Difficulty::Medium);
        assert_eq!(electives[0].credits, 3);
        assert_eq!(electives[0].prerequisites, vec!["COMP.2010", "MATH.3220"]);
    }

    #[test]
    fn test_memoized_reads_once() {
        let source = Memoized::new(MemoryResources::new().with(ResourceId::Careers, ONE_CAREER));
        assert_eq!(source.cached(), 0);
        let first = load_careers(&source).unwrap();
        let second = load_careers(&source).unwrap();
        assert_eq!(first, second);
        assert_eq!(source.cached(), 1);
    }

    #[test]
    fn test_memoized_does_not_cache_failures() {
        let source = Memoized::new(MemoryResources::new());
        assert!(load_majors(&source).is_err());
        assert_eq!(source.cached(), 0);
    }

    #[test]
    fn test_dir_resources_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("careers.json"), ONE_CAREER).unwrap();
        let source = DirResources::new(dir.path());
        let careers = load_careers(&source).unwrap();
        assert_eq!(careers[0].name, "Nurse");
        assert!(matches!(
            load_majors(&source),
            Err(DataError::Missing { id: ResourceId::Majors, .. })
        ));
    }
}
