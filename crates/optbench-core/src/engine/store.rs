use super::layout::{SuiteVersion, UnsupportedVersion};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Represents errors raised while loading auxiliary transformation data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// The data file is missing or unreadable. The store never fabricates
    /// data; the caller decides whether an identity transform is acceptable.
    #[error("Auxiliary data file '{path}' is unavailable: {source}")]
    Unavailable {
        path: String,
        source: std::io::Error,
    },
    /// A token in the file did not parse as a number.
    #[error("Malformed numeric token '{token}' in '{path}'")]
    Malformed { path: String, token: String },
    /// No sizing rule exists for the requested version/function pair.
    #[error(transparent)]
    Unsupported(#[from] UnsupportedVersion),
}

/// An owned buffer of loaded values plus a truncation marker.
///
/// Reads are best-effort: a file shorter than the expected element count
/// yields the tokens actually present and `truncated = true` rather than an
/// error. The caller decides how severe a short buffer is.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedBuffer<T> {
    pub values: Vec<T>,
    pub truncated: bool,
}

type CacheKey = (SuiteVersion, u32, usize);

/// Loads and owns shift vectors, rotation matrices, and shuffle permutations
/// for `(version, function id, dimension)` keys.
///
/// Each successful load is memoized; the buffers are immutable afterwards and
/// handed out as [`Arc`] clones so any number of problems can share one load.
#[derive(Debug)]
pub struct AuxiliaryDataStore {
    root: PathBuf,
    shifts: HashMap<CacheKey, Arc<LoadedBuffer<f64>>>,
    rotations: HashMap<CacheKey, Arc<LoadedBuffer<f64>>>,
    shuffles: HashMap<CacheKey, Arc<LoadedBuffer<usize>>>,
}

impl AuxiliaryDataStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            shifts: HashMap::new(),
            rotations: HashMap::new(),
            shuffles: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads the shift vector for a function, sized by the version layout.
    #[instrument(level = "debug", skip(self))]
    pub fn shift(
        &mut self,
        version: SuiteVersion,
        function_id: u32,
        dimension: usize,
    ) -> Result<Arc<LoadedBuffer<f64>>, DataLoadError> {
        let key = (version, function_id, dimension);
        if let Some(buffer) = self.shifts.get(&key) {
            return Ok(buffer.clone());
        }
        let expected = version.shift_len(function_id, dimension)?;
        let path = self
            .root
            .join(version.dir_tag())
            .join(format!("shift_data_{function_id}.txt"));
        let buffer = Arc::new(read_tokens::<f64>(&path, expected)?);
        self.shifts.insert(key, buffer.clone());
        Ok(buffer)
    }

    /// Loads the rotation matrix data for a function, row-major, sized by the
    /// version layout (one `dim x dim` block per component).
    #[instrument(level = "debug", skip(self))]
    pub fn rotation(
        &mut self,
        version: SuiteVersion,
        function_id: u32,
        dimension: usize,
    ) -> Result<Arc<LoadedBuffer<f64>>, DataLoadError> {
        let key = (version, function_id, dimension);
        if let Some(buffer) = self.rotations.get(&key) {
            return Ok(buffer.clone());
        }
        let expected = version.matrix_len(function_id, dimension)?;
        let path = self
            .root
            .join(version.dir_tag())
            .join(format!("M_{function_id}_D{dimension}.txt"));
        let buffer = Arc::new(read_tokens::<f64>(&path, expected)?);
        self.rotations.insert(key, buffer.clone());
        Ok(buffer)
    }

    /// Loads the shuffle permutation for a function. Values are returned as
    /// they appear in the file (1-based); callers validate and rebase them.
    #[instrument(level = "debug", skip(self))]
    pub fn shuffle(
        &mut self,
        version: SuiteVersion,
        function_id: u32,
        dimension: usize,
    ) -> Result<Arc<LoadedBuffer<usize>>, DataLoadError> {
        let key = (version, function_id, dimension);
        if let Some(buffer) = self.shuffles.get(&key) {
            return Ok(buffer.clone());
        }
        let expected = version.shuffle_len(function_id, dimension)?;
        let path = self
            .root
            .join(version.dir_tag())
            .join(format!("shuffle_data_{function_id}_D{dimension}.txt"));
        let buffer = Arc::new(read_tokens::<usize>(&path, expected)?);
        self.shuffles.insert(key, buffer.clone());
        Ok(buffer)
    }
}

fn read_tokens<T: FromStr>(path: &Path, expected: usize) -> Result<LoadedBuffer<T>, DataLoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| DataLoadError::Unavailable {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;

    let mut values = Vec::with_capacity(expected);
    for token in content.split_whitespace().take(expected) {
        let value = token.parse::<T>().map_err(|_| DataLoadError::Malformed {
            path: path.to_string_lossy().to_string(),
            token: token.to_string(),
        })?;
        values.push(value);
    }

    let truncated = values.len() < expected;
    if truncated {
        warn!(
            path = %path.display(),
            expected,
            actual = values.len(),
            "auxiliary data file exhausted before the expected element count"
        );
    } else {
        debug!(path = %path.display(), elements = values.len(), "loaded auxiliary data");
    }
    Ok(LoadedBuffer { values, truncated })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_data(root: &Path, version: SuiteVersion, name: &str, content: &str) {
        let dir = root.join(version.dir_tag());
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn shift_load_reads_the_expected_count() {
        let dir = tempdir().unwrap();
        write_data(
            dir.path(),
            SuiteVersion::Cec2022,
            "shift_data_1.txt",
            "1.0 -1.0 3.5\n2.0",
        );
        let mut store = AuxiliaryDataStore::new(dir.path());

        let buffer = store.shift(SuiteVersion::Cec2022, 1, 2).unwrap();
        assert_eq!(buffer.values, vec![1.0, -1.0]);
        assert!(!buffer.truncated);
    }

    #[test]
    fn short_files_yield_a_truncated_buffer_not_an_error() {
        let dir = tempdir().unwrap();
        write_data(
            dir.path(),
            SuiteVersion::Cec2022,
            "shift_data_1.txt",
            "0.5 0.25",
        );
        let mut store = AuxiliaryDataStore::new(dir.path());

        let buffer = store.shift(SuiteVersion::Cec2022, 1, 5).unwrap();
        assert_eq!(buffer.values, vec![0.5, 0.25]);
        assert!(buffer.truncated);
    }

    #[test]
    fn missing_files_are_reported_not_fabricated() {
        let dir = tempdir().unwrap();
        let mut store = AuxiliaryDataStore::new(dir.path());

        let result = store.rotation(SuiteVersion::Cec2022, 1, 2);
        assert!(matches!(result, Err(DataLoadError::Unavailable { .. })));
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        let dir = tempdir().unwrap();
        write_data(
            dir.path(),
            SuiteVersion::Cec2022,
            "shift_data_1.txt",
            "1.0 banana",
        );
        let mut store = AuxiliaryDataStore::new(dir.path());

        let result = store.shift(SuiteVersion::Cec2022, 1, 2);
        assert!(matches!(
            result,
            Err(DataLoadError::Malformed { token, .. }) if token == "banana"
        ));
    }

    #[test]
    fn loads_are_memoized_and_shared() {
        let dir = tempdir().unwrap();
        write_data(
            dir.path(),
            SuiteVersion::Cec2022,
            "shift_data_1.txt",
            "1.0 2.0",
        );
        let mut store = AuxiliaryDataStore::new(dir.path());

        let first = store.shift(SuiteVersion::Cec2022, 1, 2).unwrap();
        // Even if the file changes on disk, the memoized buffer is returned.
        write_data(
            dir.path(),
            SuiteVersion::Cec2022,
            "shift_data_1.txt",
            "9.0 9.0",
        );
        let second = store.shift(SuiteVersion::Cec2022, 1, 2).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn rotation_sizes_follow_the_composition_layout() {
        let dir = tempdir().unwrap();
        // 2022 function 9 stacks 12 blocks; provide 2 full 2x2 blocks only.
        write_data(
            dir.path(),
            SuiteVersion::Cec2022,
            "M_9_D2.txt",
            "1 0 0 1  1 0 0 1",
        );
        let mut store = AuxiliaryDataStore::new(dir.path());

        let buffer = store.rotation(SuiteVersion::Cec2022, 9, 2).unwrap();
        assert_eq!(buffer.values.len(), 8);
        assert!(buffer.truncated);
    }

    #[test]
    fn shuffle_load_returns_file_order_indices() {
        let dir = tempdir().unwrap();
        write_data(
            dir.path(),
            SuiteVersion::Cec2022,
            "shuffle_data_6_D4.txt",
            "3 1 4 2",
        );
        let mut store = AuxiliaryDataStore::new(dir.path());

        let buffer = store.shuffle(SuiteVersion::Cec2022, 6, 4).unwrap();
        assert_eq!(buffer.values, vec![3, 1, 4, 2]);
        assert!(!buffer.truncated);
    }
}
