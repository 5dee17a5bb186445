//! Test helpers for laying out catalog and itinerary files on disk.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Two sites seven blocks apart, both open from midnight to 10:00 on days 1
/// and 2.
pub(super) const SAMPLE_CATALOG: &str = "\
site avenue street desiredtime value
1 0 0 1 10
2 3 4 0.5 2.5
site day beginhour endhour
1 1 0 10
2 1 0 10
1 2 0 10
2 2 0 10
";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// Temporary directory holding the score command inputs.
pub(super) struct ScoreFiles {
    _tmp: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) catalog: Utf8PathBuf,
    pub(super) itinerary: Utf8PathBuf,
}

impl ScoreFiles {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        let catalog = root.join("catalog.txt");
        let itinerary = root.join("itinerary.txt");
        Self {
            _tmp: tmp,
            root,
            catalog,
            itinerary,
        }
    }

    pub(super) fn with_sample(itinerary: &str) -> Self {
        let files = Self::new();
        write_utf8(&files.catalog, SAMPLE_CATALOG.as_bytes());
        write_utf8(&files.itinerary, itinerary.as_bytes());
        files
    }
}
