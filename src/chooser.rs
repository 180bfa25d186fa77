//! Modal folder picker drawn inside the terminal.
//!
//! Lists the subdirectories of the folder being browsed; the user walks the
//! tree and confirms the folder they are currently in.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// One row in the chooser list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooserEntry {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct DirChooser {
    pub cwd: PathBuf,
    pub entries: Vec<ChooserEntry>,
    pub selected: usize,
    /// Set when the last navigation attempt failed.
    pub message: Option<String>,
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn list_subdirs(dir: &Path) -> Result<Vec<ChooserEntry>, walkdir::Error> {
    let mut entries: Vec<ChooserEntry> = Vec::new();

    if let Some(parent) = dir.parent() {
        entries.push(ChooserEntry {
            name: "..".to_string(),
            path: parent.to_path_buf(),
        });
    }

    let mut subdirs: Vec<ChooserEntry> = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e),
            Err(_) => continue,
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_hidden(&name) {
            continue;
        }
        subdirs.push(ChooserEntry {
            name,
            path: entry.into_path(),
        });
    }
    subdirs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    entries.extend(subdirs);
    Ok(entries)
}

impl DirChooser {
    /// Open the chooser at `start`. If `start` cannot be listed the chooser
    /// still opens there with an empty list and a message.
    pub fn open(start: &Path) -> Self {
        let mut chooser = Self {
            cwd: start.to_path_buf(),
            entries: Vec::new(),
            selected: 0,
            message: None,
        };
        match list_subdirs(start) {
            Ok(entries) => chooser.entries = entries,
            Err(e) => {
                tracing::warn!(dir = %start.display(), error = %e, "cannot list folder");
                chooser.message = Some(format!("Cannot open folder: {e}"));
            }
        }
        chooser
    }

    fn enter(&mut self, dir: PathBuf) {
        match list_subdirs(&dir) {
            Ok(entries) => {
                self.cwd = dir;
                self.entries = entries;
                self.selected = 0;
                self.message = None;
            }
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "cannot list folder");
                self.message = Some(format!("Cannot open folder: {e}"));
            }
        }
    }

    pub fn next(&mut self) {
        if !self.entries.is_empty() {
            self.selected = (self.selected + 1) % self.entries.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.entries.is_empty() {
            self.selected = (self.selected + self.entries.len() - 1) % self.entries.len();
        }
    }

    /// Enter the highlighted entry.
    pub fn descend(&mut self) {
        if let Some(entry) = self.entries.get(self.selected) {
            let path = entry.path.clone();
            self.enter(path);
        }
    }

    /// Go to the parent of the folder being browsed.
    pub fn ascend(&mut self) {
        if let Some(parent) = self.cwd.parent() {
            let parent = parent.to_path_buf();
            self.enter(parent);
        }
    }

    /// The folder the user picked: the one currently being browsed.
    pub fn confirm(&self) -> PathBuf {
        self.cwd.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn names(c: &DirChooser) -> Vec<&str> {
        c.entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn open_lists_parent_then_visible_subdirs_sorted() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("beta")).unwrap();
        fs::create_dir(dir.path().join("Alpha")).unwrap();
        fs::create_dir(dir.path().join(".cache")).unwrap();
        fs::write(dir.path().join("song.mp3"), b"not a dir").unwrap();

        let c = DirChooser::open(dir.path());
        assert_eq!(names(&c), vec!["..", "Alpha", "beta"]);
        assert_eq!(c.selected, 0);
        assert!(c.message.is_none());
    }

    #[test]
    fn descend_and_ascend_walk_the_tree() {
        let dir = tempdir().unwrap();
        let album = dir.path().join("album");
        fs::create_dir(&album).unwrap();

        let mut c = DirChooser::open(dir.path());
        c.next();
        c.descend();
        assert_eq!(c.cwd, album);
        assert_eq!(c.confirm(), album);
        assert_eq!(names(&c), vec![".."]);

        c.ascend();
        assert_eq!(c.cwd, dir.path());
    }

    #[test]
    fn selection_wraps() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();

        let mut c = DirChooser::open(dir.path());
        assert_eq!(c.entries.len(), 2);
        c.prev();
        assert_eq!(c.selected, 1);
        c.next();
        assert_eq!(c.selected, 0);
    }

    #[test]
    fn unreadable_target_keeps_current_folder() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("gone");
        fs::create_dir(&gone).unwrap();

        let mut c = DirChooser::open(dir.path());
        fs::remove_dir(&gone).unwrap();
        c.next();
        c.descend();

        assert_eq!(c.cwd, dir.path());
        assert!(c.message.is_some());
    }

    #[test]
    fn open_on_missing_folder_reports_message() {
        let dir = tempdir().unwrap();
        let c = DirChooser::open(&dir.path().join("missing"));
        assert!(c.entries.is_empty());
        assert!(c.message.is_some());
    }
}
