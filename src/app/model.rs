//! Application model types: `App`, `Phase` and `DisplayState`.
//!
//! `App` owns everything the UI shows. Each transition builds a fresh
//! `DisplayState` from the previous one; `ui::draw` is the only reader.

use std::path::{Path, PathBuf};

use crate::chooser::DirChooser;
use crate::disc::{DiscCapacity, disc_percentage, format_duration, format_percent};
use crate::library::{Aggregate, ScanError};

pub const STATUS_WAITING: &str = "Status: Waiting for input...";
pub const STATUS_CALCULATING: &str = "Status: Calculating...";
pub const STATUS_COMPLETE: &str = "Status: Calculation complete";
pub const STATUS_FAILED: &str = "Status: Failed to calculate duration";

/// Where the app is in its browse / calculate cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// The folder chooser is open.
    Selecting,
    Calculating,
    Complete,
    Failed,
}

/// Usage of one disc by the current total.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscReading {
    pub label: String,
    /// Unclamped; above 100 when the total does not fit.
    pub percent: f64,
}

impl DiscReading {
    pub fn text(&self) -> String {
        format!("{} disc usage: {}", self.label, format_percent(self.percent))
    }

    /// Fill ratio for a gauge widget, which cannot show more than full.
    pub fn ratio(&self) -> f64 {
        (self.percent / 100.0).clamp(0.0, 1.0)
    }
}

/// Everything the window shows besides the chooser and error popups.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub folder: Option<PathBuf>,
    pub status: String,
    pub duration: String,
    pub discs: Vec<DiscReading>,
}

impl DisplayState {
    pub fn initial(discs: &[DiscCapacity]) -> Self {
        Self {
            folder: None,
            status: STATUS_WAITING.to_string(),
            duration: format_duration(0.0),
            discs: discs
                .iter()
                .map(|d| DiscReading {
                    label: d.label.clone(),
                    percent: 0.0,
                })
                .collect(),
        }
    }

    pub fn calculating(&self, folder: &Path) -> Self {
        Self {
            folder: Some(folder.to_path_buf()),
            status: STATUS_CALCULATING.to_string(),
            ..self.clone()
        }
    }

    pub fn complete(&self, total_seconds: f64, discs: &[DiscCapacity]) -> Self {
        Self {
            folder: self.folder.clone(),
            status: STATUS_COMPLETE.to_string(),
            duration: format_duration(total_seconds),
            discs: discs
                .iter()
                .map(|d| DiscReading {
                    label: d.label.clone(),
                    percent: disc_percentage(total_seconds, d.seconds()),
                })
                .collect(),
        }
    }

    /// Duration falls back to zero; disc readings keep the last good values.
    pub fn failed(&self) -> Self {
        Self {
            status: STATUS_FAILED.to_string(),
            duration: format_duration(0.0),
            ..self.clone()
        }
    }
}

/// The main application model.
pub struct App {
    pub phase: Phase,
    /// Phase to return to when the chooser is cancelled.
    resume_phase: Phase,
    pub display: DisplayState,
    pub discs: Vec<DiscCapacity>,
    /// Last confirmed folder.
    pub current_dir: Option<PathBuf>,
    start_dir: Option<PathBuf>,
    pub chooser: Option<DirChooser>,
    /// Blocking error message; must be dismissed before anything else.
    pub error_dialog: Option<String>,
    /// Human name of the scanned file type, e.g. `MP3`.
    file_kind: String,
}

impl App {
    /// Create a new `App` reporting against `discs`.
    pub fn new(discs: Vec<DiscCapacity>, extension: &str, start_dir: Option<PathBuf>) -> Self {
        Self {
            phase: Phase::Idle,
            resume_phase: Phase::Idle,
            display: DisplayState::initial(&discs),
            discs,
            current_dir: None,
            start_dir,
            chooser: None,
            error_dialog: None,
            file_kind: extension.trim().trim_start_matches('.').to_ascii_uppercase(),
        }
    }

    /// Folder the chooser opens in: the last confirmed one, then the
    /// configured start folder, then the working directory.
    pub fn browse_root(&self) -> PathBuf {
        self.current_dir
            .clone()
            .or_else(|| self.start_dir.clone())
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("/"))
    }

    /// Open the folder chooser. Ignored while selecting or calculating.
    pub fn begin_browse(&mut self) {
        match self.phase {
            Phase::Idle | Phase::Complete | Phase::Failed => {
                self.resume_phase = self.phase;
                self.chooser = Some(DirChooser::open(&self.browse_root()));
                self.phase = Phase::Selecting;
            }
            Phase::Selecting | Phase::Calculating => {}
        }
    }

    /// Close the chooser without picking anything.
    pub fn cancel_browse(&mut self) {
        if self.phase == Phase::Selecting {
            self.chooser = None;
            self.phase = self.resume_phase;
        }
    }

    /// Take the folder the chooser is showing and move to `Calculating`.
    ///
    /// Returns the folder to scan. The caller runs the scan and hands the
    /// result to `finish_calculation`.
    pub fn confirm_selection(&mut self) -> Option<PathBuf> {
        if self.phase != Phase::Selecting {
            return None;
        }
        let dir = self.chooser.take()?.confirm();
        self.display = self.display.calculating(&dir);
        self.current_dir = Some(dir.clone());
        self.phase = Phase::Calculating;
        Some(dir)
    }

    /// Apply the outcome of a scan started by `confirm_selection`.
    pub fn finish_calculation(&mut self, result: Result<Aggregate, ScanError>) {
        if self.phase != Phase::Calculating {
            tracing::debug!(phase = ?self.phase, "ignoring scan result outside of a calculation");
            return;
        }

        match result {
            Ok(aggregate) => {
                self.display = self.display.complete(aggregate.total_seconds, &self.discs);
                self.phase = Phase::Complete;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to calculate duration");
                self.error_dialog = Some(self.error_text(&e));
                self.display = self.display.failed();
                self.phase = Phase::Failed;
            }
        }
    }

    fn error_text(&self, e: &ScanError) -> String {
        match e {
            ScanError::NoFilesFound { .. } => {
                format!("No {} files found in the selected folder.", self.file_kind)
            }
            ScanError::ReadDir { source, .. } => {
                format!("Cannot read the selected folder: {source}")
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error_dialog = None;
    }
}
