use std::sync::Arc;

/// Submission lifecycle. One generation cycle moves
/// Idle -> Loading -> Results | Failed, and back to Loading on resubmit.
#[derive(Debug, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Results,
    Failed(String),
}

/// One displayable gallery item: uploaded texture plus the raw description
/// and the PNG bytes kept around for saving.
pub struct GalleryEntry {
    pub texture: egui::TextureHandle,
    pub size: [usize; 2],
    pub description: String,
    pub png: Arc<Vec<u8>>,
}

/// Gallery display set and the single enlarged selection.
///
/// `enlarged`, when set, is always a valid index into `entries`; callers
/// only pass indices they just rendered, and `clear` resets both together.
#[derive(Default)]
pub struct GalleryState {
    pub entries: Vec<GalleryEntry>,
    pub enlarged: Option<usize>,
}

impl GalleryState {
    /// Click-to-toggle: selecting the enlarged item again closes it,
    /// selecting another item switches directly.
    pub fn toggle_enlarged(&mut self, index: usize) {
        self.enlarged = if self.enlarged == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn close_enlarged(&mut self) {
        self.enlarged = None;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.enlarged = None;
    }
}

/// Overall UI state. Generation-cycle fields are only mutated from worker
/// results; the gallery selection is only mutated by gallery interactions.
#[derive(Default)]
pub struct UIState {
    pub topic: String,
    pub phase: Phase,
    pub progress_percent: f32,
    /// Set at startup when the API credential is missing.
    pub setup_error: Option<String>,
    /// Transient save feedback shown in the status bar.
    pub notice: Option<String>,
    pub gallery: GalleryState,
}

impl UIState {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Whether a submission would be accepted right now. Empty topics,
    /// in-flight generations and a missing credential all suppress it.
    pub fn can_submit(&self) -> bool {
        !self.topic.trim().is_empty() && !self.is_loading() && self.setup_error.is_none()
    }

    /// Enter the loading state for a new cycle: prior results, error and
    /// selection are dropped, progress returns to zero.
    pub fn begin_generation(&mut self) {
        self.phase = Phase::Loading;
        self.progress_percent = 0.0;
        self.notice = None;
        self.gallery.clear();
    }

    pub fn fail(&mut self, message: String) {
        self.phase = Phase::Failed(message);
    }
}
