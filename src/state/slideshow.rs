//! Slideshow controller: the current index, its advance rule and the single
//! decode slot shared by regular loads and preloads.

use crate::error::{AppError, Result};
use crate::image_loader::{self, Bitmap, SurfaceSize};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// What to do when a file in the cycle fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// End the session with the error.
    Abort,
    /// Keep the previous slide on screen and continue with the next tick.
    Skip,
}

/// Decision taken for one failed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureAction {
    Skip,
    Abort,
}

/// Occupant of the decode slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSlot {
    Idle,
    Showing,
    Preloading,
}

/// Owns the image list and the index into it.
///
/// Only the UI thread touches the controller; worker threads receive a path
/// and hand back a bitmap.
#[derive(Debug)]
pub struct SlideshowController {
    directory: PathBuf,
    paths: Vec<PathBuf>,
    index: usize,
    slot: LoadSlot,
    pending_tick: bool,
    policy: FailurePolicy,
}

impl SlideshowController {
    /// Starts at index 0. An empty list is rejected up front.
    pub fn new(directory: PathBuf, paths: Vec<PathBuf>, policy: FailurePolicy) -> Result<Self> {
        if paths.is_empty() {
            return Err(AppError::NoImages(directory));
        }

        Ok(Self {
            directory,
            paths,
            index: 0,
            slot: LoadSlot::Idle,
            pending_tick: false,
            policy,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_path(&self) -> &Path {
        &self.paths[self.index]
    }

    pub fn slot(&self) -> LoadSlot {
        self.slot
    }

    fn next_index(&self) -> usize {
        (self.index + 1) % self.paths.len()
    }

    /// Path that the next advance will land on.
    pub fn peek_next(&self) -> &Path {
        &self.paths[self.next_index()]
    }

    /// Moves to the next path, wrapping after the last one.
    pub fn advance(&mut self) -> &Path {
        self.index = self.next_index();
        self.current_path()
    }

    /// Handles a timer tick.
    ///
    /// When the slot is free the index advances and the slot is taken for
    /// the new path. Otherwise the tick is remembered and replayed by
    /// [`complete_load`](Self::complete_load); ticks arriving while one is
    /// already pending collapse into it.
    pub fn tick(&mut self) -> Option<PathBuf> {
        if self.slot != LoadSlot::Idle {
            if self.pending_tick {
                debug!("Tick dropped, one is already pending");
            } else {
                debug!("Tick deferred while {:?}", self.slot);
            }
            self.pending_tick = true;
            return None;
        }

        self.pending_tick = false;
        self.slot = LoadSlot::Showing;
        Some(self.advance().to_path_buf())
    }

    /// Takes the slot for a background decode of the next path.
    pub fn begin_preload(&mut self) -> Option<PathBuf> {
        if self.slot != LoadSlot::Idle || self.paths.len() < 2 {
            return None;
        }
        self.slot = LoadSlot::Preloading;
        Some(self.peek_next().to_path_buf())
    }

    /// Frees the slot. Returns true when a deferred tick must run now.
    pub fn complete_load(&mut self) -> bool {
        self.slot = LoadSlot::Idle;
        std::mem::take(&mut self.pending_tick)
    }

    /// Applies the failure policy to an error raised for the current slide.
    pub fn resolve_failure(&self, err: &AppError) -> FailureAction {
        match self.policy {
            FailurePolicy::Abort => FailureAction::Abort,
            FailurePolicy::Skip => {
                warn!(
                    "Skipping slide {}/{}: {}",
                    self.index + 1,
                    self.paths.len(),
                    err
                );
                FailureAction::Skip
            }
        }
    }
}

/// Decodes the slide at the current index, for the synchronous first load.
///
/// Under [`FailurePolicy::Skip`] the index moves forward until a file
/// decodes, and [`AppError::NoDecodableImages`] is returned once every file
/// has failed. Under [`FailurePolicy::Abort`] the first failure is returned
/// as is and the index is left where it was.
pub fn load_first_decodable(
    slideshow: &mut SlideshowController,
    size: SurfaceSize,
) -> Result<(PathBuf, Bitmap)> {
    if slideshow.is_empty() {
        return Err(AppError::NoImages(slideshow.directory.clone()));
    }

    for _ in 0..slideshow.len() {
        let path = slideshow.current_path().to_path_buf();
        match image_loader::load_scaled_blocking(&path, size) {
            Ok(bitmap) => return Ok((path, bitmap)),
            Err(err) => match slideshow.resolve_failure(&err) {
                FailureAction::Abort => return Err(err),
                FailureAction::Skip => {
                    slideshow.advance();
                }
            },
        }
    }

    Err(AppError::NoDecodableImages(slideshow.directory.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::fs;

    fn paths(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("/photos/{i}.jpg"))).collect()
    }

    fn controller(n: usize, policy: FailurePolicy) -> SlideshowController {
        SlideshowController::new(PathBuf::from("/photos"), paths(n), policy).unwrap()
    }

    #[test]
    fn empty_list_is_rejected() {
        let err = SlideshowController::new(PathBuf::from("/empty"), vec![], FailurePolicy::Abort)
            .unwrap_err();
        assert!(matches!(err, AppError::NoImages(dir) if dir == Path::new("/empty")));
    }

    #[test]
    fn starts_at_first_path() {
        let c = controller(3, FailurePolicy::Abort);
        assert_eq!(c.len(), 3);
        assert!(!c.is_empty());
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.current_path(), Path::new("/photos/0.jpg"));
        assert_eq!(c.slot(), LoadSlot::Idle);
    }

    #[test]
    fn cycles_through_all_paths_and_wraps() {
        let mut c = controller(3, FailurePolicy::Abort);
        let mut seen = vec![];
        for _ in 0..6 {
            let path = c.tick().unwrap();
            seen.push(path);
            assert!(!c.complete_load());
        }

        let expected: Vec<PathBuf> = [1, 2, 0, 1, 2, 0]
            .iter()
            .map(|i| PathBuf::from(format!("/photos/{i}.jpg")))
            .collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn single_path_reloads_on_every_tick() {
        let mut c = controller(1, FailurePolicy::Abort);
        for _ in 0..3 {
            assert_eq!(c.tick().unwrap(), PathBuf::from("/photos/0.jpg"));
            assert_eq!(c.current_index(), 0);
            c.complete_load();
        }
    }

    #[test]
    fn tick_while_loading_is_deferred() {
        let mut c = controller(3, FailurePolicy::Abort);
        assert!(c.tick().is_some());
        assert_eq!(c.current_index(), 1);

        assert!(c.tick().is_none());
        assert_eq!(c.current_index(), 1);

        assert!(c.complete_load());
        assert_eq!(c.tick().unwrap(), PathBuf::from("/photos/2.jpg"));
    }

    #[test]
    fn pending_ticks_coalesce() {
        let mut c = controller(4, FailurePolicy::Abort);
        c.tick();
        assert!(c.tick().is_none());
        assert!(c.tick().is_none());
        assert!(c.tick().is_none());

        assert!(c.complete_load());
        c.tick();
        assert!(!c.complete_load());
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn preload_takes_the_slot_for_the_next_path() {
        let mut c = controller(3, FailurePolicy::Abort);
        assert_eq!(c.begin_preload().unwrap(), PathBuf::from("/photos/1.jpg"));
        assert_eq!(c.slot(), LoadSlot::Preloading);
        assert_eq!(c.current_index(), 0);

        assert!(c.begin_preload().is_none());
        assert!(c.tick().is_none());
        assert!(c.complete_load());
        assert_eq!(c.tick().unwrap(), PathBuf::from("/photos/1.jpg"));
    }

    #[test]
    fn single_path_needs_no_preload() {
        let mut c = controller(1, FailurePolicy::Abort);
        assert!(c.begin_preload().is_none());
        assert_eq!(c.slot(), LoadSlot::Idle);
    }

    #[test]
    fn failure_policy_decides_the_action() {
        let err = AppError::image_load("/photos/1.jpg", "bad header");
        assert_eq!(
            controller(2, FailurePolicy::Abort).resolve_failure(&err),
            FailureAction::Abort
        );
        assert_eq!(
            controller(2, FailurePolicy::Skip).resolve_failure(&err),
            FailureAction::Skip
        );
    }

    #[test]
    fn failing_index_is_reached_in_order() {
        let mut c = controller(4, FailurePolicy::Abort);
        let bad = Path::new("/photos/2.jpg");
        let mut ticks = 0;
        loop {
            ticks += 1;
            let path = c.tick().unwrap();
            if path == bad {
                break;
            }
            c.complete_load();
        }
        assert_eq!(ticks, 2);
        assert_eq!(c.current_index(), 2);
    }

    fn fixture_dir(entries: &[(&str, bool)]) -> (tempfile::TempDir, Vec<PathBuf>) {
        let dir = tempfile::tempdir().unwrap();
        let paths = entries
            .iter()
            .map(|(name, decodable)| {
                let path = dir.path().join(name);
                if *decodable {
                    RgbImage::from_pixel(6, 3, Rgb([0, 90, 180])).save(&path).unwrap();
                } else {
                    fs::write(&path, b"not an image").unwrap();
                }
                path
            })
            .collect();
        (dir, paths)
    }

    fn surface() -> SurfaceSize {
        SurfaceSize::new(16, 9).unwrap()
    }

    #[test]
    fn first_load_decodes_index_zero() {
        let (dir, paths) = fixture_dir(&[("a.png", true), ("b.png", false)]);
        let mut c =
            SlideshowController::new(dir.path().to_path_buf(), paths.clone(), FailurePolicy::Abort)
                .unwrap();

        let (path, bitmap) = load_first_decodable(&mut c, surface()).unwrap();

        assert_eq!(path, paths[0]);
        assert_eq!((bitmap.width, bitmap.height), (16, 9));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn abort_policy_reports_the_bad_file_at_its_index() {
        let (dir, paths) = fixture_dir(&[("a.png", true), ("b.png", true), ("c.png", false)]);
        let mut c =
            SlideshowController::new(dir.path().to_path_buf(), paths.clone(), FailurePolicy::Abort)
                .unwrap();
        c.tick();
        c.complete_load();
        c.tick();
        c.complete_load();
        assert_eq!(c.current_index(), 2);

        let err = load_first_decodable(&mut c, surface()).unwrap_err();

        match err {
            AppError::ImageLoad { path, .. } => assert_eq!(path, paths[2]),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn skip_policy_moves_to_the_first_decodable_file() {
        let (dir, paths) = fixture_dir(&[("a.txt", false), ("b.db", false), ("c.png", true)]);
        let mut c =
            SlideshowController::new(dir.path().to_path_buf(), paths.clone(), FailurePolicy::Skip)
                .unwrap();

        let (path, _) = load_first_decodable(&mut c, surface()).unwrap();

        assert_eq!(path, paths[2]);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn skip_policy_with_nothing_decodable_fails() {
        let (dir, paths) = fixture_dir(&[("a.txt", false), ("b.db", false)]);
        let mut c =
            SlideshowController::new(dir.path().to_path_buf(), paths, FailurePolicy::Skip)
                .unwrap();

        let err = load_first_decodable(&mut c, surface()).unwrap_err();

        assert!(matches!(err, AppError::NoDecodableImages(d) if d == dir.path()));
        assert_eq!(c.current_index(), 0);
    }
}
