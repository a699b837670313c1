//! The root of the mirrored session graph.

use serde::{Deserialize, Serialize};

use crate::bank::Bank;
use crate::browser::{Browser, BrowserResult};
use crate::device::{CursorDevice, Parameter};
use crate::session::{Clip, Groove, Project, Quantize};
use crate::track::{Track, TrackSend};
use crate::transport::Transport;

/// Slot counts each bank advertises before the host sends its own `count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankSizes {
    pub tracks: usize,
    pub sends: usize,
    pub parameters: usize,
    pub siblings: usize,
    pub browser_results: usize,
}

impl Default for BankSizes {
    fn default() -> Self {
        Self {
            tracks: 8,
            sends: 8,
            parameters: 8,
            siblings: 8,
            browser_results: 16,
        }
    }
}

/// In-memory mirror of the host session.
///
/// Everything is mutated in place. Nothing is removed during a session;
/// shrinking a bank only narrows what is addressable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMirror {
    pub transport: Transport,
    pub project: Project,
    tracks: Bank<Track>,
    pub master: Track,
    pub device: CursorDevice,
    pub browser: Browser,
    pub clip: Clip,
    pub groove: Groove,
    pub quantize: Quantize,
    sizes: BankSizes,
}

impl Default for ModelMirror {
    fn default() -> Self {
        Self::new(BankSizes::default())
    }
}

impl ModelMirror {
    pub fn new(sizes: BankSizes) -> Self {
        Self {
            transport: Transport::default(),
            project: Project::default(),
            tracks: Bank::with_count(sizes.tracks, |i| Track::new(i as i32, sizes.sends)),
            master: Track::master(sizes.sends),
            device: CursorDevice::new(sizes.siblings, sizes.parameters),
            browser: Browser::new(sizes.browser_results),
            clip: Clip::default(),
            groove: Groove::default(),
            quantize: Quantize::default(),
            sizes,
        }
    }

    pub fn track_count(&self) -> usize {
        self.tracks.count()
    }

    /// Advertise the number of tracks in the bank.
    pub fn set_track_count(&mut self, count: usize) {
        let sends = self.sizes.sends;
        self.tracks.resize(count, |i| Track::new(i as i32, sends));
    }

    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn track_mut(&mut self, index: usize) -> Option<&mut Track> {
        self.tracks.get_mut(index)
    }

    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    pub fn selected_track(&self) -> Option<&Track> {
        self.tracks.iter().find(|t| t.selected)
    }

    /// Update the selection flag of a bank track. Selecting a track
    /// deselects every other bank slot; the master track is not touched.
    /// Returns false if the index is not addressable.
    pub fn select_track(&mut self, index: usize, selected: bool) -> bool {
        if index >= self.tracks.count() {
            return false;
        }
        for track in self.tracks.iter_mut() {
            if track.index == index as i32 {
                track.selected = selected;
            } else if selected {
                track.selected = false;
            }
        }
        true
    }

    pub fn send(&self, track: usize, index: usize) -> Option<&TrackSend> {
        self.tracks.get(track).and_then(|t| t.send(index))
    }

    pub fn send_mut(&mut self, track: usize, index: usize) -> Option<&mut TrackSend> {
        self.tracks.get_mut(track).and_then(|t| t.send_mut(index))
    }

    pub fn parameter(&self, index: usize) -> Option<&Parameter> {
        self.device.parameter(index)
    }

    pub fn parameter_mut(&mut self, index: usize) -> Option<&mut Parameter> {
        self.device.parameter_mut(index)
    }

    pub fn browser_result(&self, index: usize) -> Option<&BrowserResult> {
        self.browser.result(index)
    }

    pub fn browser_result_mut(&mut self, index: usize) -> Option<&mut BrowserResult> {
        self.browser.result_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_banks_use_configured_sizes() {
        let model = ModelMirror::new(BankSizes {
            tracks: 4,
            sends: 2,
            parameters: 3,
            siblings: 1,
            browser_results: 5,
        });
        assert_eq!(model.track_count(), 4);
        assert!(model.send(3, 1).is_some());
        assert!(model.send(3, 2).is_none());
        assert!(model.parameter(2).is_some());
        assert!(model.parameter(3).is_none());
        assert!(model.browser_result(4).is_some());
        assert_eq!(model.master.sends.count(), 2);
    }

    #[test]
    fn track_slots_carry_their_index() {
        let mut model = ModelMirror::default();
        model.set_track_count(12);
        let indices: Vec<i32> = model.tracks().map(|t| t.index).collect();
        assert_eq!(indices, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn shrinking_the_bank_marks_tracks_absent() {
        let mut model = ModelMirror::default();
        if let Some(track) = model.track_mut(5) {
            track.exists = true;
            track.name = "Bass".to_string();
        }
        model.set_track_count(4);
        assert!(model.track(5).is_none());
        model.set_track_count(8);
        let track = model.track(5).map(|t| (t.exists, t.name.clone()));
        assert_eq!(track, Some((false, "Bass".to_string())));
    }

    #[test]
    fn selection_is_exclusive_within_bank() {
        let mut model = ModelMirror::default();
        model.master.selected = true;
        assert!(model.select_track(1, true));
        assert!(model.select_track(3, true));
        let selected: Vec<i32> = model.tracks().filter(|t| t.selected).map(|t| t.index).collect();
        assert_eq!(selected, vec![3]);
        assert!(model.master.selected);
        assert!(!model.select_track(8, true));
    }

    #[test]
    fn mutable_accessors_respect_counts() {
        let mut model = ModelMirror::default();
        if let Some(send) = model.send_mut(0, 1) {
            send.name = "Reverb".to_string();
        }
        if let Some(param) = model.parameter_mut(7) {
            param.value = 300;
        }
        if let Some(result) = model.browser_result_mut(0) {
            result.name = Some("Pad".to_string());
        }
        assert_eq!(model.send(0, 1).map(|s| s.name.as_str()), Some("Reverb"));
        assert_eq!(model.parameter(7).map(|p| p.value), Some(300));
        assert_eq!(model.browser_result(0).map(|r| r.display_name()), Some("Pad"));
        assert!(model.send_mut(0, 8).is_none());
        assert!(model.parameter_mut(8).is_none());
        assert!(model.browser_result_mut(16).is_none());
    }

    #[test]
    fn mirror_serializes_to_json() {
        let model = ModelMirror::default();
        let json = serde_json::to_string(&model).unwrap();
        let back: ModelMirror = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);
    }
}
