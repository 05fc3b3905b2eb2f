use std::ops::Index;

use crate::{
    any::difficulty::object::{DifficultyObjects, HasStartTime, IDifficultyObject},
    taiko::{
        difficulty::{
            color::{ColorHierarchy, TaikoColorData},
            rhythm::{closest_rhythm, HitObjectRhythm},
        },
        object::{HitType, TaikoObject, TaikoObjectKind},
    },
};

#[derive(Clone, Debug)]
pub struct TaikoDifficultyObject {
    pub idx: usize,
    pub base_hit_type: TaikoObjectKind,
    pub start_time: f64,
    pub delta_time: f64,
    pub rhythm: &'static HitObjectRhythm,
    pub color: TaikoColorData,
    /// Position among notes of the same color.
    pub mono_idx: Option<usize>,
    /// Position among all notes.
    pub note_idx: Option<usize>,
}

impl TaikoDifficultyObject {
    pub const MIN_DELTA_TIME: f64 = 50.0;

    pub fn new(
        hit_object: &TaikoObject,
        last: Option<&TaikoObject>,
        clock_rate: f64,
        objects: &TaikoDifficultyObjects,
    ) -> Self {
        let idx = objects.len();
        let start_time = hit_object.start_time / clock_rate;

        let delta_time = last.map_or(Self::MIN_DELTA_TIME, |last| {
            (start_time - last.start_time / clock_rate).max(Self::MIN_DELTA_TIME)
        });

        let rhythm = match objects.objects.last() {
            Some(prev) if idx >= 2 => closest_rhythm(delta_time / prev.delta_time),
            _ => HitObjectRhythm::constant(),
        };

        let (mono_idx, note_idx) = match hit_object.kind.hit_type() {
            Some(HitType::Center) => (Some(objects.centres.len()), Some(objects.notes.len())),
            Some(HitType::Rim) => (Some(objects.rims.len()), Some(objects.notes.len())),
            None => (None, None),
        };

        Self {
            idx,
            base_hit_type: hit_object.kind,
            start_time,
            delta_time,
            rhythm,
            color: TaikoColorData::default(),
            mono_idx,
            note_idx,
        }
    }

    pub const fn is_hit(&self) -> bool {
        self.base_hit_type.is_hit()
    }
}

impl HasStartTime for TaikoDifficultyObject {
    fn start_time(&self) -> f64 {
        self.start_time
    }
}

impl IDifficultyObject for TaikoDifficultyObject {
    type DifficultyObjects = TaikoDifficultyObjects;

    fn idx(&self) -> usize {
        self.idx
    }

    fn delta_time(&self) -> f64 {
        self.delta_time
    }
}

/// All difficulty objects of a map alongside lookups by color and the
/// color encoding.
#[derive(Clone, Debug, Default)]
pub struct TaikoDifficultyObjects {
    pub objects: Vec<TaikoDifficultyObject>,
    /// Indices of all centre notes.
    pub centres: Vec<usize>,
    /// Indices of all rim notes.
    pub rims: Vec<usize>,
    /// Indices of all notes.
    pub notes: Vec<usize>,
    pub color: ColorHierarchy,
}

impl TaikoDifficultyObjects {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            objects: Vec::with_capacity(capacity),
            centres: Vec::new(),
            rims: Vec::new(),
            notes: Vec::with_capacity(capacity),
            color: ColorHierarchy::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn push(&mut self, hit_object: TaikoDifficultyObject) {
        let idx = hit_object.idx;

        match hit_object.base_hit_type.hit_type() {
            Some(HitType::Center) => self.centres.push(idx),
            Some(HitType::Rim) => self.rims.push(idx),
            None => {}
        }

        if hit_object.is_hit() {
            self.notes.push(idx);
        }

        self.objects.push(hit_object);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaikoDifficultyObject> {
        self.objects.iter()
    }

    /// The note of the same color `backwards_idx + 1` positions before `curr`.
    pub fn previous_mono(
        &self,
        curr: &TaikoDifficultyObject,
        backwards_idx: usize,
    ) -> Option<&TaikoDifficultyObject> {
        let mono = match curr.base_hit_type.hit_type()? {
            HitType::Center => &self.centres,
            HitType::Rim => &self.rims,
        };

        curr.mono_idx?
            .checked_sub(backwards_idx + 1)
            .and_then(|idx| mono.get(idx))
            .map(|&idx| &self.objects[idx])
    }

    /// The note `backwards_idx + 1` positions before `curr`.
    pub fn previous_note(
        &self,
        curr: &TaikoDifficultyObject,
        backwards_idx: usize,
    ) -> Option<&TaikoDifficultyObject> {
        curr.note_idx?
            .checked_sub(backwards_idx + 1)
            .and_then(|idx| self.notes.get(idx))
            .map(|&idx| &self.objects[idx])
    }
}

impl DifficultyObjects<TaikoDifficultyObject> for TaikoDifficultyObjects {
    fn get(&self, idx: usize) -> Option<&TaikoDifficultyObject> {
        self.objects.get(idx)
    }
}

impl Index<usize> for TaikoDifficultyObjects {
    type Output = TaikoDifficultyObject;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.objects[idx]
    }
}
