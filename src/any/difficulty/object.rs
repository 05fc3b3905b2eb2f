pub trait IDifficultyObject: HasStartTime + Sized {
    type DifficultyObjects: DifficultyObjects<Self> + ?Sized;

    fn idx(&self) -> usize;

    /// Time since the previous object, floored to avoid blowups on very
    /// dense maps.
    fn delta_time(&self) -> f64;

    fn previous<'a>(
        &self,
        backwards_idx: usize,
        diff_objects: &'a Self::DifficultyObjects,
    ) -> Option<&'a Self> {
        self.idx()
            .checked_sub(backwards_idx + 1)
            .and_then(|idx| diff_objects.get(idx))
    }

    fn next<'a>(
        &self,
        forwards_idx: usize,
        diff_objects: &'a Self::DifficultyObjects,
    ) -> Option<&'a Self> {
        diff_objects.get(self.idx() + (forwards_idx + 1))
    }
}

pub trait HasStartTime {
    fn start_time(&self) -> f64;
}

/// Random access into the list of all difficulty objects.
pub trait DifficultyObjects<T> {
    fn get(&self, idx: usize) -> Option<&T>;
}

impl<T> DifficultyObjects<T> for [T] {
    fn get(&self, idx: usize) -> Option<&T> {
        <[T]>::get(self, idx)
    }
}
