pub use self::hit_object_rhythm::{closest_rhythm, HitObjectRhythm, COMMON_RHYTHMS};

mod hit_object_rhythm;
