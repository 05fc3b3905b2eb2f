pub mod alternating_mono_pattern;
pub mod mono_streak;
pub mod repeating_hit_patterns;
