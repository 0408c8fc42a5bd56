pub mod rating_breakdown;
pub mod raw_match;
pub mod validated_match;
