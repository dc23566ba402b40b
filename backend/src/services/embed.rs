use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

use crate::models::ProfileText;

pub const DEFAULT_DIMS: usize = 128;

pub trait Embeddable {
    fn to_embedding(&self, content: &str) -> Vec<f32>;

    fn embed_profile<P: ProfileText>(&self, profile: &P) -> Vec<f32> {
        self.to_embedding(&profile.text_blob())
    }
}

/// Content fingerprint: a PRNG seeded from a hash of the text.
///
/// Equal text always gives the same vector. There is no notion of
/// relatedness beyond exact text equality.
#[derive(Debug, Clone)]
pub struct SeededEmbed {
    dimensions: usize,
}

impl Default for SeededEmbed {
    fn default() -> Self {
        SeededEmbed::new(DEFAULT_DIMS)
    }
}

impl SeededEmbed {
    pub fn new(dimensions: usize) -> Self {
        SeededEmbed { dimensions }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}

/// First four bytes of the SHA-256 digest, big endian.
pub fn content_seed(content: &str) -> u32 {
    let digest = Sha256::digest(content.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

impl Embeddable for SeededEmbed {
    fn to_embedding(&self, content: &str) -> Vec<f32> {
        let mut rng = StdRng::seed_from_u64(u64::from(content_seed(content)));
        (0..self.dimensions).map(|_| rng.r#gen::<f32>()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileInput;

    fn sample() -> ProfileInput {
        ProfileInput {
            name: None,
            skills: vec!["AI Safety".into(), "Python".into()],
            goals: vec!["Build safe AI systems".into()],
            work_experience: vec!["Researcher".into()],
            posts: vec![],
        }
    }

    #[test]
    fn same_profile_gives_same_vector() {
        let model = SeededEmbed::default();
        assert_eq!(model.embed_profile(&sample()), model.embed_profile(&sample()));
    }

    #[test]
    fn vector_has_default_dimensions_in_unit_range() {
        let embedding = SeededEmbed::default().embed_profile(&sample());
        assert_eq!(embedding.len(), DEFAULT_DIMS);
        assert!(embedding.iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn name_does_not_affect_vector() {
        let model = SeededEmbed::default();
        let mut named = sample();
        named.name = Some("Someone".into());
        assert_eq!(model.embed_profile(&named), model.embed_profile(&sample()));
    }

    #[test]
    fn different_text_gives_different_vector() {
        let model = SeededEmbed::default();
        let mut other = sample();
        other.skills.push("Rust".into());
        assert_ne!(model.embed_profile(&other), model.embed_profile(&sample()));
    }

    #[test]
    fn empty_text_still_embeds() {
        let model = SeededEmbed::new(16);
        let first = model.to_embedding("");
        assert_eq!(first.len(), 16);
        assert_eq!(first, model.to_embedding(""));
    }

    #[test]
    fn seed_is_stable() {
        // sha256("") = e3b0c442...
        assert_eq!(content_seed(""), 0xe3b0_c442);
    }
}
