use crate::models::{Profile, ProfileText};
use crate::services::embed::{Embeddable, SeededEmbed};
use crate::services::similarity::{rank, Scored};

#[derive(Clone, Debug)]
pub struct DBEntry {
    pub profile: Profile,
    pub embedding: Vec<f32>,
}

/// Read-only in-memory profile store.
///
/// Embeddings are computed once in the constructor and never touched again.
/// There is no way to add, update or remove entries afterwards.
pub struct ProfileDB<T: Embeddable> {
    entries: Vec<DBEntry>,
    embed_engine: T,
}

impl ProfileDB<SeededEmbed> {
    /// Store holding the built-in sample profiles.
    pub fn seeded() -> Self {
        ProfileDB::new(SeededEmbed::default(), seed_profiles())
    }
}

impl<T: Embeddable> ProfileDB<T> {
    pub fn new(embed_engine: T, profiles: Vec<Profile>) -> Self {
        let entries = profiles
            .into_iter()
            .map(|profile| {
                let embedding = embed_engine.embed_profile(&profile);
                DBEntry { profile, embedding }
            })
            .collect::<Vec<_>>();
        tracing::debug!(profiles = entries.len(), "profile store initialised");
        ProfileDB {
            entries,
            embed_engine,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[DBEntry] {
        &self.entries
    }

    /// Stored profiles in storage order, without embeddings.
    pub fn profiles(&self) -> impl Iterator<Item = &Profile> {
        self.entries.iter().map(|entry| &entry.profile)
    }

    /// Every stored profile ranked against `query`, best first.
    pub fn rank_all<P: ProfileText>(&self, query: &P) -> Vec<Scored<&Profile>> {
        let embedding = self.embed_engine.embed_profile(query);
        rank(
            &embedding,
            self.entries
                .iter()
                .map(|entry| (entry.embedding.as_slice(), &entry.profile)),
        )
    }

    /// The `nn` best matches for `query`.
    pub fn get<P: ProfileText>(&self, query: &P, nn: usize) -> Vec<Scored<&Profile>> {
        let mut ranked = self.rank_all(query);
        ranked.truncate(nn);
        ranked
    }
}

pub fn seed_profiles() -> Vec<Profile> {
    vec![
        Profile::new(
            1,
            "Alex Kim",
            &["AI Safety", "Machine Learning", "Python"],
            &["Build safe AI systems"],
            &["Researcher at OpenAI"],
            &["Excited about AI regulation!", "Working on robust ML models."],
        ),
        Profile::new(
            2,
            "Samira Patel",
            &["AI Ethics", "NLP", "Data Science"],
            &["Promote ethical AI"],
            &["AI Policy at DeepMind"],
            &["AI ethics in startups.", "NLP for social good."],
        ),
        Profile::new(
            3,
            "Jordan Lee",
            &["Reinforcement Learning", "AI Safety", "C++"],
            &["Advance RL safety"],
            &["Engineer at Anthropic"],
            &["RL for safe agents.", "Attending NeurIPS 2025!"],
        ),
    ]
}
