use serde::{Deserialize, Serialize};

/// Read access to the text-bearing fields of a profile.
///
/// Implemented by both stored and submitted profiles so the same
/// embedding and overlap logic applies to each.
pub trait ProfileText {
    fn skills(&self) -> &[String];
    fn goals(&self) -> &[String];
    fn work_experience(&self) -> &[String];
    fn posts(&self) -> &[String];

    /// Fields joined in a fixed order: skills, goals, work experience, posts.
    fn text_blob(&self) -> String {
        [
            self.skills(),
            self.goals(),
            self.work_experience(),
            self.posts(),
        ]
        .iter()
        .map(|field| field.join(" "))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Profile submitted to `POST /recommend`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ProfileInput {
    #[serde(default)]
    pub name: Option<String>,
    pub skills: Vec<String>,
    pub goals: Vec<String>,
    pub work_experience: Vec<String>,
    #[serde(default)]
    pub posts: Vec<String>,
}

/// Public view of a stored profile. Never carries the embedding.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Profile {
    pub id: u32,
    pub name: String,
    pub skills: Vec<String>,
    pub goals: Vec<String>,
    pub work_experience: Vec<String>,
    pub posts: Vec<String>,
}

impl Profile {
    pub fn new(
        id: u32,
        name: &str,
        skills: &[&str],
        goals: &[&str],
        work_experience: &[&str],
        posts: &[&str],
    ) -> Self {
        let owned = |values: &[&str]| values.iter().map(|v| v.to_string()).collect::<Vec<_>>();
        Self {
            id,
            name: name.to_string(),
            skills: owned(skills),
            goals: owned(goals),
            work_experience: owned(work_experience),
            posts: owned(posts),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Recommendation {
    pub name: String,
    pub why: String,
    pub conversation_starters: Vec<String>,
}

impl ProfileText for ProfileInput {
    fn skills(&self) -> &[String] {
        &self.skills
    }
    fn goals(&self) -> &[String] {
        &self.goals
    }
    fn work_experience(&self) -> &[String] {
        &self.work_experience
    }
    fn posts(&self) -> &[String] {
        &self.posts
    }
}

impl ProfileText for Profile {
    fn skills(&self) -> &[String] {
        &self.skills
    }
    fn goals(&self) -> &[String] {
        &self.goals
    }
    fn work_experience(&self) -> &[String] {
        &self.work_experience
    }
    fn posts(&self) -> &[String] {
        &self.posts
    }
}
