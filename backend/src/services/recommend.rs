use crate::models::{Profile, ProfileText, Recommendation};

const FALLBACK_INTERESTS: &str = "AI topics";

/// Values of `ours` also present in `theirs`, in `ours` order, without repeats.
///
/// Comparison is exact and case-sensitive.
fn shared<'a>(ours: &'a [String], theirs: &[String]) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for value in ours {
        if theirs.contains(value) && !out.contains(&value.as_str()) {
            out.push(value);
        }
    }
    out
}

pub fn build_recommendation<P: ProfileText>(submitter: &P, matched: &Profile) -> Recommendation {
    let shared_skills = shared(submitter.skills(), &matched.skills);
    let shared_goals = shared(submitter.goals(), &matched.goals);

    let interests = if shared_skills.is_empty() {
        FALLBACK_INTERESTS.to_string()
    } else {
        shared_skills.join(", ")
    };
    let why = format!(
        "You share interests in {interests}. {} is working on {}.",
        matched.name,
        matched.goals.join(", ")
    );

    let mut conversation_starters = Vec::new();
    if let Some(skill) = shared_skills.first() {
        conversation_starters.push(format!(
            "Ask {} about their experience with {skill}.",
            matched.name
        ));
    }
    if let Some(goal) = shared_goals.first() {
        conversation_starters.push(format!("Discuss your shared goal: {goal}."));
    }
    if let Some(post) = matched.posts.first() {
        conversation_starters.push(format!("Mention their recent post: '{post}'"));
    }
    if conversation_starters.is_empty() {
        conversation_starters.push(format!("Ask {} about their work in AI.", matched.name));
    }

    Recommendation {
        name: matched.name.clone(),
        why,
        conversation_starters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileInput;
    use crate::services::profile_db::seed_profiles;

    fn alex() -> Profile {
        seed_profiles().remove(0)
    }

    fn submitter(skills: &[&str], goals: &[&str]) -> ProfileInput {
        ProfileInput {
            name: Some("Me".into()),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            goals: goals.iter().map(|s| s.to_string()).collect(),
            work_experience: vec![],
            posts: vec![],
        }
    }

    #[test]
    fn shared_skills_and_goal() {
        let rec = build_recommendation(
            &submitter(&["AI Safety", "Python"], &["Build safe AI systems"]),
            &alex(),
        );
        assert_eq!(rec.name, "Alex Kim");
        assert_eq!(
            rec.why,
            "You share interests in AI Safety, Python. Alex Kim is working on Build safe AI systems."
        );
        assert_eq!(
            rec.conversation_starters,
            vec![
                "Ask Alex Kim about their experience with AI Safety.".to_string(),
                "Discuss your shared goal: Build safe AI systems.".to_string(),
                "Mention their recent post: 'Excited about AI regulation!'".to_string(),
            ]
        );
    }

    #[test]
    fn first_shared_skill_follows_submitter_order() {
        let rec = build_recommendation(&submitter(&["Python", "AI Safety"], &[]), &alex());
        assert_eq!(
            rec.conversation_starters[0],
            "Ask Alex Kim about their experience with Python."
        );
        assert!(rec.why.starts_with("You share interests in Python, AI Safety."));
    }

    #[test]
    fn duplicates_are_listed_once() {
        let rec = build_recommendation(&submitter(&["Python", "Python"], &[]), &alex());
        assert!(rec.why.starts_with("You share interests in Python. "));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let rec = build_recommendation(&submitter(&["python"], &[]), &alex());
        assert!(rec.why.contains("AI topics"));
    }

    #[test]
    fn no_overlap_and_no_posts_gives_single_fallback() {
        let mut matched = alex();
        matched.posts.clear();
        let rec = build_recommendation(&submitter(&["Cooking"], &["Open a bakery"]), &matched);
        assert!(rec.why.contains("AI topics"));
        assert_eq!(
            rec.conversation_starters,
            vec!["Ask Alex Kim about their work in AI.".to_string()]
        );
    }

    #[test]
    fn no_overlap_with_posts_quotes_first_post_only() {
        let rec = build_recommendation(&submitter(&[], &[]), &alex());
        assert_eq!(
            rec.conversation_starters,
            vec!["Mention their recent post: 'Excited about AI regulation!'".to_string()]
        );
    }

    #[test]
    fn goals_are_all_listed() {
        let mut matched = alex();
        matched.goals.push("Mentor researchers".into());
        let rec = build_recommendation(&submitter(&[], &[]), &matched);
        assert!(rec.why.ends_with("working on Build safe AI systems, Mentor researchers."));
    }
}
