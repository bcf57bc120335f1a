//! Personalized suggestion feed derived from conversation topics and the
//! user's skill level.

use std::collections::BTreeSet;

use chat_store::SkillLevel;
use serde::Serialize;

/// Grouped suggestions returned by the `/suggest` endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SuggestionFeed {
    pub project_ideas: Vec<String>,
    pub learning_resources: Vec<String>,
    pub tools_and_libraries: Vec<String>,
    pub best_practices: Vec<String>,
}

/// Build a feed from observed topics plus skill-level best practices.
pub fn personalized_feed(topics: &BTreeSet<&str>, skill_level: SkillLevel) -> SuggestionFeed {
    let mut feed = SuggestionFeed::default();

    if topics.contains("python") {
        feed.project_ideas
            .push("Build a REST API with FastAPI".to_string());
        feed.tools_and_libraries
            .push("Try pytest for testing".to_string());
        feed.learning_resources
            .push("Python Design Patterns".to_string());
    }

    if topics.contains("javascript") {
        feed.project_ideas
            .push("Create a real-time chat app with Socket.IO".to_string());
        feed.tools_and_libraries
            .push("Explore TypeScript for type safety".to_string());
        feed.learning_resources
            .push("JavaScript async/await patterns".to_string());
    }

    if topics.contains("react") {
        feed.project_ideas
            .push("Build a task management app with React and Redux".to_string());
        feed.tools_and_libraries
            .push("Check out Next.js for SSR".to_string());
        feed.learning_resources
            .push("React Hooks deep dive".to_string());
    }

    if topics.contains("database") {
        feed.best_practices
            .push("Always create indexes for frequently queried fields".to_string());
        feed.tools_and_libraries
            .push("Use MongoDB Compass for database visualization".to_string());
    }

    let practices: &[&str] = match skill_level {
        SkillLevel::Beginner => &[
            "Always use version control (Git)",
            "Write comments to explain your code",
            "Start with simple projects and gradually increase complexity",
        ],
        SkillLevel::Intermediate => &[
            "Focus on clean code principles",
            "Implement proper error handling",
            "Learn about design patterns",
        ],
        SkillLevel::Advanced => &[
            "Optimize for performance and scalability",
            "Implement comprehensive testing",
            "Consider microservices architecture",
        ],
    };
    feed.best_practices
        .extend(practices.iter().map(|s| s.to_string()));

    feed
}

/// Fixed feed for users with no stored profile or history.
pub fn default_feed() -> SuggestionFeed {
    SuggestionFeed {
        project_ideas: vec![
            "Build a personal portfolio website".to_string(),
            "Create a todo list application".to_string(),
            "Develop a weather app with API integration".to_string(),
        ],
        learning_resources: vec![
            "MDN Web Docs for web development".to_string(),
            "Python official documentation".to_string(),
            "freeCodeCamp for hands-on learning".to_string(),
        ],
        tools_and_libraries: vec![
            "VS Code for code editing".to_string(),
            "Postman for API testing".to_string(),
            "Git for version control".to_string(),
        ],
        best_practices: vec![
            "Write clean, readable code".to_string(),
            "Use meaningful variable names".to_string(),
            "Test your code thoroughly".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_topic_yields_fastapi_idea() {
        let topics = BTreeSet::from(["python"]);
        let feed = personalized_feed(&topics, SkillLevel::Intermediate);
        assert!(feed.project_ideas.iter().any(|s| s.contains("FastAPI")));
    }

    #[test]
    fn beginner_gets_version_control_practice() {
        let feed = personalized_feed(&BTreeSet::new(), SkillLevel::Beginner);
        assert!(
            feed.best_practices
                .iter()
                .any(|s| s.contains("version control"))
        );
    }

    #[test]
    fn topic_practices_precede_skill_practices() {
        let topics = BTreeSet::from(["database"]);
        let feed = personalized_feed(&topics, SkillLevel::Advanced);
        assert!(feed.best_practices[0].contains("indexes"));
        assert!(feed.best_practices.last().unwrap().contains("microservices"));
    }

    #[test]
    fn default_feed_is_non_empty_in_every_group() {
        let feed = default_feed();
        assert_eq!(feed.project_ideas.len(), 3);
        assert_eq!(feed.learning_resources.len(), 3);
        assert_eq!(feed.tools_and_libraries.len(), 3);
        assert_eq!(feed.best_practices.len(), 3);
    }
}
