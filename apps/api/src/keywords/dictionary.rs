//! Dictionary Store — hand-curated category term sets and the stopword list.
//!
//! Process-wide read-only state, built once on first use and never mutated.
//! Membership is exact, case-insensitive match after normalization; callers
//! are expected to pass lowercase terms.

use once_cell::sync::Lazy;
use std::collections::HashSet;

pub static TECHNICAL_SKILLS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "javascript", "typescript", "python", "java", "c++", "c#", "ruby", "php", "go", "rust",
        "react", "vue", "angular", "node.js", "nodejs", "express", "django", "flask", "spring",
        "sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch",
        "html", "css", "sass", "scss", "tailwind", "bootstrap",
        "git", "github", "gitlab", "bitbucket", "svn",
        "api", "rest", "graphql", "json", "xml", "microservices",
        "machine learning", "ai", "data science", "data analysis", "analytics",
        "cloud computing", "cloud architecture", "devops", "ci/cd",
        "testing", "unit testing", "integration testing", "automation testing",
        "algorithms", "data structures", "object-oriented", "functional programming",
        "web development", "mobile development", "frontend", "backend", "fullstack",
    ])
});

pub static SOFT_SKILLS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "communication", "leadership", "teamwork", "collaboration", "problem solving",
        "critical thinking", "creativity", "innovation", "adaptability", "flexibility",
        "time management", "organization", "project management", "multitasking",
        "analytical thinking", "attention to detail", "decision making",
        "interpersonal skills", "presentation", "public speaking", "writing",
        "mentoring", "coaching", "conflict resolution", "negotiation",
        "customer service", "client relations", "stakeholder management",
        "strategic thinking", "planning", "execution", "results-driven",
        "self-motivated", "proactive", "initiative", "independent",
    ])
});

pub static TOOLS_TECHNOLOGIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "aws", "azure", "gcp", "google cloud", "docker", "kubernetes", "jenkins",
        "terraform", "ansible", "puppet", "chef", "vagrant",
        "jira", "confluence", "slack", "teams", "zoom", "trello", "asana",
        "figma", "sketch", "adobe", "photoshop", "illustrator", "xd",
        "vs code", "intellij", "eclipse", "sublime", "atom",
        "webpack", "babel", "gulp", "grunt", "npm", "yarn", "pip",
        "linux", "unix", "windows", "macos", "ubuntu", "centos",
        "apache", "nginx", "tomcat", "iis",
        "tableau", "power bi", "excel", "google analytics",
        "postman", "insomnia", "swagger", "api testing",
    ])
});

/// Common English function words excluded from frequency counting.
pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from",
        "has", "he", "in", "is", "it", "its", "of", "on", "that", "the",
        "to", "will", "with", "you", "your", "we", "our", "this", "these",
        "they", "their", "them", "or", "but", "have", "been", "do", "does",
        "did", "can", "could", "would", "should", "may", "might", "must",
        "shall", "up", "out", "down", "off", "over", "under", "above",
        "below", "between", "through", "during", "before", "after", "into",
    ])
});

/// True if the (lowercase) term is a member of any of the three category sets.
pub fn is_dictionary_term(term: &str) -> bool {
    TECHNICAL_SKILLS.contains(term) || SOFT_SKILLS.contains(term) || TOOLS_TECHNOLOGIES.contains(term)
}

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}
