//! Keyword dictionary: categorized term lists, pure data.
//!
//! The built-in lists cover the vocabulary of software job postings. The
//! dictionary is plain serializable data so callers and tests can substitute
//! a smaller one via [`KeywordDictionary::from_json`].

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const LANGUAGES: &[&str] = &[
    "Rust",
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "Go",
    "C++",
    "C#",
    "Ruby",
    "PHP",
    "Kotlin",
    "Swift",
    "Scala",
    "Elixir",
    "Haskell",
    "SQL",
    "Perl",
    "Dart",
];

const FRAMEWORKS: &[&str] = &[
    "React",
    "Angular",
    "Vue",
    "Svelte",
    "Next.js",
    "Django",
    "Flask",
    "FastAPI",
    "Rails",
    "Spring Boot",
    "Laravel",
    "Express",
    "NestJS",
    ".NET",
    "GraphQL",
    "REST",
    "gRPC",
    "Node.js",
];

const CLOUD: &[&str] = &[
    "AWS",
    "Azure",
    "GCP",
    "Google Cloud",
    "Kubernetes",
    "Docker",
    "Terraform",
    "Ansible",
    "CloudFormation",
    "Lambda",
    "EC2",
    "S3",
    "Serverless",
    "Helm",
    "Nginx",
    "Linux",
];

const DATABASES: &[&str] = &[
    "PostgreSQL",
    "Postgres",
    "MySQL",
    "MongoDB",
    "Redis",
    "Elasticsearch",
    "Cassandra",
    "DynamoDB",
    "SQLite",
    "BigQuery",
    "Snowflake",
    "Kafka",
    "RabbitMQ",
];

const DATA_ML: &[&str] = &[
    "Machine Learning",
    "Deep Learning",
    "TensorFlow",
    "PyTorch",
    "scikit-learn",
    "Pandas",
    "NumPy",
    "Spark",
    "Hadoop",
    "Airflow",
    "dbt",
    "ETL",
    "NLP",
    "Computer Vision",
    "Data Science",
    "MLOps",
    "LLM",
];

const MOBILE: &[&str] = &["iOS", "Android", "React Native", "Flutter", "SwiftUI", "Xamarin"];

const TESTING: &[&str] = &[
    "Unit Testing",
    "Integration Testing",
    "TDD",
    "Jest",
    "Cypress",
    "Selenium",
    "Playwright",
    "pytest",
    "JUnit",
];

const SECURITY: &[&str] = &[
    "OAuth",
    "SAML",
    "Encryption",
    "Penetration Testing",
    "OWASP",
    "SOC 2",
    "GDPR",
    "IAM",
];

const TOOLS: &[&str] = &[
    "Git",
    "GitHub",
    "GitLab",
    "Jira",
    "Confluence",
    "Jenkins",
    "CircleCI",
    "GitHub Actions",
    "CI/CD",
    "Figma",
    "Datadog",
    "Grafana",
    "Prometheus",
    "Sentry",
    "Postman",
    "Bash",
    "Webpack",
    "Vite",
];

const SOFT_SKILLS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "collaboration",
    "problem solving",
    "problem-solving",
    "critical thinking",
    "time management",
    "adaptability",
    "mentoring",
    "stakeholder management",
    "attention to detail",
    "self-starter",
    "cross-functional",
    "ownership",
    "prioritization",
];

const VALUES: &[&str] = &[
    "diversity",
    "inclusion",
    "innovation",
    "transparency",
    "integrity",
    "sustainability",
    "customer obsession",
    "work-life balance",
    "empathy",
    "accountability",
    "growth mindset",
    "continuous learning",
];

const INDUSTRY: &[&str] = &[
    "SaaS",
    "fintech",
    "healthcare",
    "e-commerce",
    "edtech",
    "biotech",
    "insurance",
    "logistics",
    "gaming",
    "cybersecurity",
    "blockchain",
    "telecom",
    "aerospace",
    "retail",
    "startup",
    "B2B",
    "B2C",
];

/// What a term list classifies as. Technical terms are section-classified;
/// other kinds map to a fixed category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    Technical,
    Tool,
    SoftSkill,
    Value,
    Industry,
}

/// Categorized term lists scanned against descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordDictionary {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub cloud: Vec<String>,
    #[serde(default)]
    pub databases: Vec<String>,
    #[serde(default)]
    pub data_ml: Vec<String>,
    #[serde(default)]
    pub mobile: Vec<String>,
    #[serde(default)]
    pub testing: Vec<String>,
    #[serde(default)]
    pub security: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub industry: Vec<String>,
}

impl Default for KeywordDictionary {
    fn default() -> Self {
        Self {
            languages: owned(LANGUAGES),
            frameworks: owned(FRAMEWORKS),
            cloud: owned(CLOUD),
            databases: owned(DATABASES),
            data_ml: owned(DATA_ML),
            mobile: owned(MOBILE),
            testing: owned(TESTING),
            security: owned(SECURITY),
            tools: owned(TOOLS),
            soft_skills: owned(SOFT_SKILLS),
            values: owned(VALUES),
            industry: owned(INDUSTRY),
        }
    }
}

impl KeywordDictionary {
    /// Loads a dictionary from JSON. Missing lists default to empty, so a
    /// partial document describes a smaller dictionary.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed or the resulting
    /// dictionary contains no terms at all.
    pub fn from_json(json: &str) -> Result<Self> {
        let dictionary: Self = serde_json::from_str(json)?;
        if dictionary.is_empty() {
            return Err(Error::InvalidDictionary("no terms defined".to_string()));
        }
        Ok(dictionary)
    }

    /// Whether every term list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.term_groups().iter().all(|(_, terms)| terms.is_empty())
    }

    /// Term lists in scan order: technical-skill lists first, then tools,
    /// soft skills, values, and industry.
    #[must_use]
    pub fn term_groups(&self) -> Vec<(TermKind, &[String])> {
        vec![
            (TermKind::Technical, self.languages.as_slice()),
            (TermKind::Technical, self.frameworks.as_slice()),
            (TermKind::Technical, self.cloud.as_slice()),
            (TermKind::Technical, self.databases.as_slice()),
            (TermKind::Technical, self.data_ml.as_slice()),
            (TermKind::Technical, self.mobile.as_slice()),
            (TermKind::Technical, self.testing.as_slice()),
            (TermKind::Technical, self.security.as_slice()),
            (TermKind::Tool, self.tools.as_slice()),
            (TermKind::SoftSkill, self.soft_skills.as_slice()),
            (TermKind::Value, self.values.as_slice()),
            (TermKind::Industry, self.industry.as_slice()),
        ]
    }
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|term| (*term).to_string()).collect()
}
