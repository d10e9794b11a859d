//! Portfolio content model.
//!
//! Immutable records defined once at startup: profile, timeline entries,
//! projects, and technology groups. Built-in data ships in the binary; a
//! JSON file with the same shape can replace it entirely. Nothing here is
//! mutated after load.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gallery::Category;

/// Error type for content loading and validation.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid content: {0}")]
    Invalid(String),
}

/// Kind of timeline entry, drives the marker icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Education,
    Experience,
    Award,
}

/// A technology badge shown inside a timeline entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechBadge {
    pub label: String,
    /// Icon reference (remote URL in the original site; the TUI maps the
    /// label to a glyph instead).
    pub icon: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl TechBadge {
    pub fn new(label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: icon.into(),
            link: None,
        }
    }
}

/// One entry on the About timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub id: String,
    pub year: String,
    pub title: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub organization_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    /// Free-form body text, shown after the highlights when present.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub tech: Vec<TechBadge>,
    pub kind: EntryKind,
}

/// One project card in the gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// A project may belong to several categories and appears under each.
    pub categories: Vec<Category>,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
}

/// Degree record for the profile card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub years: String,
    #[serde(default)]
    pub logo: Option<String>,
}

/// A certification listed on the profile card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// The "Who I Am" card: name, role, bio, education, certifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    /// Markdown, rendered into the bio pane.
    pub bio: String,
    pub education: Education,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

/// A labeled group on the Technologies screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechGroup {
    pub label: String,
    pub items: Vec<TechItem>,
}

/// One technology in a group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechItem {
    pub name: String,
    pub icon: String,
    pub docs: String,
}

impl TechItem {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, docs: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            docs: docs.into(),
        }
    }
}

/// Root of all portfolio content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub timeline: Vec<TimelineEntry>,
    pub projects: Vec<Project>,
    pub tech_groups: Vec<TechGroup>,
}

impl Portfolio {
    /// Load a portfolio from a JSON file and validate it.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let content = fs::read_to_string(path)?;
        let portfolio: Self = serde_json::from_str(&content)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Check structural invariants the controllers rely on.
    ///
    /// Identifiers must be non-empty and unique within their list, and every
    /// project must carry at least one real category (`All` is a filter, not
    /// a membership).
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for entry in &self.timeline {
            if entry.id.is_empty() {
                return Err(ContentError::Invalid(format!(
                    "timeline entry {:?} has an empty id",
                    entry.title
                )));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(ContentError::Invalid(format!(
                    "duplicate timeline entry id: {}",
                    entry.id
                )));
            }
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.id.is_empty() {
                return Err(ContentError::Invalid(format!(
                    "project {:?} has an empty id",
                    project.title
                )));
            }
            if !seen.insert(project.id.as_str()) {
                return Err(ContentError::Invalid(format!(
                    "duplicate project id: {}",
                    project.id
                )));
            }
            if project.categories.is_empty() {
                return Err(ContentError::Invalid(format!(
                    "project {} has no categories",
                    project.id
                )));
            }
            if project.categories.contains(&Category::All) {
                return Err(ContentError::Invalid(format!(
                    "project {} lists the catch-all category",
                    project.id
                )));
            }
        }

        Ok(())
    }

    /// The portfolio data compiled into the binary.
    #[allow(clippy::too_many_lines)]
    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                name: "Yousef Haddad".to_string(),
                role: "Full-Stack Developer & Creative Technologist".to_string(),
                bio: "My name is **Yousef Haddad**.\n\n\
                      I'm a **Full-Stack Developer** and a **Creative Technologist** \
                      focused on AI-powered interactive experiences.\n\n\
                      I'm experienced in building modern web applications, **AI-driven \
                      tools**, and high-impact digital products with clean architecture \
                      and smooth user experiences."
                    .to_string(),
                education: Education {
                    institution: "Islamic University of Gaza (IUG)".to_string(),
                    degree: "Bachelor's Degree".to_string(),
                    field: "Computer Science".to_string(),
                    years: "2013 - 2018".to_string(),
                    logo: Some(
                        "https://eng.asu.edu.eg/public/ext/images/logo-white.png".to_string(),
                    ),
                },
                certifications: vec![
                    Certification {
                        title: "THE LLM COURSE".to_string(),
                        issuer: "Hugging Face".to_string(),
                        link: Some("https://huggingface.co/".to_string()),
                        icon: Some(
                            "https://avatars.githubusercontent.com/u/25720743?s=200&v=4"
                                .to_string(),
                        ),
                    },
                    Certification {
                        title: "DeepLearning".to_string(),
                        issuer: "DeepLearning.AI".to_string(),
                        link: Some("https://learn.deeplearning.ai/".to_string()),
                        icon: Some("https://cdn.simpleicons.org/deeplearningai/ffffff".to_string()),
                    },
                    Certification {
                        title: "How to Use AI as a Personal Assistant".to_string(),
                        issuer: "Gaza Sky Geeks".to_string(),
                        link: Some("https://gaza-sky-geeks.org/".to_string()),
                        icon: Some("https://cdn.simpleicons.org/google/ffffff".to_string()),
                    },
                ],
            },
            timeline: vec![
                TimelineEntry {
                    id: "reactjs-bootcamp".to_string(),
                    year: "2022".to_string(),
                    title: "ReactJS Bootcamp".to_string(),
                    organization: Some("Gaza Sky Geeks".to_string()),
                    organization_url: None,
                    location: Some("Gaza".to_string()),
                    logo: Some(
                        "https://gaza-sky-geeks.org/wp-content/uploads/2020/07/cropped-logo-3.png"
                            .to_string(),
                    ),
                    description: String::new(),
                    highlights: vec![
                        "Attended an intensive ReactJS bootcamp focused on advanced React \
                         concepts, JSX, hooks, and component-based architecture."
                            .to_string(),
                        "Completed a final project that integrated routing, API calls, and \
                         reusable components to deliver a real-world web application."
                            .to_string(),
                        "Strengthened front-end best practices, including responsive design, \
                         clean code structure, and deployment workflows."
                            .to_string(),
                        "Worked in small teams, practicing collaboration, version control, and \
                         code reviews to ship features on time."
                            .to_string(),
                    ],
                    tech: vec![
                        TechBadge::new(
                            "React",
                            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg",
                        ),
                        TechBadge::new(
                            "JavaScript",
                            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/javascript/javascript-original.svg",
                        ),
                        TechBadge::new(
                            "HTML5",
                            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/html5/html5-original.svg",
                        ),
                        TechBadge::new(
                            "CSS3",
                            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/css3/css3-original.svg",
                        ),
                    ],
                    kind: EntryKind::Education,
                },
                TimelineEntry {
                    id: "python-django-course".to_string(),
                    year: "2021".to_string(),
                    title: "Web Development (Python & Django) Course".to_string(),
                    organization: Some("San\u{2019}a\u{2019} Al-Mustaqbal Academy".to_string()),
                    organization_url: None,
                    location: Some("Gaza".to_string()),
                    logo: None,
                    description: String::new(),
                    highlights: vec![
                        "Completed a 9-month program focused on backend web development using \
                         Python and Django."
                            .to_string(),
                        "Learned to design and structure Django projects, manage models, views, \
                         templates, and URL routing."
                            .to_string(),
                        "Built RESTful APIs, integrated relational databases, and handled \
                         authentication and authorization."
                            .to_string(),
                        "Delivered a final full-stack project that combined Django on the \
                         backend with a responsive front-end interface."
                            .to_string(),
                    ],
                    tech: vec![
                        TechBadge::new(
                            "Python",
                            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg",
                        ),
                        TechBadge::new(
                            "Django",
                            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/django/django-plain.svg",
                        ),
                        TechBadge::new(
                            "PostgreSQL",
                            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/postgresql/postgresql-original.svg",
                        ),
                    ],
                    kind: EntryKind::Education,
                },
                TimelineEntry {
                    id: "software-testing-qa".to_string(),
                    year: "2023".to_string(),
                    title: "Software Testing & Quality Assurance".to_string(),
                    organization: Some("BTI".to_string()),
                    organization_url: None,
                    location: Some("Gaza".to_string()),
                    logo: None,
                    description: String::new(),
                    highlights: vec![
                        "Completed a comprehensive Software Testing and QA course covering \
                         unit, integration, system, and acceptance testing."
                            .to_string(),
                        "Practiced writing detailed test plans, test cases, and defect reports \
                         aligned with industry standards."
                            .to_string(),
                        "Gained exposure to automated testing tools and workflows to improve \
                         reliability and regression coverage."
                            .to_string(),
                        "Developed strong attention to detail and analytical skills to \
                         identify, document, and help resolve software defects."
                            .to_string(),
                    ],
                    tech: vec![
                        TechBadge::new(
                            "Python",
                            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg",
                        ),
                        TechBadge::new(
                            "Git",
                            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/git/git-original.svg",
                        ),
                    ],
                    kind: EntryKind::Experience,
                },
            ],
            projects: vec![
                Project {
                    id: "wood-industries-union".to_string(),
                    title: "Software Developer - Wood Industries Union".to_string(),
                    description: "Contract role developing web solutions for Wood Industries \
                                  Union. Led strategic thinking initiatives while managing team \
                                  collaboration and web project development. Applied attention \
                                  to detail throughout the development lifecycle, ensuring \
                                  high-quality deliverables for both remote and on-site \
                                  operations in the Gaza Strip region."
                        .to_string(),
                    image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=1470&q=80"
                        .to_string(),
                    tags: vec![
                        "MERN Stack".to_string(),
                        "MongoDB".to_string(),
                        "Express.js".to_string(),
                        "React".to_string(),
                        "Node.js".to_string(),
                        "Team Leadership".to_string(),
                        "Web Project Management".to_string(),
                    ],
                    categories: vec![Category::WebDevelopment],
                    repo: Some("https://github.com/JoeHdad".to_string()),
                    live: None,
                },
                Project {
                    id: "atm-maintenance".to_string(),
                    title: "ATM Maintenance System".to_string(),
                    description: "Complete ATM maintenance management system for Saudi National \
                                  Bank. Built with React frontend and Django backend, featuring \
                                  role-based dashboards for Data Host, Technician, and \
                                  Supervisor. Includes Excel file processing, photo upload \
                                  workflows, PDF report generation, and automated email \
                                  notifications. Manages maintenance operations across multiple \
                                  Saudi cities with comprehensive tracking and approval \
                                  workflows."
                        .to_string(),
                    image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?auto=format&fit=crop&w=1470&q=80"
                        .to_string(),
                    tags: vec![
                        "React".to_string(),
                        "Django".to_string(),
                        "PostgreSQL".to_string(),
                        "JWT Authentication".to_string(),
                        "PDF Generation".to_string(),
                        "Email Automation".to_string(),
                        "Excel Processing".to_string(),
                        "Role-Based Access".to_string(),
                    ],
                    categories: vec![Category::WebDevelopment, Category::Systems],
                    repo: Some("https://github.com/JoeHdad/atm_maintenance-".to_string()),
                    live: None,
                },
                Project {
                    id: "palestinian-heritage".to_string(),
                    title: "Palestinian Heritage".to_string(),
                    description: "Cultural preservation project showcasing Palestinian heritage \
                                  and traditions. This project aims to document and present the \
                                  rich cultural heritage of Palestine through digital platforms, \
                                  preserving historical narratives and traditional practices for \
                                  future generations."
                        .to_string(),
                    image: "https://images.unsplash.com/photo-1518156677180-95a2893f3e9f?auto=format&fit=crop&w=1470&q=80"
                        .to_string(),
                    tags: vec![
                        "Cultural Preservation".to_string(),
                        "Digital Heritage".to_string(),
                        "Web Development".to_string(),
                        "Documentation".to_string(),
                    ],
                    categories: vec![Category::WebDevelopment],
                    repo: Some("https://github.com/JoeHdad/Palestinian_Heritage".to_string()),
                    live: None,
                },
                Project {
                    id: "rag-story-engine".to_string(),
                    title: "RAG Story Engine".to_string(),
                    description: "Fully modular Retrieval-Augmented Generation pipeline built \
                                  for long-form narrative processing. Features preprocessing, \
                                  chunking, Gemini embeddings, ChromaDB vector storage, \
                                  retrieval, and complete inference workflow. Includes both CLI \
                                  interface and Streamlit web application for querying and \
                                  analyzing Arabic stories, specifically designed for narrative \
                                  text processing with semantic search capabilities."
                        .to_string(),
                    image: "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?auto=format&fit=crop&w=1470&q=80"
                        .to_string(),
                    tags: vec![
                        "Python".to_string(),
                        "RAG".to_string(),
                        "Gemini Embeddings".to_string(),
                        "ChromaDB".to_string(),
                        "Streamlit".to_string(),
                        "Vector Search".to_string(),
                        "NLP".to_string(),
                        "Arabic NLP".to_string(),
                    ],
                    categories: vec![Category::AiMl],
                    repo: Some("https://github.com/JoeHdad/rag-story-engine".to_string()),
                    live: None,
                },
                Project {
                    id: "blockchain-document-verification".to_string(),
                    title: "Blockchain-Based Document Verification with IPFS".to_string(),
                    description: "Decentralized document verification system combining \
                                  blockchain technology with IPFS storage. Provides secure, \
                                  fast verification without intermediaries, featuring \
                                  user-friendly interface for document upload and verification. \
                                  Supports multiple document types with encryption, hash-based \
                                  verification, and smart contract integration for authenticity \
                                  confirmation."
                        .to_string(),
                    image: "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?auto=format&fit=crop&w=1470&q=80"
                        .to_string(),
                    tags: vec![
                        "Blockchain".to_string(),
                        "IPFS".to_string(),
                        "Solidity".to_string(),
                        "Web3.js".to_string(),
                        "Smart Contracts".to_string(),
                        "Cryptography".to_string(),
                        "Decentralized Storage".to_string(),
                        "Ethereum".to_string(),
                    ],
                    categories: vec![Category::Systems, Category::WebDevelopment],
                    repo: Some(
                        "https://github.com/JoeHdad/BlockChain-Based-Document-Verfication-With-IPFS"
                            .to_string(),
                    ),
                    live: None,
                },
            ],
            tech_groups: vec![
                TechGroup {
                    label: "Languages & Frameworks".to_string(),
                    items: vec![
                        TechItem::new(
                            "JavaScript",
                            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/javascript/javascript-original.svg",
                            "https://developer.mozilla.org/docs/Web/JavaScript",
                        ),
                        TechItem::new(
                            "TypeScript",
                            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/typescript/typescript-original.svg",
                            "https://www.typescriptlang.org/docs/",
                        ),
                        TechItem::new(
                            "React",
                            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg",
                            "https://react.dev/",
                        ),
                        TechItem::new(
                            "Next.js",
                            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nextjs/nextjs-original.svg",
                            "https://nextjs.org/docs",
                        ),
                        TechItem::new(
                            "Node.js",
                            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nodejs/nodejs-original.svg",
                            "https://nodejs.org/en/docs",
                        ),
                        TechItem::new(
                            "Python",
                            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg",
                            "https://docs.python.org/3/",
                        ),
                    ],
                },
                TechGroup {
                    label: "Styling & Tools".to_string(),
                    items: vec![
                        TechItem::new(
                            "Tailwind CSS",
                            "https://upload.wikimedia.org/wikipedia/commons/d/d5/Tailwind_CSS_Logo.svg",
                            "https://tailwindcss.com/docs",
                        ),
                        TechItem::new(
                            "Git",
                            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/git/git-original.svg",
                            "https://git-scm.com/doc",
                        ),
                        TechItem::new(
                            "GitHub",
                            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/github/github-original.svg",
                            "https://docs.github.com/",
                        ),
                        TechItem::new(
                            "REST APIs",
                            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/api/api-original-wordmark.svg",
                            "https://restfulapi.net/",
                        ),
                    ],
                },
                TechGroup {
                    label: "AI Technology".to_string(),
                    items: vec![
                        TechItem::new(
                            "Python (AI & Automation)",
                            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg",
                            "https://docs.python.org/3/",
                        ),
                        TechItem::new(
                            "Hugging Face Models",
                            "https://huggingface.co/front/assets/huggingface_logo-noborder.svg",
                            "https://huggingface.co/docs",
                        ),
                        TechItem::new(
                            "OpenAI APIs",
                            "https://cdn.openai.com/chatgpt/images/chatgpt-logo.png",
                            "https://platform.openai.com/docs",
                        ),
                        TechItem::new(
                            "Gemini / Google AI Studio",
                            "https://www.gstatic.com/lamda/images/favicon_v1_150160cddceaaa54c1b4d3edfa5b3faf.png",
                            "https://ai.google.dev/",
                        ),
                        TechItem::new(
                            "Runway Gen-2",
                            "https://runwayml.com/favicon.ico",
                            "https://runwayml.com/docs",
                        ),
                        TechItem::new(
                            "Sora",
                            "https://openai.com/favicon.ico",
                            "https://openai.com/sora",
                        ),
                        TechItem::new(
                            "Midjourney",
                            "https://www.midjourney.com/favicon.ico",
                            "https://docs.midjourney.com/",
                        ),
                        TechItem::new(
                            "Stable Diffusion",
                            "https://stability.ai/favicon.ico",
                            "https://stability.ai/",
                        ),
                        TechItem::new(
                            "ComfyUI",
                            "https://github.com/comfyanonymous/ComfyUI/raw/master/web/favicon.ico",
                            "https://github.com/comfyanonymous/ComfyUI",
                        ),
                        TechItem::new(
                            "ChatGPT Function Calling / Assistants",
                            "https://cdn.openai.com/chatgpt/images/chatgpt-logo.png",
                            "https://platform.openai.com/docs/assistants",
                        ),
                        TechItem::new(
                            "Llama Models",
                            "https://llama.meta.com/static/images/llama_favicon.ico",
                            "https://llama.meta.com/",
                        ),
                        TechItem::new(
                            "Whisper (Speech-to-Text)",
                            "https://openai.com/favicon.ico",
                            "https://openai.com/research/whisper",
                        ),
                        TechItem::new(
                            "LangChain (Workflows & Agents)",
                            "https://python.langchain.com/img/favicon.ico",
                            "https://python.langchain.com/docs/get_started/introduction",
                        ),
                    ],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn minimal_portfolio() -> Portfolio {
        let mut portfolio = Portfolio::builtin();
        portfolio.timeline.truncate(1);
        portfolio.projects.truncate(1);
        portfolio.tech_groups.truncate(1);
        portfolio
    }

    #[test]
    fn test_builtin_validates() {
        Portfolio::builtin().validate().unwrap();
    }

    #[test]
    fn test_builtin_shape() {
        let portfolio = Portfolio::builtin();
        assert_eq!(portfolio.timeline.len(), 3);
        assert_eq!(portfolio.projects.len(), 5);
        assert_eq!(portfolio.tech_groups.len(), 3);
        assert_eq!(portfolio.profile.certifications.len(), 3);
    }

    #[test]
    fn test_builtin_multi_category_projects() {
        let portfolio = Portfolio::builtin();
        let atm = portfolio
            .projects
            .iter()
            .find(|p| p.id == "atm-maintenance")
            .unwrap();
        assert_eq!(
            atm.categories,
            vec![Category::WebDevelopment, Category::Systems]
        );
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("portfolio.json");

        let portfolio = Portfolio::builtin();
        let json = serde_json::to_string_pretty(&portfolio).unwrap();
        fs::write(&path, json).unwrap();

        let loaded = Portfolio::load(&path).unwrap();
        assert_eq!(loaded.profile.name, portfolio.profile.name);
        assert_eq!(loaded.timeline.len(), portfolio.timeline.len());
        assert_eq!(
            loaded.projects[1].categories,
            portfolio.projects[1].categories
        );
    }

    #[test]
    fn test_category_serializes_as_display_name() {
        let portfolio = Portfolio::builtin();
        let json = serde_json::to_string(&portfolio.projects[1]).unwrap();
        assert!(json.contains("\"Web Development\""));
        assert!(json.contains("\"Systems\""));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = Portfolio::load(&temp.path().join("nope.json"));
        assert!(matches!(result, Err(ContentError::Io(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("portfolio.json");
        fs::write(&path, "not json").unwrap();

        let result = Portfolio::load(&path);
        assert!(matches!(result, Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_validate_duplicate_project_id() {
        let mut portfolio = minimal_portfolio();
        let copy = portfolio.projects[0].clone();
        portfolio.projects.push(copy);

        let result = portfolio.validate();
        assert!(matches!(result, Err(ContentError::Invalid(_))));
    }

    #[test]
    fn test_validate_empty_timeline_id() {
        let mut portfolio = minimal_portfolio();
        portfolio.timeline[0].id = String::new();

        let result = portfolio.validate();
        assert!(matches!(result, Err(ContentError::Invalid(_))));
    }

    #[test]
    fn test_validate_project_without_categories() {
        let mut portfolio = minimal_portfolio();
        portfolio.projects[0].categories.clear();

        let result = portfolio.validate();
        assert!(matches!(result, Err(ContentError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_catch_all_membership() {
        let mut portfolio = minimal_portfolio();
        portfolio.projects[0].categories = vec![Category::All];

        let result = portfolio.validate();
        assert!(matches!(result, Err(ContentError::Invalid(_))));
    }

    #[test]
    fn test_load_rejects_invalid_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("portfolio.json");

        let mut portfolio = minimal_portfolio();
        portfolio.projects[0].categories.clear();
        fs::write(&path, serde_json::to_string(&portfolio).unwrap()).unwrap();

        let result = Portfolio::load(&path);
        assert!(matches!(result, Err(ContentError::Invalid(_))));
    }
}
