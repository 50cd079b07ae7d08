//! Skill catalog — the static variant table and per-role required-skill criteria.
//!
//! Built once at startup and shared read-only (`Arc<SkillCatalog>` in `AppState`).
//! Declaration order is significant: description extraction reports skills in
//! variant-table order, and role criteria keep their listed order.

use anyhow::{bail, Result};
use serde::Serialize;

/// Role used when a requested role has no criteria of its own.
pub const DEFAULT_ROLE: &str = "Frontend Developer";

/// Roles offered to users for selection. Not all of them carry criteria;
/// those without fall back to `DEFAULT_ROLE`.
pub const SELECTABLE_ROLES: &[&str] = &[
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "Data Analyst",
    "Data Scientist",
    "UI/UX Designer",
    "DevOps Engineer",
    "Product Manager",
    "Software Engineer",
    "Mobile Developer",
    "Machine Learning Engineer",
    "Quality Assurance Engineer",
];

const SKILL_VARIANTS: &[(&str, &[&str])] = &[
    ("JavaScript", &["JavaScript", "JS", "Javascript", "js"]),
    ("TypeScript", &["TypeScript", "TS", "Typescript", "ts"]),
    ("HTML", &["HTML", "html", "Html5", "HTML5"]),
    ("CSS", &["CSS", "css", "CSS3", "css3"]),
    (
        "React",
        &[
            "React", "React.js", "ReactJS", "reactjs", "react js", "react", "React JS", "ReactJs",
        ],
    ),
    ("Vue", &["Vue", "Vue.js", "VueJS", "vuejs", "vue js", "vue"]),
    ("Angular", &["Angular", "AngularJS", "angularjs", "angular"]),
    (
        "Node.js",
        &["Node.js", "Node", "Nodejs", "nodejs", "node js", "node"],
    ),
    ("Python", &["Python", "python"]),
    (
        "SQL",
        &[
            "SQL", "sql", "MySQL", "mysql", "PostgreSQL", "postgresql", "Postgres", "postgres",
        ],
    ),
    (
        "API",
        &[
            "API",
            "APIs",
            "REST API",
            "RESTful API",
            "api",
            "apis",
            "rest api",
            "restful api",
        ],
    ),
    (
        "Database",
        &["Database", "Databases", "database", "databases"],
    ),
    ("MongoDB", &["MongoDB", "mongodb", "Mongo Db", "mongo db"]),
    (
        "PostgreSQL",
        &["PostgreSQL", "postgresql", "Postgres", "postgres"],
    ),
    ("Docker", &["Docker", "docker"]),
    (
        "AWS",
        &["AWS", "Amazon Web Services", "aws", "amazon web services"],
    ),
    ("Figma", &["Figma", "figma"]),
    ("Adobe XD", &["Adobe XD", "adobe xd", "AdobeXD", "adobexd"]),
    ("Sketch", &["Sketch", "sketch"]),
    (
        "Prototyping",
        &["Prototyping", "Prototype", "prototyping", "prototype"],
    ),
    ("User Research", &["User Research", "user research"]),
    (
        "Wireframing",
        &["Wireframing", "Wireframe", "wireframing", "wireframe"],
    ),
    (
        "Design Systems",
        &[
            "Design Systems",
            "Design System",
            "design systems",
            "design system",
        ],
    ),
    ("Usability Testing", &["Usability Testing", "usability testing"]),
    (
        "Responsive Design",
        &[
            "Responsive Design",
            "responsive design",
            "Responsive",
            "responsive",
        ],
    ),
    ("Git", &["Git", "git"]),
    ("Webpack", &["Webpack", "webpack"]),
    (
        "CI/CD",
        &[
            "CI/CD",
            "ci/cd",
            "Continuous Integration",
            "Continuous Deployment",
            "continuous integration",
            "continuous deployment",
        ],
    ),
    ("Jenkins", &["Jenkins", "jenkins"]),
    ("Terraform", &["Terraform", "terraform"]),
    ("Linux", &["Linux", "linux"]),
    ("Monitoring", &["Monitoring", "monitoring"]),
    ("Automation", &["Automation", "automation"]),
];

const ROLE_CRITERIA: &[(&str, &[&str], f64)] = &[
    (
        "Frontend Developer",
        &[
            "React",
            "JavaScript",
            "HTML",
            "CSS",
            "TypeScript",
            "Vue",
            "Angular",
            "Responsive Design",
            "Git",
            "Webpack",
        ],
        1.2,
    ),
    (
        "Backend Developer",
        &[
            "Node.js",
            "Python",
            "Java",
            "SQL",
            "API",
            "Database",
            "MongoDB",
            "PostgreSQL",
            "Docker",
            "AWS",
        ],
        1.1,
    ),
    (
        "Full Stack Developer",
        &[
            "React",
            "Node.js",
            "JavaScript",
            "SQL",
            "API",
            "Git",
            "Database",
            "HTML",
            "CSS",
            "MongoDB",
        ],
        1.3,
    ),
    (
        "Data Scientist",
        &[
            "Python",
            "Machine Learning",
            "Statistics",
            "TensorFlow",
            "Pandas",
            "NumPy",
            "SQL",
            "R",
            "Analytics",
            "Visualization",
        ],
        1.4,
    ),
    (
        "Data Analyst",
        &[
            "SQL",
            "Excel",
            "Python",
            "Tableau",
            "Power BI",
            "Statistics",
            "Analytics",
            "Visualization",
            "R",
            "Data Mining",
        ],
        1.1,
    ),
    (
        "UI/UX Designer",
        &[
            "Figma",
            "Adobe XD",
            "Sketch",
            "Prototyping",
            "User Research",
            "Wireframing",
            "Design Systems",
            "Usability Testing",
        ],
        1.0,
    ),
    (
        "DevOps Engineer",
        &[
            "Docker",
            "Kubernetes",
            "AWS",
            "CI/CD",
            "Jenkins",
            "Terraform",
            "Linux",
            "Monitoring",
            "Git",
            "Automation",
        ],
        1.3,
    ),
];

/// A canonical skill and the surface forms that count as a mention of it.
#[derive(Debug, Clone, Serialize)]
pub struct SkillEntry {
    pub name: String,
    pub variants: Vec<String>,
}

/// Required skills for a named role.
#[derive(Debug, Clone, Serialize)]
pub struct RoleCriteria {
    pub name: String,
    pub required_skills: Vec<String>,
    /// Carried with the role definition; the scoring formula does not read it.
    pub weight: f64,
}

#[derive(Debug, Clone)]
pub struct SkillCatalog {
    skills: Vec<SkillEntry>,
    roles: Vec<RoleCriteria>,
    default_index: usize,
}

impl SkillCatalog {
    /// The built-in catalog.
    pub fn builtin() -> Result<Self> {
        let skills = SKILL_VARIANTS
            .iter()
            .map(|(name, variants)| SkillEntry {
                name: name.to_string(),
                variants: variants.iter().map(|v| v.to_string()).collect(),
            })
            .collect();

        let roles = ROLE_CRITERIA
            .iter()
            .map(|(name, required, weight)| RoleCriteria {
                name: name.to_string(),
                required_skills: required.iter().map(|s| s.to_string()).collect(),
                weight: *weight,
            })
            .collect();

        Self::new(skills, roles, DEFAULT_ROLE)
    }

    /// Builds a catalog from explicit tables. Fails when `default_role` is not one of `roles`.
    pub fn new(
        skills: Vec<SkillEntry>,
        roles: Vec<RoleCriteria>,
        default_role: &str,
    ) -> Result<Self> {
        let Some(default_index) = roles.iter().position(|r| r.name == default_role) else {
            bail!("default role '{default_role}' has no criteria");
        };
        Ok(Self {
            skills,
            roles,
            default_index,
        })
    }

    /// Canonical skills in declaration order.
    pub fn skills(&self) -> &[SkillEntry] {
        &self.skills
    }

    pub fn roles(&self) -> &[RoleCriteria] {
        &self.roles
    }

    pub fn default_role(&self) -> &str {
        &self.roles[self.default_index].name
    }

    /// Surface forms for a canonical skill. Skills missing from the variant
    /// table match on their own name.
    pub fn variants_for<'a>(&'a self, skill: &'a str) -> Vec<&'a str> {
        match self.skills.iter().find(|s| s.name == skill) {
            Some(entry) => entry.variants.iter().map(String::as_str).collect(),
            None => vec![skill],
        }
    }

    /// Exact-name role lookup with no fallback.
    pub fn find_role(&self, role: &str) -> Option<&RoleCriteria> {
        self.roles.iter().find(|r| r.name == role)
    }

    /// Criteria for `role`, or the default role's criteria when `role` is unknown.
    pub fn criteria_for(&self, role: &str) -> &RoleCriteria {
        self.find_role(role)
            .unwrap_or(&self.roles[self.default_index])
    }
}
