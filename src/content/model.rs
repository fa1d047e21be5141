use serde::{Deserialize, Serialize};

// The persisted content blob. Every struct in this tree carries
// #[serde(default)], so deserializing a partial or outdated blob fills the
// missing fields from the defaults below. That per-field fill *is* the
// merge-over-defaults load: old saves stay readable when new sections or
// fields appear, at any nesting depth (imageSettings included).

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentState {
    pub home: HomeContent,
    pub about: AboutContent,
    pub projects: Vec<Project>,
    pub certificates: Vec<Certificate>,
    pub certificates_page: CertificatesPage,
    pub gallery: GalleryContent,
    pub contact: ContactContent,
    pub social_media: Vec<SocialLink>,
    pub skills: Skills,
    pub skills_content: SkillsIntro,
    pub theme: ThemeColors,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomeContent {
    pub greeting: String,
    pub name: String,
    pub title: String,
    pub tagline: String,
    /// Inline data URL or a path under the site's asset directory.
    pub profile_image: String,
    pub image_settings: ImageSettings,
    /// Inline data URL for the downloadable resume, empty until uploaded.
    pub resume: String,
    pub resume_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageSettings {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutContent {
    pub title: String,
    pub lead: String,
    pub body: Vec<String>,
    pub location: String,
    pub years_experience: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub link: String,
    pub repo: String,
    pub image: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certificate {
    pub id: u64,
    pub title: String,
    pub issuer: String,
    pub year: String,
    pub image: String,
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificatesPage {
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryContent {
    pub title: String,
    pub subtitle: String,
    pub images: Vec<GalleryImage>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryImage {
    pub src: String,
    pub caption: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactContent {
    pub title: String,
    pub subtitle: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    pub technical: Vec<Skill>,
    pub soft: Vec<Skill>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    /// Self-assessed proficiency, 0-100, drives the width of the level bar.
    pub level: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillsIntro {
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeColors {
    pub primary: String,
    pub accent: String,
}

impl Default for ContentState {
    fn default() -> Self {
        Self {
            home: HomeContent::default(),
            about: AboutContent::default(),
            projects: default_projects(),
            certificates: default_certificates(),
            certificates_page: CertificatesPage::default(),
            gallery: GalleryContent::default(),
            contact: ContactContent::default(),
            social_media: default_social_media(),
            skills: Skills::default(),
            skills_content: SkillsIntro::default(),
            theme: ThemeColors::default(),
        }
    }
}

impl Default for HomeContent {
    fn default() -> Self {
        Self {
            greeting: "Hi, I'm".into(),
            name: "Avery Collins".into(),
            title: "Full-Stack Developer".into(),
            tagline: "I build small, sturdy things for the web.".into(),
            profile_image: String::new(),
            image_settings: ImageSettings::default(),
            resume: String::new(),
            resume_name: "resume.pdf".into(),
        }
    }
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            title: "About Me".into(),
            lead: "Developer by trade, tinkerer by habit.".into(),
            body: vec![
                "I spend most of my time building web applications, and the rest of it \
                 taking them apart to see why they worked in the first place."
                    .into(),
                "Away from the keyboard I hike, take too many photos, and maintain a \
                 small collection of mechanical keyboards that I absolutely do not need."
                    .into(),
            ],
            location: "Portland, OR".into(),
            years_experience: 6,
        }
    }
}

impl Default for CertificatesPage {
    fn default() -> Self {
        Self {
            title: "Certificates".into(),
            subtitle: "Courses and credentials I've picked up along the way.".into(),
        }
    }
}

impl Default for GalleryContent {
    fn default() -> Self {
        Self {
            title: "Gallery".into(),
            subtitle: "Snapshots from talks, trips, and side projects.".into(),
            images: Vec::new(),
        }
    }
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            title: "Get in Touch".into(),
            subtitle: "Have a project in mind? Drop me a line.".into(),
            email: "avery@example.com".into(),
            phone: "+1 (555) 010-2468".into(),
            location: "Portland, OR".into(),
        }
    }
}

impl Default for Skills {
    fn default() -> Self {
        Self {
            technical: vec![
                skill("Rust", 85),
                skill("TypeScript", 90),
                skill("PostgreSQL", 75),
                skill("Docker", 70),
                skill("CSS", 80),
            ],
            soft: vec![
                skill("Technical writing", 85),
                skill("Mentoring", 80),
                skill("Estimation", 65),
            ],
        }
    }
}

impl Default for SkillsIntro {
    fn default() -> Self {
        Self {
            title: "Skills".into(),
            subtitle: "Tools I reach for and how comfortable I am with them.".into(),
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#3B82F6".into(),
            accent: "#8B5CF6".into(),
        }
    }
}

fn skill(name: &str, level: u8) -> Skill {
    Skill {
        name: name.into(),
        level,
    }
}

fn default_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Trailhead".into(),
            description: "Offline-first trip planner for long hikes, with elevation \
                          profiles and resupply-point notes."
                .into(),
            tech: vec!["Rust".into(), "Dioxus".into(), "IndexedDB".into()],
            link: "https://trailhead.example.com".into(),
            repo: "https://github.com/averycollins/trailhead".into(),
            image: String::new(),
        },
        Project {
            id: 2,
            title: "Shutterlog".into(),
            description: "A photo-journal generator that turns a folder of RAW files \
                          into a static gallery with EXIF-derived captions."
                .into(),
            tech: vec!["Rust".into(), "WebAssembly".into()],
            link: String::new(),
            repo: "https://github.com/averycollins/shutterlog".into(),
            image: String::new(),
        },
        Project {
            id: 3,
            title: "Quorum".into(),
            description: "Lightweight meeting-notes tool with action-item tracking \
                          for small teams."
                .into(),
            tech: vec!["TypeScript".into(), "PostgreSQL".into()],
            link: "https://quorum.example.com".into(),
            repo: String::new(),
            image: String::new(),
        },
    ]
}

fn default_certificates() -> Vec<Certificate> {
    vec![
        Certificate {
            id: 1,
            title: "AWS Certified Developer — Associate".into(),
            issuer: "Amazon Web Services".into(),
            year: "2023".into(),
            image: String::new(),
            link: String::new(),
        },
        Certificate {
            id: 2,
            title: "CKA: Certified Kubernetes Administrator".into(),
            issuer: "Cloud Native Computing Foundation".into(),
            year: "2024".into(),
            image: String::new(),
            link: String::new(),
        },
    ]
}

fn default_social_media() -> Vec<SocialLink> {
    vec![
        SocialLink {
            label: "GitHub".into(),
            url: "https://github.com/averycollins".into(),
        },
        SocialLink {
            label: "LinkedIn".into(),
            url: "https://linkedin.com/in/averycollins".into(),
        },
        SocialLink {
            label: "Mastodon".into(),
            url: "https://hachyderm.io/@avery".into(),
        },
    ]
}
