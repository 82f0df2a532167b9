//! Static page content: features, stats, and the tech stack.
//!
//! Plain immutable configuration data. Nothing here is part of any state
//! machine; the section components render these records as-is.

/// A headline engineering result with supporting detail bullets.
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static [&'static str],
}

/// A single number for the stats band.
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// One technology in the stack listing.
pub struct TechEntry {
    pub name: &'static str,
    pub summary: &'static str,
    pub points: &'static [&'static str],
}

/// A titled column of tech entries.
pub struct TechGroup {
    pub title: &'static str,
    pub entries: &'static [TechEntry],
}

pub const SITE_URL: &str = "https://studyforge.app";
pub const REPO_URL: &str = "https://github.com/studyforge/studyforge";

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "[1]",
        title: "Search-first rendering",
        summary: "Perfect Lighthouse SEO score on every public page",
        details: &[
            "Fetched exam data is inlined into the initial HTML and hydrated into client state without a second request",
            "Server-rendered routes keep the client bundle small",
            "Query caching deduplicates server state across views",
            "Metadata is generated per exam for rich link previews",
        ],
    },
    Feature {
        icon: "[2]",
        title: "Direct-to-storage uploads",
        summary: "Origin server load cut in half",
        details: &[
            "Browsers upload images straight to object storage with presigned POST policies",
            "Image keys are content-addressed and reused, capping storage growth",
        ],
    },
    Feature {
        icon: "[3]",
        title: "Automated item generation",
        summary: "Authoring time down 70% with AI assistance",
        details: &[
            "Draft questions are generated from uploaded course material",
            "Free-text answers are graded against an LLM rubric with human override",
        ],
    },
    Feature {
        icon: "[4]",
        title: "Scoped access control",
        summary: "Strict isolation for private question banks",
        details: &[
            "Role-based permissions on every bank, exam, and submission",
            "Private banks and personal data are unreachable without an explicit grant",
            "Short-lived JWTs for authentication and authorization",
        ],
    },
];

pub const STATS: &[Stat] = &[
    Stat {
        value: "100",
        label: "Lighthouse SEO score",
    },
    Stat {
        value: "50%",
        label: "Less origin load",
    },
    Stat {
        value: "70%",
        label: "Faster authoring",
    },
    Stat {
        value: "30%",
        label: "Faster first load",
    },
];

pub const TECH_STACK: &[TechGroup] = &[
    TechGroup {
        title: "Frontend",
        entries: &[
            TechEntry {
                name: "React + SSR framework",
                summary: "Server-rendered React with streaming and automatic code splitting",
                points: &[],
            },
            TechEntry {
                name: "TypeScript",
                summary: "Static types end to end, including generated API clients",
                points: &[],
            },
            TechEntry {
                name: "Tailwind CSS",
                summary: "Utility-first styling over a shared design-token layer",
                points: &[],
            },
            TechEntry {
                name: "Atom-based state",
                summary: "Server-fetched data lands in the initial HTML and syncs into client atoms",
                points: &[],
            },
            TechEntry {
                name: "Query cache",
                summary: "Server-state caching with optimistic updates",
                points: &[],
            },
        ],
    },
    TechGroup {
        title: "Backend & Infra",
        entries: &[
            TechEntry {
                name: "Rust API (axum)",
                summary: "Typed handlers and tower middleware on tokio",
                points: &[],
            },
            TechEntry {
                name: "PostgreSQL",
                summary: "Relational core with compile-time-checked queries",
                points: &[],
            },
            TechEntry {
                name: "Object storage",
                summary: "",
                points: &[
                    "Presigned POST uploads straight from the browser",
                    "Content-addressed image keys for deduplication",
                ],
            },
            TechEntry {
                name: "LLM pipeline",
                summary: "Item generation and rubric grading behind one internal service",
                points: &[],
            },
            TechEntry {
                name: "CI/CD",
                summary: "",
                points: &[
                    "Build, test, and deploy pipelines run on every merge",
                    "Container images pinned per release for reproducible rollouts",
                ],
            },
        ],
    },
];
