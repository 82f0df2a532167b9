// Showcase page sections

/// Product version shown across the page (single source of truth)
pub const VERSION: &str = "v2.4.0";

mod chrome;
mod features;
mod footer;
mod hero;
mod stats;
mod tech;

pub use chrome::ScrollChrome;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use stats::Stats;
pub use tech::TechStack;
