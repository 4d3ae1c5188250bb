//! Page sections, in document order.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod industries;
pub mod navbar;
pub mod services;
pub mod stats;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use industries::Industries;
pub use navbar::NavBar;
pub use services::Services;
pub use stats::Stats;
