mod home;
pub use home::Home;

mod products;
pub use products::{Product, Products};

mod case_studies;
pub use case_studies::CaseStudies;

mod blog;
pub use blog::Blog;

mod training;
pub use training::Training;

mod contact;
pub use contact::{Contact, ContactSection};

mod not_found;
pub use not_found::NotFound;
