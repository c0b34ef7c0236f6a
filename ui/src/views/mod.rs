mod footer;
pub use footer::SiteFooter;

mod login;
pub use login::LoginPage;

mod section;
pub use section::SectionPage;
