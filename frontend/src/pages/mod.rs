mod home;
mod member_detail;
mod members;

pub use home::Home;
pub use member_detail::MemberDetail;
pub use members::MembersPage;
