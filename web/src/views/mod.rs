mod admin;
pub use admin::AdminDashboard;

mod field;
pub use field::FieldDashboard;

mod login;
pub use login::Login;

mod not_found;
pub use not_found::NotFound;
