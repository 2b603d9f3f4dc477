pub use super::submission::Entity as Submission;
