mod collaborators;
mod use_cases;

pub use collaborators::Collaborators;
pub use use_cases::UseCases;
