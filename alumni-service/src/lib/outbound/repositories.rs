pub mod event;
pub mod faq;
pub mod jubilee;
pub mod representative;
pub mod souvenir;
pub mod user;

pub use event::PostgresEventRepository;
pub use faq::PostgresFaqRepository;
pub use jubilee::PostgresJubileeRepository;
pub use representative::PostgresRepresentativeRepository;
pub use souvenir::PostgresSouvenirRepository;
pub use user::PostgresUserRepository;
