pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::event;
pub use domain::faq;
pub use domain::jubilee;
pub use domain::notification;
pub use domain::representative;
pub use domain::session;
pub use domain::souvenir;
pub use domain::user;
pub use outbound::repositories;
