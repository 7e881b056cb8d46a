pub mod session;

pub use session::{
    CONSULTANT_GREETING, ChatSession, EMPTY_REPLY_FALLBACK, ERROR_REPLY_FALLBACK,
};
