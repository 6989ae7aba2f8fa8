mod console_handler;
mod guard;

pub use console_handler::ConsoleHandler;
pub use guard::BindingGuard;
