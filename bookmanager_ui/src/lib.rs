pub mod book_api;
pub mod command;
pub mod confirm;
pub mod draft;
pub mod form_manager;
pub mod settings;
pub mod view;

#[cfg(test)]
mod test_support;
