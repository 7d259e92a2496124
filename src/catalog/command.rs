pub mod add_book_cmd;
pub mod get_book_cmd;
pub mod list_books_cmd;
pub mod remove_book_cmd;
pub mod update_book_cmd;

// fixed messages of the http contract
pub(crate) const REQUIRED_FIELDS_MESSAGE: &str = "Send all required fields: title, author, publishYear";
pub(crate) const BOOK_NOT_FOUND_MESSAGE: &str = "Book not found";
