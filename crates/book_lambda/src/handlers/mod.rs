pub mod create_book;
