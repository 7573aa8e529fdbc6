use book_core::item::BookItem;

/// Storage collaborator for book writes. Implementations block until the
/// write is acknowledged or rejected.
pub trait BookStore {
    fn put_book(&self, item: &BookItem) -> Result<(), String>;
}

impl<T: BookStore + ?Sized> BookStore for &T {
    fn put_book(&self, item: &BookItem) -> Result<(), String> {
        (**self).put_book(item)
    }
}
