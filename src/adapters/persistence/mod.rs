//! Word-list and image persistence adapters.

pub mod image_saver;
pub mod memory_word_list;
pub mod word_list;

pub use image_saver::FsImageSaver;
pub use memory_word_list::InMemoryWordListSource;
pub use word_list::FsWordListSource;
